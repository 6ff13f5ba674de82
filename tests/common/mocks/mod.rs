pub mod notifier;
pub mod swap;

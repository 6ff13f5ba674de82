#![allow(dead_code)]

pub mod builders;
pub mod mocks;

pub use builders::vm_stats::TestVmStatsBuilder;
pub use mocks::notifier::RecordingNotifier;
pub use mocks::swap::ScriptedSwapUsage;

pub const MB: u64 = 1024 * 1024;
pub const GB: u64 = 1024 * MB;

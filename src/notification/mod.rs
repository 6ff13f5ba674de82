//! Swap-onset notification tracking
//!
//! The tracker is a two-state machine fed with consecutive swap snapshots:
//!
//! ```text
//! Idle --(used: 0 -> >0)--> Notified   emits a notification request
//! Notified --(used: >0 -> 0)--> Idle   no emission
//! ```
//!
//! [`observe`] is pure: it takes the previous snapshot, the current one and
//! the carried [`NotificationState`], and returns whether to notify plus the
//! next state. Delivering the resulting [`Notification`] is left to a
//! [`Notifier`](crate::traits::Notifier).
//!
//! # Examples
//!
//! ```rust
//! use darwin_memwatch::notification::{observe, Notification, NotificationState};
//! use darwin_memwatch::swap::SwapSnapshot;
//!
//! let idle = SwapSnapshot::default();
//! let swapping = SwapSnapshot::new(2048, 512, 1536);
//!
//! let (notify, state) = observe(&idle, &swapping, NotificationState::default());
//! assert!(notify);
//! assert!(state.already_notified);
//!
//! let alert = Notification::swap_started(&swapping);
//! assert_eq!(alert.title, "Swap Usage Started");
//! ```

pub mod notifiers;
pub mod tracker;
pub mod types;

pub use notifiers::{AppleScriptNotifier, LogNotifier};
pub use tracker::observe;
pub use types::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::swap::SwapSnapshot;

/// Identifier attached to every swap-onset notification request
pub const SWAP_NOTIFICATION_ID: &str = "swapNotification";

/// Tracker state carried from one sampling cycle to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    /// True once an alert has fired for the current swap-usage episode
    pub already_notified: bool,
}

impl NotificationState {
    pub fn phase(&self) -> AlertPhase {
        if self.already_notified {
            AlertPhase::Notified
        } else {
            AlertPhase::Idle
        }
    }
}

/// The two tracker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    /// No alert raised for the current episode
    Idle,
    /// Alert raised; suppressed until swap usage returns to zero
    Notified,
}

impl fmt::Display for AlertPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Notified => write!(f, "Notified"),
        }
    }
}

/// Sound played with a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationSound {
    #[default]
    Default,
    Silent,
}

/// A notification request for the platform delivery service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub identifier: String,
    pub title: String,
    pub body: String,
    pub sound: NotificationSound,
}

impl Notification {
    /// The "swap usage started" alert for the given swap reading
    pub fn swap_started(swap: &SwapSnapshot) -> Self {
        Self {
            identifier: SWAP_NOTIFICATION_ID.to_string(),
            title: "Swap Usage Started".to_string(),
            body: format!(
                "The system has started using swap space. Current swap usage: {} ({}%)",
                swap.used(),
                swap.used_percent
            ),
            sound: NotificationSound::Default,
        }
    }
}

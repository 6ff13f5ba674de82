use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::core::metrics::Metric;
use crate::error::{Error, Result};
use crate::memory::constants::{DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD};
use crate::memory::MemorySnapshot;
use crate::notification::{Notification, NotificationState};
use crate::swap::constants::{SWAP_UTILITY_ARGS, SWAP_UTILITY_PATH};
use crate::swap::SwapSnapshot;

/// Sampling interval choices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum UpdateInterval {
    OneSecond,
    ThreeSeconds,
    #[default]
    FiveSeconds,
    TenSeconds,
}

impl UpdateInterval {
    /// Every selectable interval, shortest first
    pub const ALL: [UpdateInterval; 4] = [Self::OneSecond, Self::ThreeSeconds, Self::FiveSeconds, Self::TenSeconds];

    pub fn as_secs(&self) -> u64 {
        match self {
            Self::OneSecond => 1,
            Self::ThreeSeconds => 3,
            Self::FiveSeconds => 5,
            Self::TenSeconds => 10,
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.as_secs())
    }
}

impl TryFrom<u64> for UpdateInterval {
    type Error = Error;

    fn try_from(secs: u64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_secs() == secs)
            .ok_or_else(|| Error::invalid_argument("update interval must be one of 1, 3, 5 or 10 seconds", secs))
    }
}

impl FromStr for UpdateInterval {
    type Err = Error;

    /// Accepts `"5"` or `"5s"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
        let secs = digits
            .parse::<u64>()
            .map_err(|_| Error::invalid_argument("update interval is not a number of seconds", s))?;
        Self::try_from(secs)
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneSecond => write!(f, "1 second"),
            other => write!(f, "{} seconds", other.as_secs()),
        }
    }
}

/// Monitor configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub interval: UpdateInterval,
    /// Dispatch swap-onset notifications to the notifier
    pub notifications: bool,
    /// Program printing the swap usage report
    pub swap_program: PathBuf,
    pub swap_args: Vec<String>,
    /// Usage percentage at which the usage bar shows a warning
    pub warning_threshold: u64,
    /// Usage percentage at which the usage bar shows critical
    pub critical_threshold: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: UpdateInterval::default(),
            notifications: true,
            swap_program: PathBuf::from(SWAP_UTILITY_PATH),
            swap_args: SWAP_UTILITY_ARGS.iter().map(|arg| arg.to_string()).collect(),
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

impl MonitorConfig {
    pub fn with_interval(mut self, interval: UpdateInterval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications = enabled;
        self
    }

    pub fn with_swap_command(
        mut self,
        program: impl Into<PathBuf>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.swap_program = program.into();
        self.swap_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set usage bar thresholds; requires `warning < critical <= 100`
    pub fn with_thresholds(mut self, warning: u64, critical: u64) -> Result<Self> {
        if critical > 100 {
            return Err(Error::invalid_argument("Thresholds must be between 0 and 100", format!("critical: {}", critical)));
        }
        if warning >= critical {
            return Err(Error::invalid_argument(
                "Warning threshold must be less than critical threshold",
                format!("warning: {}, critical: {}", warning, critical),
            ));
        }
        self.warning_threshold = warning;
        self.critical_threshold = critical;
        Ok(self)
    }
}

/// State threaded through every sampling cycle
///
/// Owned by whoever drives the cycles; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorContext {
    pub notification: NotificationState,
    pub interval: UpdateInterval,
    /// Swap reading from the previous cycle, zero before the first one
    pub previous_swap: SwapSnapshot,
}

impl MonitorContext {
    pub fn new(interval: UpdateInterval) -> Self {
        Self { interval, ..Self::default() }
    }
}

/// One memory reading and one swap reading, taken in that order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Sample {
    pub memory: Metric<MemorySnapshot>,
    pub swap: Metric<SwapSnapshot>,
}

/// Output of one sampling cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cycle {
    pub sample: Sample,
    /// Swap-onset alert raised by this cycle, if any
    pub alert: Option<Notification>,
}

/// Requests accepted by a running monitor loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorCommand {
    /// Cancel the current timer and reschedule with a new period
    SetInterval(UpdateInterval),
    /// Run a cycle now without touching the timer
    RefreshNow,
    Shutdown,
}

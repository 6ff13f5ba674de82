//! Darwin Memwatch - memory and swap sampling for macOS
//!
//! This crate periodically samples physical memory usage and swap usage on
//! macOS and raises a one-shot alert when the system starts using swap.
//!
//! # Features
//!
//! - **Memory Sampling**: page counters from `host_statistics64` converted to
//!   app, wired, compressed, cached and free memory
//! - **Swap Sampling**: totals parsed from `sysctl -n vm.swapusage`
//! - **Swap Alerts**: a rising-edge tracker that fires once per swap episode
//! - **Rendering**: status line, detail panel and usage bar text
//!
//! # Examples
//!
//! ```no_run
//! use darwin_memwatch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let monitor = Monitor::new(MonitorConfig::default());
//!     let mut ctx = monitor.context();
//!
//!     let cycle = monitor.cycle(&mut ctx).await;
//!     println!("{}", StatusLine.render(&cycle.sample));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Samplers never fail outright. A reading that could not be obtained comes
//! back as a zero value wrapped in a [`Metric`](core::Metric) whose
//! `available` flag is `false`. Operations that can fail return [`Result`]:
//!
//! ```rust
//! use darwin_memwatch::{Error, Result};
//! use darwin_memwatch::swap::SwapSnapshot;
//!
//! fn parse() -> Result<SwapSnapshot> {
//!     SwapSnapshot::try_parse("total = 2048.00M  used = 1024.00M  free = 1024.00M")
//! }
//!
//! assert!(parse().is_ok());
//! assert!(matches!(SwapSnapshot::try_parse("garbage"), Err(Error::InvalidData(_))));
//! ```
//!
//! # Platform Support
//!
//! Memory statistics come from Mach calls and are only read on macOS. On
//! other platforms the memory sampler reports an unavailable reading.

pub mod core;
pub mod display;
pub mod error;
pub mod memory;
pub mod monitor;
pub mod notification;
pub mod swap;
pub mod traits;

// Private modules
mod utils;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::core::{ByteSize, ByteSizeFormat, Metric};
    pub use crate::display::{BarLevel, DetailPanel, Renderer, StatusLine, UsageBar};
    pub use crate::error::{Error, Result};
    pub use crate::memory::{MemorySampler, MemorySnapshot};
    pub use crate::monitor::{
        Cycle, Monitor, MonitorConfig, MonitorContext, MonitorHandle, Sample, UpdateInterval,
    };
    pub use crate::notification::{observe, Notification, NotificationState};
    pub use crate::swap::{SwapSampler, SwapSnapshot};
}

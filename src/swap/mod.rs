//! Swap sampling module
//!
//! Swap usage has no structured API here; it comes from the text printed by
//! `sysctl -n vm.swapusage`:
//!
//! ```text
//! total = 2048.00M  used = 1024.00M  free = 1024.00M  (encrypted)
//! ```
//!
//! Parsing is split from running the utility. [`SwapSnapshot::parse`] is a
//! pure function of the captured text, and [`SwapSampler`] pairs it with a
//! [`SwapUsageSource`](crate::traits::SwapUsageSource).
//!
//! # Examples
//!
//! ```no_run
//! use darwin_memwatch::swap::SwapSampler;
//!
//! #[tokio::main]
//! async fn main() {
//!     let swap = SwapSampler::default().snapshot().await;
//!     println!("Swap used: {} ({}%)", swap.used(), swap.used_percent);
//! }
//! ```

/// Swap sampling constants
pub mod constants;

/// Swap sampler and the `sysctl` source
pub mod monitors;

/// Swap data types and the report parser
pub mod types;

pub use monitors::*;
pub use types::*;

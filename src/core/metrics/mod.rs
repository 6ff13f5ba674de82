//! # Core Metrics Module
//!
//! Wraps sampled values with the time they were taken and whether the
//! underlying query actually succeeded.
//!
//! The memory and swap samplers never fail visibly: on error they hand back
//! a zero-valued snapshot. `Metric::available` is what lets a caller tell
//! "0% used" apart from "the query failed".
//!
//! ## Example
//!
//! ```rust
//! use darwin_memwatch::core::metrics::Metric;
//!
//! let live = Metric::new(42u64);
//! assert!(live.available);
//!
//! let failed = Metric::unavailable(0u64);
//! assert!(!failed.available);
//! ```
use std::time::SystemTime;

use serde::Serialize;

/// A single metric measurement with a timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric<T> {
    /// The value of the metric
    pub value: T,
    /// The timestamp when the metric was recorded
    pub timestamp: SystemTime,
    /// False when `value` is a fallback because the query failed
    pub available: bool,
}

impl<T> Metric<T> {
    /// Creates a new metric with the current time as timestamp
    pub fn new(value: T) -> Self {
        Self { value, timestamp: SystemTime::now(), available: true }
    }

    /// Creates a metric carrying a fallback value for a failed query
    pub fn unavailable(value: T) -> Self {
        Self { value, timestamp: SystemTime::now(), available: false }
    }

    /// Returns the value if the query succeeded
    pub fn get(&self) -> Option<&T> {
        self.available.then_some(&self.value)
    }
}

impl<T: Default> Default for Metric<T> {
    fn default() -> Self {
        Self::unavailable(T::default())
    }
}

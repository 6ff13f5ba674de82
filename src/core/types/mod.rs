//! # Core Types Module
//!
//! Value types shared by the samplers and the presentation layer.
//!
//! ## Key Types
//!
//! * `ByteSize` - A byte count with binary (1024-based) formatting
//! * `ByteSizeFormat` - Unit selection when rendering a `ByteSize`
//!
//! ## Example
//!
//! ```rust
//! use darwin_memwatch::core::types::ByteSize;
//!
//! let size = ByteSize::new(1536);
//! assert_eq!(size.as_kb(), 1.5);
//! assert_eq!(size.short(), "1.5 KB");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit labels used by [`ByteSize::short`], in ascending 1024 steps
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Represents a size in bytes with convenient conversion methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// Creates a new ByteSize instance from the given number of bytes
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Creates a ByteSize from a megabyte quantity (1 MB = 1024 × 1024 bytes)
    ///
    /// Fractional bytes are truncated. Negative or non-finite inputs yield zero.
    pub fn from_megabytes(megabytes: f64) -> Self {
        if !megabytes.is_finite() || megabytes <= 0.0 {
            return Self(0);
        }
        Self((megabytes * 1024.0 * 1024.0) as u64)
    }

    /// Returns the size in bytes
    pub fn as_bytes(&self) -> u64 {
        self.0
    }

    /// Returns the size in kilobytes
    pub fn as_kb(&self) -> f64 {
        self.0 as f64 / 1024.0
    }

    /// Returns the size in megabytes
    pub fn as_mb(&self) -> f64 {
        self.as_kb() / 1024.0
    }

    /// Returns the size in gigabytes
    pub fn as_gb(&self) -> f64 {
        self.as_mb() / 1024.0
    }

    /// Short human-readable form: binary units, one decimal place
    ///
    /// Zero renders as `"0 B"`; everything else picks the largest unit that
    /// keeps the value at or above 1, so `1536` renders as `"1.5 KB"`.
    pub fn short(&self) -> String {
        if self.0 == 0 {
            return "0 B".to_string();
        }

        let mut value = self.0 as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }

        format!("{:.1} {}", value, UNITS[unit])
    }

    /// Renders the size in the requested unit
    pub fn format(&self, format: ByteSizeFormat) -> String {
        match format {
            ByteSizeFormat::Bytes => format!("{} B", self.0),
            ByteSizeFormat::Kilobytes => format!("{:.2} KB", self.as_kb()),
            ByteSizeFormat::Megabytes => format!("{:.2} MB", self.as_mb()),
            ByteSizeFormat::Gigabytes => format!("{:.2} GB", self.as_gb()),
            ByteSizeFormat::Auto => self.short(),
        }
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.as_bytes()
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

/// Format options for displaying byte sizes
///
/// Used to control how byte sizes are formatted when displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteSizeFormat {
    /// Show size in bytes
    Bytes,
    /// Show size in kilobytes
    Kilobytes,
    /// Show size in megabytes
    Megabytes,
    /// Show size in gigabytes
    Gigabytes,
    /// Automatically select the most appropriate unit
    #[default]
    Auto,
}

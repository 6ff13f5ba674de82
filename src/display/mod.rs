//! Presentation renderers
//!
//! Renderers only read [`Sample`] values; they never query the system. Each
//! one produces the text for one presentation surface:
//!
//! - [`StatusLine`]: the compact menu-bar summary, `RAM: 65% | Swap: 1.0 GB`,
//!   where the RAM figure is app plus wired memory
//! - [`DetailPanel`]: one labelled line per memory and swap category
//! - [`UsageBar`]: a fixed-width bar of the memory usage percentage
//!
//! Readings whose query failed render as placeholders rather than zeros.

use std::fmt;

use crate::core::types::ByteSize;
use crate::memory::constants::{DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD};
use crate::monitor::{MonitorConfig, Sample};

/// Placeholder shown for a value whose query failed
pub const PLACEHOLDER: &str = "Loading...";

/// A presentation surface fed with samples
pub trait Renderer {
    fn render(&self, sample: &Sample) -> String;
}

/// Menu-bar summary: app plus wired percentage and short swap used size
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusLine;

impl Renderer for StatusLine {
    fn render(&self, sample: &Sample) -> String {
        let ram = match sample.memory.get() {
            Some(memory) => format!("{}%", memory.app_wired_percent()),
            None => "--".to_string(),
        };
        let swap = match sample.swap.get() {
            Some(swap) => swap.used().short(),
            None => "--".to_string(),
        };
        format!("RAM: {} | Swap: {}", ram, swap)
    }
}

/// Multi-line breakdown of every memory and swap category
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailPanel;

impl DetailPanel {
    fn line(label: &str, size: Option<ByteSize>) -> String {
        match size {
            Some(size) => format!("{:<17}{}", format!("{}:", label), size),
            None => format!("{:<17}{}", format!("{}:", label), PLACEHOLDER),
        }
    }
}

impl Renderer for DetailPanel {
    fn render(&self, sample: &Sample) -> String {
        let memory = sample.memory.get();
        let swap = sample.swap.get();

        let lines = [
            Self::line("Physical Memory", memory.map(|m| m.total())),
            Self::line("Memory Used", memory.map(|m| m.used())),
            Self::line("App Memory", memory.map(|m| ByteSize::new(m.app_bytes))),
            Self::line("Wired Memory", memory.map(|m| ByteSize::new(m.wired_bytes))),
            Self::line("Compressed", memory.map(|m| ByteSize::new(m.compressed_bytes))),
            Self::line("Cached Files", memory.map(|m| ByteSize::new(m.cached_bytes))),
            Self::line("Active Memory", memory.map(|m| ByteSize::new(m.active_bytes))),
            Self::line("Inactive Memory", memory.map(|m| ByteSize::new(m.inactive_bytes))),
            Self::line("Free Memory", memory.map(|m| ByteSize::new(m.free_bytes))),
            String::new(),
            Self::line("Swap Total", swap.map(|s| ByteSize::new(s.total_bytes))),
            Self::line("Swap Used", swap.map(|s| s.used())),
            Self::line("Swap Free", swap.map(|s| ByteSize::new(s.free_bytes))),
        ];

        lines.join("\n")
    }
}

/// Severity band of a usage percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLevel {
    Normal,
    Warning,
    Critical,
}

impl BarLevel {
    /// Band for `percent` given the warning and critical thresholds
    pub fn for_percent(percent: u64, warning: u64, critical: u64) -> Self {
        if percent >= critical {
            Self::Critical
        } else if percent >= warning {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for BarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Text bar of the memory used percentage with a severity label
///
/// The fill is clamped to the bar width; the printed percentage is not.
#[derive(Debug, Clone, Copy)]
pub struct UsageBar {
    width: usize,
    warning: u64,
    critical: u64,
}

impl UsageBar {
    pub fn new(width: usize, warning: u64, critical: u64) -> Self {
        Self { width, warning, critical }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(Self::default().width, config.warning_threshold, config.critical_threshold)
    }

    pub fn level(&self, percent: u64) -> BarLevel {
        BarLevel::for_percent(percent, self.warning, self.critical)
    }

    fn filled(&self, percent: u64) -> usize {
        let clamped = percent.min(100) as usize;
        clamped * self.width / 100
    }
}

impl Default for UsageBar {
    fn default() -> Self {
        Self::new(20, DEFAULT_WARNING_THRESHOLD, DEFAULT_CRITICAL_THRESHOLD)
    }
}

impl Renderer for UsageBar {
    fn render(&self, sample: &Sample) -> String {
        let Some(memory) = sample.memory.get() else {
            return format!("[{}] {}", ".".repeat(self.width), PLACEHOLDER);
        };

        let percent = memory.used_percent;
        let filled = self.filled(percent);
        format!(
            "[{}{}] {}% {}",
            "#".repeat(filled),
            ".".repeat(self.width - filled),
            percent,
            self.level(percent)
        )
    }
}

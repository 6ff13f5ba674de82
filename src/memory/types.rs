use serde::{Deserialize, Serialize};

use crate::core::types::ByteSize;
use crate::memory::constants::APP_MEMORY_CACHE_DIVISOR;

/// Raw VM page counts by category, as reported by the kernel
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageCounts {
    /// Pages immediately available for allocation
    pub free: u64,
    /// Pages actively in use
    pub active: u64,
    /// Pages not accessed recently but still resident
    pub inactive: u64,
    /// Pages that cannot be paged out
    pub wired: u64,
    /// Pages occupied by the compressor
    pub compressed: u64,
    /// File-backed (externally backed) pages
    pub external: u64,
}

/// One memory sample, in bytes, with the derived categories
///
/// The default value is all zeros, which is also what a failed kernel query
/// produces. `used_percent` is deliberately not clamped: the app memory
/// heuristic can push `used_bytes` past `total_bytes`.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Installed physical memory
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub active_bytes: u64,
    pub inactive_bytes: u64,
    pub wired_bytes: u64,
    pub compressed_bytes: u64,
    /// File-backed pages plus inactive pages
    pub cached_bytes: u64,
    /// Heuristic estimate of application memory, `active - cached / 2`
    pub app_bytes: u64,
    /// `app + wired + compressed`
    pub used_bytes: u64,
    /// `floor(used * 100 / total)`, 0 when total is 0
    pub used_percent: u64,
}

impl MemorySnapshot {
    /// Derives a snapshot from page counts, the page size, and total memory
    ///
    /// App memory is an approximation, not an OS-reported figure: half of
    /// the cached bytes are assumed to be attributable to active pages and
    /// are taken back out of `active`. Integer division truncates, and the
    /// subtraction saturates at zero rather than wrapping.
    pub fn from_pages(pages: &PageCounts, page_size: u64, total_bytes: u64) -> Self {
        let to_bytes = |count: u64| count.saturating_mul(page_size);

        let free_bytes = to_bytes(pages.free);
        let active_bytes = to_bytes(pages.active);
        let inactive_bytes = to_bytes(pages.inactive);
        let wired_bytes = to_bytes(pages.wired);
        let compressed_bytes = to_bytes(pages.compressed);
        let external_bytes = to_bytes(pages.external);

        let cached_bytes = external_bytes.saturating_add(inactive_bytes);
        let app_bytes = active_bytes.saturating_sub(cached_bytes / APP_MEMORY_CACHE_DIVISOR);
        let used_bytes = app_bytes.saturating_add(wired_bytes).saturating_add(compressed_bytes);

        Self {
            total_bytes,
            free_bytes,
            active_bytes,
            inactive_bytes,
            wired_bytes,
            compressed_bytes,
            cached_bytes,
            app_bytes,
            used_bytes,
            used_percent: percent_of(used_bytes, total_bytes),
        }
    }

    /// True when every field is zero, the shape of a failed query
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// `floor((app + wired) * 100 / total)`, the figure shown in the menu bar
    ///
    /// Unlike `used_percent` this leaves compressed memory out.
    pub fn app_wired_percent(&self) -> u64 {
        percent_of(self.app_bytes.saturating_add(self.wired_bytes), self.total_bytes)
    }

    pub fn total(&self) -> ByteSize {
        ByteSize::new(self.total_bytes)
    }

    pub fn used(&self) -> ByteSize {
        ByteSize::new(self.used_bytes)
    }
}

/// Truncating `part * 100 / whole`, 0 when `whole` is 0
///
/// Computed in u128 so the multiplication cannot overflow; the result is not
/// clamped to 100.
pub fn percent_of(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    let percent = u128::from(part) * 100 / u128::from(whole);
    u64::try_from(percent).unwrap_or(u64::MAX)
}

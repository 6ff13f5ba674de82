//! Memory sampling module
//!
//! Reads the kernel's virtual-memory page counters and converts them into the
//! categories Activity Monitor shows: app memory, wired memory, compressed
//! memory, cached files and free memory.
//!
//! # Derivation
//!
//! | Field      | Formula                                 |
//! |------------|-----------------------------------------|
//! | `cached`   | `external + inactive`                   |
//! | `app`      | `active - cached / 2` (approximation)   |
//! | `used`     | `app + wired + compressed`              |
//! | `used %`   | `floor(used * 100 / total)`             |
//!
//! All page counts are multiplied by the page size reported by the kernel.
//!
//! # Examples
//!
//! ```no_run
//! use darwin_memwatch::memory::MemorySampler;
//!
//! let sampler = MemorySampler::default();
//! let metric = sampler.sample();
//!
//! if metric.available {
//!     println!("Memory used: {}%", metric.value.used_percent);
//! } else {
//!     println!("Memory statistics unavailable");
//! }
//! ```

/// Memory sampling constants
pub mod constants;

/// Memory sampler implementation
pub mod monitors;

/// Memory data types
pub mod types;

pub use monitors::*;
pub use types::*;

use crate::error::Result;
use crate::traits::VmStatsSource;
use crate::utils::bindings;

/// [`VmStatsSource`] backed by `host_statistics64` and `sysctl hw.memsize`
#[derive(Debug, Clone, Copy, Default)]
pub struct MachMemoryStats;

impl VmStatsSource for MachMemoryStats {
    fn page_size(&self) -> Result<u64> {
        bindings::kernel_page_size()
    }

    fn page_counts(&self) -> Result<PageCounts> {
        bindings::host_page_counts()
    }

    fn physical_memory(&self) -> Result<u64> {
        bindings::physical_memory()
    }
}

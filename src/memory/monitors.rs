use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, trace, warn};

use crate::core::metrics::Metric;
use crate::error::{Error, Result};
use crate::memory::types::MemorySnapshot;
use crate::memory::MachMemoryStats;
use crate::traits::{MetricSampler, VmStatsSource};

/// Memory sampler turning raw VM counters into a [`MemorySnapshot`]
///
/// Sampling never fails visibly. When any kernel query fails the sampler
/// logs the cause and returns the all-zero snapshot wrapped in an
/// unavailable [`Metric`].
#[derive(Debug, Clone)]
pub struct MemorySampler {
    source: Arc<dyn VmStatsSource>,
}

impl MemorySampler {
    /// Create a sampler reading from the given VM statistics source
    pub fn new(source: Arc<dyn VmStatsSource>) -> Self {
        Self { source }
    }

    /// Take one memory sample
    #[instrument(level = "trace", skip(self))]
    pub fn sample(&self) -> Metric<MemorySnapshot> {
        match self.try_sample() {
            Ok(snapshot) => {
                trace!(used = snapshot.used_bytes, percent = snapshot.used_percent, "memory sampled");
                Metric::new(snapshot)
            }
            Err(err @ Error::NotAvailable(_)) => {
                debug!(error = %err, "memory statistics not available on this platform");
                Metric::unavailable(MemorySnapshot::default())
            }
            Err(err) => {
                warn!(error = %err, "memory statistics query failed, reporting zero snapshot");
                Metric::unavailable(MemorySnapshot::default())
            }
        }
    }

    /// Take one memory sample and discard the availability flag
    pub fn snapshot(&self) -> MemorySnapshot {
        self.sample().value
    }

    fn try_sample(&self) -> Result<MemorySnapshot> {
        let pages = self.source.page_counts()?;
        let page_size = self.source.page_size()?;
        let total = self.source.physical_memory()?;
        Ok(MemorySnapshot::from_pages(&pages, page_size, total))
    }
}

#[async_trait]
impl MetricSampler for MemorySampler {
    type MetricType = MemorySnapshot;

    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_metric(&self) -> Metric<MemorySnapshot> {
        self.sample()
    }
}

impl Default for MemorySampler {
    fn default() -> Self {
        Self::new(Arc::new(MachMemoryStats))
    }
}

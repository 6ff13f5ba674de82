// Traits module
//
// Collaborator seams for the sampling engine. Each external system the core
// talks to (the kernel VM counters, the swap-usage utility, the notification
// service) sits behind one of these so the derivation logic can be driven by
// fixtures in tests.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::core::metrics::Metric;
use crate::error::Result;
use crate::memory::PageCounts;
use crate::notification::Notification;

/// Source of raw virtual-memory page counters and physical memory size
#[cfg_attr(test, automock)]
pub trait VmStatsSource: Send + Sync + std::fmt::Debug {
    /// Size of one VM page in bytes, as reported by the kernel
    fn page_size(&self) -> Result<u64>;

    /// Current page counts by category
    fn page_counts(&self) -> Result<PageCounts>;

    /// Total installed physical memory in bytes
    fn physical_memory(&self) -> Result<u64>;
}

/// Source of the swap-usage report text (`total = ..M used = ..M free = ..M`)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SwapUsageSource: Send + Sync + std::fmt::Debug {
    /// Captured standard output of the swap-usage utility
    async fn swap_usage_text(&self) -> Result<String>;
}

/// Delivery endpoint for notification requests
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Hand a notification to the platform service
    async fn deliver(&self, notification: &Notification) -> Result<()>;
}

/// A sampler producing one kind of reading per call
///
/// Implementations never fail: a failed query comes back as an unavailable
/// [`Metric`] carrying the zero value.
///
/// ```rust
/// use darwin_memwatch::core::Metric;
/// use darwin_memwatch::traits::MetricSampler;
///
/// struct Constant;
///
/// #[async_trait::async_trait]
/// impl MetricSampler for Constant {
///     type MetricType = u64;
///
///     fn name(&self) -> &'static str {
///         "constant"
///     }
///
///     async fn get_metric(&self) -> Metric<u64> {
///         Metric::new(42)
///     }
/// }
/// ```
#[async_trait]
pub trait MetricSampler: Send + Sync {
    /// The reading this sampler produces
    type MetricType: Clone + Send + Sync + 'static;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Take one reading
    async fn get_metric(&self) -> Metric<Self::MetricType>;
}

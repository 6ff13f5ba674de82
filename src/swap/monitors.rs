use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, trace, warn};

use crate::core::metrics::Metric;
use crate::error::{Error, Result};
use crate::swap::constants::{SWAP_UTILITY_ARGS, SWAP_UTILITY_PATH};
use crate::swap::types::SwapSnapshot;
use crate::traits::{MetricSampler, SwapUsageSource};

/// [`SwapUsageSource`] that runs an external utility and captures stdout
///
/// Defaults to `/usr/sbin/sysctl -n vm.swapusage`.
#[derive(Debug, Clone)]
pub struct SysctlSwapUsage {
    program: PathBuf,
    args: Vec<String>,
}

impl SysctlSwapUsage {
    /// Use a custom program and arguments instead of `sysctl -n vm.swapusage`
    pub fn new(program: impl Into<PathBuf>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }
}

impl Default for SysctlSwapUsage {
    fn default() -> Self {
        Self::new(SWAP_UTILITY_PATH, SWAP_UTILITY_ARGS)
    }
}

#[async_trait]
impl SwapUsageSource for SysctlSwapUsage {
    async fn swap_usage_text(&self) -> Result<String> {
        let output = Command::new(&self.program).args(&self.args).kill_on_drop(true).output().await?;

        if !output.status.success() {
            return Err(Error::system(format!("{} exited with {}", self.program.display(), output.status)));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|err| Error::invalid_data(format!("swap usage output is not UTF-8: {}", err)))?;

        if text.trim().is_empty() {
            return Err(Error::invalid_data("swap usage output is empty"));
        }

        Ok(text)
    }
}

/// Swap sampler parsing the swap-usage report into a [`SwapSnapshot`]
///
/// Like the memory sampler it never fails visibly: a launch failure,
/// undecodable output, or text with no recognisable field all produce the
/// zero snapshot wrapped in an unavailable [`Metric`]. Partially parsable
/// text still counts as available, with the missing fields left at 0.
#[derive(Debug, Clone)]
pub struct SwapSampler {
    source: Arc<dyn SwapUsageSource>,
}

impl SwapSampler {
    /// Create a sampler reading from the given swap usage source
    pub fn new(source: Arc<dyn SwapUsageSource>) -> Self {
        Self { source }
    }

    /// Take one swap sample
    #[instrument(level = "trace", skip(self))]
    pub async fn sample(&self) -> Metric<SwapSnapshot> {
        let text = match self.source.swap_usage_text().await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "swap usage query failed, reporting zero snapshot");
                return Metric::unavailable(SwapSnapshot::default());
            }
        };

        match SwapSnapshot::try_parse(&text) {
            Ok(snapshot) => {
                trace!(used = snapshot.used_bytes, percent = snapshot.used_percent, "swap sampled");
                Metric::new(snapshot)
            }
            Err(err) => {
                debug!(error = %err, "swap usage output not recognised");
                Metric::unavailable(SwapSnapshot::default())
            }
        }
    }

    /// Take one swap sample and discard the availability flag
    pub async fn snapshot(&self) -> SwapSnapshot {
        self.sample().await.value
    }
}

#[async_trait]
impl MetricSampler for SwapSampler {
    type MetricType = SwapSnapshot;

    fn name(&self) -> &'static str {
        "swap"
    }

    async fn get_metric(&self) -> Metric<SwapSnapshot> {
        self.sample().await
    }
}

impl Default for SwapSampler {
    fn default() -> Self {
        Self::new(Arc::new(SysctlSwapUsage::default()))
    }
}

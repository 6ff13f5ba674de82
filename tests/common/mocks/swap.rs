use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use darwin_memwatch::{error::Result, traits::SwapUsageSource, Error};

/// Replays canned `vm.swapusage` outputs, repeating the last one forever
#[derive(Debug)]
pub struct ScriptedSwapUsage {
    script: Mutex<VecDeque<Option<String>>>,
}

impl ScriptedSwapUsage {
    /// `None` entries simulate a failed query
    pub fn new(outputs: Vec<Option<String>>) -> Self {
        assert!(!outputs.is_empty(), "script needs at least one output");
        Self { script: Mutex::new(outputs.into()) }
    }

    /// Outputs reporting the given used megabytes out of a 2048M swap file
    pub fn used_megabytes(used: &[u64]) -> Self {
        Self::new(used.iter().map(|mb| Some(swap_usage(2048, *mb))).collect())
    }
}

#[async_trait]
impl SwapUsageSource for ScriptedSwapUsage {
    async fn swap_usage_text(&self) -> Result<String> {
        let mut script = self.script.lock().unwrap();
        let next = if script.len() > 1 { script.pop_front().unwrap() } else { script[0].clone() };
        next.ok_or_else(|| Error::System("sysctl exited with status 1".to_string()))
    }
}

/// `vm.swapusage` text in the layout sysctl prints
pub fn swap_usage(total_mb: u64, used_mb: u64) -> String {
    format!(
        "total = {}.00M  used = {}.00M  free = {}.00M  (encrypted)",
        total_mb,
        used_mb,
        total_mb - used_mb
    )
}

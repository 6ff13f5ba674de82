use std::sync::Arc;

use darwin_memwatch::swap::{SwapSampler, SwapSnapshot};

use crate::common::mocks::swap::swap_usage;
use crate::common::{ScriptedSwapUsage, GB};

#[test]
fn test_swap_parses_reference_output() {
    let swap = SwapSnapshot::parse("total = 2048.00M used = 1024.00M free = 1024.00M");

    assert_eq!(swap, SwapSnapshot::new(2_147_483_648, 1_073_741_824, 1_073_741_824));
    assert_eq!(swap.used_percent, 50);
}

#[test]
fn test_swap_malformed_output_is_zero() {
    for text in ["", "total = ", "vm.swapusage: unknown oid"] {
        let swap = SwapSnapshot::parse(text);
        assert!(swap.is_zero(), "expected zero snapshot for {:?}", text);
    }
}

#[test]
fn test_swap_zero_total_has_zero_percent() {
    let swap = SwapSnapshot::parse("total = 0.00M used = 0.00M free = 0.00M");
    assert_eq!(swap.used_percent, 0);
}

#[tokio::test]
async fn test_swap_sampler_is_deterministic() {
    let sampler = SwapSampler::new(Arc::new(ScriptedSwapUsage::used_megabytes(&[1024])));

    let first = sampler.snapshot().await;
    let second = sampler.snapshot().await;

    assert_eq!(first, second);
    assert_eq!(first.used_bytes, GB);
}

#[tokio::test]
async fn test_swap_sampler_query_failure_yields_zero() {
    let sampler = SwapSampler::new(Arc::new(ScriptedSwapUsage::new(vec![None])));

    let metric = sampler.sample().await;
    assert!(!metric.available);
    assert!(metric.value.is_zero());
}

#[tokio::test]
async fn test_swap_sampler_partial_output() {
    let text = "total = 2048.00M used = 512.00M".to_string();
    let sampler = SwapSampler::new(Arc::new(ScriptedSwapUsage::new(vec![Some(text)])));

    let metric = sampler.sample().await;
    assert!(metric.available);
    assert_eq!(metric.value.total_bytes, 2 * GB);
    assert_eq!(metric.value.free_bytes, 0);
    assert_eq!(metric.value.used_percent, 25);
}

#[tokio::test]
async fn test_swap_sampler_reads_sysctl_layout() {
    let sampler = SwapSampler::new(Arc::new(ScriptedSwapUsage::new(vec![Some(swap_usage(4096, 1024))])));

    let swap = sampler.snapshot().await;
    assert_eq!(swap.total_bytes, 4 * GB);
    assert_eq!(swap.used_percent, 25);
}

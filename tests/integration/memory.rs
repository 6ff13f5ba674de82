use std::sync::Arc;

use darwin_memwatch::memory::{percent_of, MemorySampler};

use crate::common::{TestVmStatsBuilder, GB};

const PAGE: u64 = 16384;

fn sampler(builder: TestVmStatsBuilder) -> MemorySampler {
    MemorySampler::new(Arc::new(builder.build()))
}

#[test]
fn test_memory_derivation_matches_activity_monitor_categories() {
    let metric = sampler(
        TestVmStatsBuilder::new()
            .page_size(PAGE)
            .physical_memory(16 * GB)
            .free(50_000)
            .active(100_000)
            .inactive(20_000)
            .external(10_000)
            .wired(30_000)
            .compressed(5_000),
    )
    .sample();

    assert!(metric.available);
    let memory = metric.value;
    assert_eq!(memory.total_bytes, 16 * GB);
    assert_eq!(memory.free_bytes, 50_000 * PAGE);
    assert_eq!(memory.cached_bytes, (10_000 + 20_000) * PAGE);
    assert_eq!(memory.app_bytes, memory.active_bytes - memory.cached_bytes / 2);
    assert_eq!(memory.app_bytes, 85_000 * PAGE);
    assert_eq!(memory.used_bytes, memory.app_bytes + memory.wired_bytes + memory.compressed_bytes);
    assert_eq!(memory.used_percent, 11);
}

#[test]
fn test_memory_page_size_is_not_assumed() {
    let small = sampler(TestVmStatsBuilder::new().page_size(4096).active(1000)).snapshot();
    let large = sampler(TestVmStatsBuilder::new().page_size(16384).active(1000)).snapshot();

    assert_eq!(small.active_bytes, 1000 * 4096);
    assert_eq!(large.active_bytes, 1000 * 16384);
}

#[test]
fn test_memory_app_bytes_truncates_half_cache() {
    // 3 cached pages of 1 byte: half of 3 bytes truncates to 1
    let memory =
        sampler(TestVmStatsBuilder::new().page_size(1).physical_memory(100).active(10).inactive(3))
            .snapshot();

    assert_eq!(memory.cached_bytes, 3);
    assert_eq!(memory.app_bytes, 9);
}

#[test]
fn test_memory_used_percent_floors() {
    assert_eq!(percent_of(654_321, 1_000_000), 65);
    assert_eq!(percent_of(999_999, 1_000_000), 99);
}

#[test]
fn test_memory_used_percent_is_not_clamped() {
    let memory = sampler(
        TestVmStatsBuilder::new().page_size(1).physical_memory(100).active(90).wired(40),
    )
    .snapshot();

    assert_eq!(memory.used_percent, 130);
}

#[test]
fn test_memory_kernel_failure_yields_zero_snapshot() {
    let metric = sampler(TestVmStatsBuilder::new().active(1000).failing()).sample();

    assert!(!metric.available);
    assert!(metric.value.is_zero());
    assert_eq!(metric.get(), None);
}

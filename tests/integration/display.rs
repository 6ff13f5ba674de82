use darwin_memwatch::core::{ByteSize, Metric};
use darwin_memwatch::display::{DetailPanel, Renderer, StatusLine, UsageBar};
use darwin_memwatch::memory::{MemorySnapshot, PageCounts};
use darwin_memwatch::monitor::{MonitorConfig, Sample};
use darwin_memwatch::swap::SwapSnapshot;

use crate::common::GB;

fn sample() -> Sample {
    let pages = PageCounts { active: 65, ..Default::default() };
    Sample {
        memory: Metric::new(MemorySnapshot::from_pages(&pages, 1024, 100 * 1024)),
        swap: Metric::new(SwapSnapshot::new(2 * GB, GB, GB)),
    }
}

#[test]
fn test_byte_formatter_short_form() {
    assert_eq!(ByteSize::new(1536).short(), "1.5 KB");
    assert_eq!(ByteSize::new(0).short(), "0 B");
}

#[test]
fn test_status_line_summary() {
    assert_eq!(StatusLine.render(&sample()), "RAM: 65% | Swap: 1.0 GB");
}

#[test]
fn test_detail_panel_waits_for_data() {
    let panel = DetailPanel.render(&Sample::default());
    assert!(panel.lines().filter(|line| !line.is_empty()).all(|line| line.ends_with("Loading...")));
}

#[test]
fn test_usage_bar_uses_configured_thresholds() {
    let config = MonitorConfig::default().with_thresholds(50, 70).unwrap();
    let bar = UsageBar::from_config(&config);

    assert!(bar.render(&sample()).ends_with("65% Warning"));
}

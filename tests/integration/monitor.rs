use std::sync::Arc;

use darwin_memwatch::monitor::{Monitor, MonitorConfig, Sampler, UpdateInterval};
use darwin_memwatch::notification::observe;
use darwin_memwatch::swap::SwapSnapshot;

use crate::common::{RecordingNotifier, ScriptedSwapUsage, TestVmStatsBuilder, MB};

fn monitor(used_mb: &[u64]) -> Monitor {
    let vm = TestVmStatsBuilder::new().active(1000).wired(500).build();
    let sampler = Sampler::from_sources(Arc::new(vm), Arc::new(ScriptedSwapUsage::used_megabytes(used_mb)));
    Monitor::with_sampler(MonitorConfig::default(), sampler)
}

#[test]
fn test_tracker_rising_edge_and_refire() {
    let mut previous = SwapSnapshot::default();
    let mut state = Default::default();
    let mut fired = Vec::new();

    for used in [0, 0, 512, 512, 0, 512] {
        let current = SwapSnapshot::new(2048 * MB, used * MB, (2048 - used) * MB);
        let (notify, next) = observe(&previous, &current, state);
        fired.push(notify);
        state = next;
        previous = current;
    }

    assert_eq!(fired, vec![false, false, true, false, false, true]);
}

#[tokio::test]
async fn test_cycles_deliver_one_alert_per_episode() {
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = monitor(&[0, 0, 512, 512, 0, 512]).with_notifier(notifier.clone());
    let mut ctx = monitor.context();

    for _ in 0..6 {
        let cycle = monitor.cycle(&mut ctx).await;
        monitor.dispatch(&cycle).await;
    }

    let delivered = notifier.delivered();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0].identifier, "swapNotification");
    assert_eq!(
        delivered[0].body,
        "The system has started using swap space. Current swap usage: 512.0 MB (25%)"
    );
}

#[tokio::test]
async fn test_disabled_notifications_still_track_state() {
    let notifier = Arc::new(RecordingNotifier::new());
    let vm = TestVmStatsBuilder::new().build();
    let sampler = Sampler::from_sources(Arc::new(vm), Arc::new(ScriptedSwapUsage::used_megabytes(&[256])));
    let monitor = Monitor::with_sampler(MonitorConfig::default().with_notifications(false), sampler)
        .with_notifier(notifier.clone());
    let mut ctx = monitor.context();

    let cycle = monitor.cycle(&mut ctx).await;
    monitor.dispatch(&cycle).await;

    assert!(cycle.alert.is_some());
    assert!(ctx.notification.already_notified);
    assert!(notifier.delivered().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_driver_publishes_cycles_on_interval() {
    let monitor = Monitor::with_sampler(
        MonitorConfig::default().with_interval(UpdateInterval::OneSecond),
        Sampler::from_sources(
            Arc::new(TestVmStatsBuilder::new().active(1000).build()),
            Arc::new(ScriptedSwapUsage::used_megabytes(&[0])),
        ),
    );
    let handle = monitor.start();
    let mut updates = handle.subscribe();

    for _ in 0..3 {
        updates.changed().await.unwrap();
        let cycle = updates.borrow_and_update().clone().unwrap();
        assert!(cycle.sample.memory.available);
        assert!(cycle.alert.is_none());
    }

    let ctx = handle.shutdown().await.unwrap();
    assert_eq!(ctx.interval, UpdateInterval::OneSecond);
    assert!(!ctx.notification.already_notified);
}

#[test]
fn test_interval_choices() {
    assert_eq!(UpdateInterval::default(), UpdateInterval::FiveSeconds);
    assert_eq!("3s".parse::<UpdateInterval>().unwrap(), UpdateInterval::ThreeSeconds);
    assert!("7".parse::<UpdateInterval>().is_err());
}

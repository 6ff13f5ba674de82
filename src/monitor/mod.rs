//! Sampling cycle and driver loop
//!
//! A cycle is Memory Sampler → Swap Sampler → Notification Tracker. All
//! state that survives between cycles lives in an explicit
//! [`MonitorContext`] passed to [`Monitor::cycle`], so a single cycle can be
//! exercised without a timer.
//!
//! [`Monitor::start`] runs cycles on a tokio interval: once at startup and
//! then on every tick. Cycles are awaited one after another, so they never
//! overlap. Changing the interval cancels the timer and schedules a new one;
//! it never interrupts a cycle already running.
//!
//! # Examples
//!
//! ```no_run
//! use darwin_memwatch::monitor::{Monitor, MonitorConfig, UpdateInterval};
//! use darwin_memwatch::notification::LogNotifier;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MonitorConfig::default().with_interval(UpdateInterval::ThreeSeconds);
//!     let monitor = Monitor::new(config).with_notifier(Arc::new(LogNotifier));
//!
//!     let handle = monitor.start();
//!     let mut updates = handle.subscribe();
//!     updates.changed().await?;
//!
//!     if let Some(cycle) = updates.borrow().as_ref() {
//!         println!("RAM: {}%", cycle.sample.memory.value.used_percent);
//!     }
//!
//!     handle.shutdown().await?;
//!     Ok(())
//! }
//! ```

/// Monitor constants
pub mod constants;

/// Monitor configuration and cycle types
pub mod types;

pub use types::*;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{Error, Result};
use crate::memory::{MachMemoryStats, MemorySampler};
use crate::monitor::constants::COMMAND_CHANNEL_CAPACITY;
use crate::notification::{observe, Notification};
use crate::swap::{SwapSampler, SysctlSwapUsage};
use crate::traits::{MetricSampler, Notifier, SwapUsageSource, VmStatsSource};

/// Memory and swap samplers combined
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    memory: MemorySampler,
    swap: SwapSampler,
}

impl Sampler {
    pub fn new(memory: MemorySampler, swap: SwapSampler) -> Self {
        Self { memory, swap }
    }

    /// Build a sampler from raw collaborator sources
    pub fn from_sources(vm: Arc<dyn VmStatsSource>, swap: Arc<dyn SwapUsageSource>) -> Self {
        Self::new(MemorySampler::new(vm), SwapSampler::new(swap))
    }

    /// Take a memory reading, then a swap reading
    pub async fn sample(&self) -> Sample {
        let memory = self.memory.get_metric().await;
        trace!(sampler = self.memory.name(), available = memory.available, "reading taken");
        let swap = self.swap.get_metric().await;
        trace!(sampler = self.swap.name(), available = swap.available, "reading taken");
        Sample { memory, swap }
    }
}

/// Sampling engine plus the optional notification collaborator
#[derive(Debug, Clone)]
pub struct Monitor {
    sampler: Sampler,
    notifier: Option<Arc<dyn Notifier>>,
    config: MonitorConfig,
}

impl Monitor {
    /// Monitor reading the kernel counters and the configured swap utility
    pub fn new(config: MonitorConfig) -> Self {
        let swap = SysctlSwapUsage::new(config.swap_program.clone(), config.swap_args.clone());
        let sampler = Sampler::from_sources(Arc::new(MachMemoryStats), Arc::new(swap));
        Self::with_sampler(config, sampler)
    }

    pub fn with_sampler(config: MonitorConfig, sampler: Sampler) -> Self {
        Self { sampler, notifier: None, config }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Context for a fresh run using the configured interval
    pub fn context(&self) -> MonitorContext {
        MonitorContext::new(self.config.interval)
    }

    /// Run one sampling cycle against the given context
    ///
    /// Updates the context's notification state and previous swap reading.
    /// The returned alert is not delivered here; see [`Monitor::dispatch`].
    #[instrument(level = "debug", skip_all)]
    pub async fn cycle(&self, ctx: &mut MonitorContext) -> Cycle {
        let sample = self.sampler.sample().await;

        let (should_notify, state) = observe(&ctx.previous_swap, &sample.swap.value, ctx.notification);
        ctx.notification = state;
        ctx.previous_swap = sample.swap.value.clone();

        let alert = should_notify.then(|| Notification::swap_started(&sample.swap.value));
        debug!(
            memory_percent = sample.memory.value.used_percent,
            swap_used = sample.swap.value.used_bytes,
            alert = alert.is_some(),
            phase = %ctx.notification.phase(),
            "cycle complete"
        );

        Cycle { sample, alert }
    }

    /// Hand a cycle's alert to the notifier, if enabled
    ///
    /// Delivery failures are logged and otherwise ignored.
    pub async fn dispatch(&self, cycle: &Cycle) {
        let (Some(alert), Some(notifier)) = (&cycle.alert, &self.notifier) else {
            return;
        };
        if !self.config.notifications {
            debug!("notifications disabled, dropping swap alert");
            return;
        }
        if let Err(err) = notifier.deliver(alert).await {
            warn!(error = %err, "failed to deliver swap notification");
        }
    }

    /// Spawn the driver loop on the current tokio runtime
    pub fn start(self) -> MonitorHandle {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (updates_tx, updates_rx) = watch::channel(None);
        let ctx = self.context();

        let task = tokio::spawn(self.run(ctx, commands_rx, updates_tx));

        MonitorHandle { commands: commands_tx, updates: updates_rx, task }
    }

    async fn run(
        self,
        mut ctx: MonitorContext,
        mut commands: mpsc::Receiver<MonitorCommand>,
        updates: watch::Sender<Option<Cycle>>,
    ) -> MonitorContext {
        info!(interval = %ctx.interval, "monitor started");
        let mut ticker = schedule(ctx.interval, Instant::now());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.step(&mut ctx, &updates).await;
                }
                command = commands.recv() => match command {
                    Some(MonitorCommand::SetInterval(interval)) => {
                        info!(%interval, "update interval changed");
                        ctx.interval = interval;
                        ticker = schedule(interval, Instant::now() + interval.as_duration());
                    }
                    Some(MonitorCommand::RefreshNow) => {
                        self.step(&mut ctx, &updates).await;
                    }
                    Some(MonitorCommand::Shutdown) | None => break,
                },
            }
        }

        info!("monitor stopped");
        ctx
    }

    async fn step(&self, ctx: &mut MonitorContext, updates: &watch::Sender<Option<Cycle>>) {
        let cycle = self.cycle(ctx).await;
        self.dispatch(&cycle).await;
        updates.send_replace(Some(cycle));
    }
}

/// Interval timer whose first tick fires at `start`
///
/// Missed ticks are delayed rather than bursted, so a slow cycle never
/// causes back-to-back cycles.
fn schedule(interval: UpdateInterval, start: Instant) -> Interval {
    let mut ticker = time::interval_at(start, interval.as_duration());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Handle to a running monitor loop
#[derive(Debug)]
pub struct MonitorHandle {
    commands: mpsc::Sender<MonitorCommand>,
    updates: watch::Receiver<Option<Cycle>>,
    task: JoinHandle<MonitorContext>,
}

impl MonitorHandle {
    /// Receiver that observes every published cycle
    pub fn subscribe(&self) -> watch::Receiver<Option<Cycle>> {
        self.updates.clone()
    }

    /// Most recent cycle, if one has completed
    pub fn latest(&self) -> Option<Cycle> {
        self.updates.borrow().clone()
    }

    pub async fn set_interval(&self, interval: UpdateInterval) -> Result<()> {
        self.send(MonitorCommand::SetInterval(interval)).await
    }

    pub async fn refresh_now(&self) -> Result<()> {
        self.send(MonitorCommand::RefreshNow).await
    }

    /// Stop the loop and return its final context
    pub async fn shutdown(self) -> Result<MonitorContext> {
        // The loop may already be gone; the join below reports how it ended.
        let _ = self.commands.send(MonitorCommand::Shutdown).await;
        self.task.await.map_err(|err| Error::system(format!("monitor task failed: {}", err)))
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    async fn send(&self, command: MonitorCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| Error::not_available("monitor loop is no longer running"))
    }
}

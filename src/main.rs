//! memwatch: prints memory and swap usage on an interval and alerts when
//! the system starts swapping.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use darwin_memwatch::display::{DetailPanel, Renderer, StatusLine, UsageBar};
use darwin_memwatch::memory::constants::{DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD};
use darwin_memwatch::monitor::{Cycle, Monitor, MonitorConfig, UpdateInterval};
use darwin_memwatch::notification::{AppleScriptNotifier, LogNotifier};
use darwin_memwatch::traits::Notifier;
use darwin_memwatch::{Error, Result};

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output formats for each cycle
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One-line summary, e.g. `RAM: 65% | Swap: 1.0 GB`
    Text,
    /// Per-category breakdown
    Detail,
    /// Usage bar with severity
    Bar,
    /// The full cycle as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "memwatch",
    about = "Memory and swap usage monitor for macOS",
    version,
    propagate_version = true
)]
struct Args {
    /// Refresh interval in seconds (1, 3, 5 or 10)
    #[arg(short = 'i', long, default_value = "5")]
    interval: UpdateInterval,

    /// Take a single sample and exit
    #[arg(long)]
    once: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Do not deliver swap notifications
    #[arg(long)]
    no_notify: bool,

    /// Usage percentage at which the bar turns to warning
    #[arg(long, default_value_t = DEFAULT_WARNING_THRESHOLD)]
    warning: u64,

    /// Usage percentage at which the bar turns to critical
    #[arg(long, default_value_t = DEFAULT_CRITICAL_THRESHOLD)]
    critical: u64,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn setup_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!("Logging initialized with level: {:?}", args.log_level);
}

fn notifier() -> Arc<dyn Notifier> {
    if cfg!(target_os = "macos") {
        Arc::new(AppleScriptNotifier::new())
    } else {
        Arc::new(LogNotifier)
    }
}

fn render(format: OutputFormat, bar: &UsageBar, cycle: &Cycle) -> Result<String> {
    let text = match format {
        OutputFormat::Text => StatusLine.render(&cycle.sample),
        OutputFormat::Detail => DetailPanel.render(&cycle.sample),
        OutputFormat::Bar => bar.render(&cycle.sample),
        OutputFormat::Json => {
            serde_json::to_string(cycle).map_err(|err| Error::InvalidData(err.to_string()))?
        },
    };
    Ok(text)
}

async fn run(args: Args) -> Result<()> {
    let config = MonitorConfig::default()
        .with_interval(args.interval)
        .with_notifications(!args.no_notify)
        .with_thresholds(args.warning, args.critical)?;
    let bar = UsageBar::from_config(&config);
    let monitor = Monitor::new(config).with_notifier(notifier());

    if args.once {
        let mut ctx = monitor.context();
        let cycle = monitor.cycle(&mut ctx).await;
        monitor.dispatch(&cycle).await;
        println!("{}", render(args.format, &bar, &cycle)?);
        return Ok(());
    }

    let handle = monitor.start();
    let mut updates = handle.subscribe();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut interrupt => {
                info!("interrupt received, stopping");
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        let latest = updates.borrow_and_update().clone();
        if let Some(cycle) = latest {
            println!("{}", render(args.format, &bar, &cycle)?);
        }
    }

    handle.shutdown().await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    setup_logging(&args);

    if let Err(err) = run(args).await {
        error!(error = %err, "memwatch failed");
        eprintln!("memwatch: {}", err);
        std::process::exit(1);
    }
}

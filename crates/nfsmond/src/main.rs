//! nfsmond - NFS client metrics collector daemon.
//!
//! Periodically samples `/proc/self/mountstats` and writes the decoded
//! per-mount NFS metrics to stdout as JSON lines.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod output;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::Parser;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use nfsmon_core::collector::{MOUNTSTATS_PATH_ENV, resolve_mountstats_path};
use nfsmon_core::{Collector, FileSystem, ParserConfig, RealFs};

use output::JsonLinesSink;

/// NFS client metrics collector daemon.
#[derive(Parser)]
#[command(name = "nfsmond", about = "NFS client metrics collector daemon", version)]
struct Args {
    /// Collection interval in seconds.
    #[arg(short, long, default_value = "10")]
    interval: u64,

    /// Collect a single sample and exit.
    #[arg(long)]
    once: bool,

    /// Also collect events, bytes, transport and per-operation statistics.
    #[arg(long)]
    fullstat: bool,

    /// Only collect mounts whose mount point matches this regex. Repeatable.
    #[arg(long = "include-mount", value_name = "REGEX")]
    include_mounts: Vec<String>,

    /// Never collect mounts whose mount point matches this regex. Repeatable.
    /// Takes precedence over --include-mount.
    #[arg(long = "exclude-mount", value_name = "REGEX")]
    exclude_mounts: Vec<String>,

    /// Path to the mountstats file.
    /// Defaults to $MOUNT_PROC, then /proc/self/mountstats.
    #[arg(long, value_name = "PATH")]
    mountstats: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig::default()
            .with_fullstat(self.fullstat)
            .with_include_mounts(self.include_mounts.iter().cloned())
            .with_exclude_mounts(self.exclude_mounts.iter().cloned())
    }
}

/// Explicit `--mountstats` wins over the environment override.
fn mountstats_path(explicit: Option<PathBuf>, env_override: Option<&str>) -> PathBuf {
    explicit.unwrap_or_else(|| resolve_mountstats_path(env_override))
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["nfsmond", "nfsmon_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // Logs go to stderr; stdout carries the metrics.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Runs one gather and writes its records to stdout.
fn collect_once<F: FileSystem>(collector: &Collector<F>, sample: u64) {
    let started = Instant::now();
    let stdout = io::stdout();
    let mut sink = JsonLinesSink::new(stdout.lock(), Utc::now().timestamp());

    match collector.gather(&mut sink) {
        Ok(summary) => {
            debug!(
                "Sample #{}: {} lines, {} nfs mounts ({} skipped), {} records in {:?}",
                sample,
                summary.lines,
                summary.mounts,
                summary.skipped_mounts,
                summary.records,
                started.elapsed()
            );
        }
        Err(e) => {
            error!("Failed to collect sample #{}: {}", sample, e);
        }
    }

    if let Err(e) = sink.finish() {
        error!("Failed to write metrics: {}", e);
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let env_override = std::env::var(MOUNTSTATS_PATH_ENV).ok();
    let path = mountstats_path(args.mountstats.clone(), env_override.as_deref());
    let config = args.parser_config();

    info!("nfsmond {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: interval={}s, fullstat={}, mountstats={}",
        args.interval,
        config.fullstat,
        path.display()
    );
    if !config.include_mounts.is_empty() || !config.exclude_mounts.is_empty() {
        info!(
            "Mount filters: include={:?}, exclude={:?}",
            config.include_mounts, config.exclude_mounts
        );
    }

    let collector = Collector::new(RealFs::new(), &config).with_path(&path);
    if !collector.is_available() {
        warn!("{} does not exist (yet); collection will fail until it does", path.display());
    }

    if args.once {
        collect_once(&collector, 1);
        return;
    }

    let interval = Duration::from_secs(args.interval);

    // Setup graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    info!("Starting collection loop");

    let mut sample: u64 = 0;
    while running.load(Ordering::SeqCst) {
        sample += 1;
        collect_once(&collector, sample);

        // Sleep with periodic checks for shutdown signal
        let sleep_interval = Duration::from_millis(100);
        let mut remaining = interval;
        while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
            let sleep_time = remaining.min(sleep_interval);
            std::thread::sleep(sleep_time);
            remaining = remaining.saturating_sub(sleep_time);
        }
    }

    info!("Shutdown complete after {} samples", sample);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mountstats_path_precedence() {
        assert_eq!(
            mountstats_path(Some(PathBuf::from("/tmp/ms")), Some("/env/ms")),
            PathBuf::from("/tmp/ms")
        );
        assert_eq!(
            mountstats_path(None, Some("/env/ms")),
            PathBuf::from("/env/ms")
        );
        assert_eq!(
            mountstats_path(None, None),
            PathBuf::from("/proc/self/mountstats")
        );
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "nfsmond",
            "--fullstat",
            "--include-mount",
            "^/data",
            "--include-mount",
            "^/home",
            "--exclude-mount",
            "tmp$",
        ]);
        let config = args.parser_config();
        assert!(config.fullstat);
        assert_eq!(config.include_mounts, vec!["^/data", "^/home"]);
        assert_eq!(config.exclude_mounts, vec!["tmp$"]);
        assert_eq!(args.interval, 10);
        assert!(!args.once);
    }
}

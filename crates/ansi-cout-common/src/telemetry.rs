//! Tracing setup for processes that write escape sequences to stdout.
//!
//! Log output must never share stdout with the sequences, so logs go to
//! stderr or to a file. File logging is non-blocking; the returned
//! [`TelemetryGuard`] owns the background writer and must be shut down (or
//! dropped) before the process exits, otherwise buffered lines are lost.

use std::io::IsTerminal;
use std::path::Path;
use std::path::PathBuf;

use tracing::Level;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::SharedBuffer;

pub const LOG_FILE_ENV: &str = "ANSI_COUT_LOG";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// `ANSI_COUT_LOG` if set and non-empty, stderr otherwise.
    pub fn from_env() -> Self {
        match std::env::var_os(LOG_FILE_ENV) {
            Some(path) if !path.is_empty() => LogTarget::File(PathBuf::from(path)),
            _ => LogTarget::Stderr,
        }
    }
}

/// Keeps the non-blocking file writer alive.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug)]
pub struct TelemetryGuard {
    target: LogTarget,
    worker: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self {
            target: LogTarget::Stderr,
            worker: None,
        }
    }

    /// The target actually in use. A log file that could not be opened
    /// falls back to stderr.
    pub fn target(&self) -> &LogTarget {
        &self.target
    }

    /// Flushes pending file output and stops the background writer.
    ///
    /// Call this before `std::process::exit`, which skips destructors.
    pub fn shutdown(mut self) {
        // WorkerGuard flushes on drop.
        drop(self.worker.take());
    }
}

/// Installs the global subscriber, logging to [`LogTarget::from_env`].
///
/// `RUST_LOG` overrides `default_level`. If a global subscriber is already
/// set, nothing is installed and the returned guard is inert.
pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    init_tracing_to(default_level, LogTarget::from_env())
}

pub fn init_tracing_to(default_level: &str, target: LogTarget) -> TelemetryGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let (writer, worker, target) = open_writer(target);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(target == LogTarget::Stderr && std::io::stderr().is_terminal())
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard { target, worker }
}

/// A subscriber that records plain-text log lines at `max_level` and above
/// into `buffer`. Meant for `tracing::subscriber::with_default` in tests.
pub fn capture_subscriber(
    buffer: SharedBuffer,
    max_level: Level,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(move || buffer.clone())
        .finish()
}

fn open_writer(target: LogTarget) -> (BoxMakeWriter, Option<WorkerGuard>, LogTarget) {
    match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), None, LogTarget::Stderr),
        LogTarget::File(path) => match open_append(&path) {
            Ok(file) => {
                let (non_blocking, worker) = tracing_appender::non_blocking(file);
                (
                    BoxMakeWriter::new(non_blocking),
                    Some(worker),
                    LogTarget::File(path),
                )
            }
            Err(err) => {
                eprintln!(
                    "Warning: failed to open log file {}: {}",
                    path.display(),
                    err
                );
                (BoxMakeWriter::new(std::io::stderr), None, LogTarget::Stderr)
            }
        },
    }
}

fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

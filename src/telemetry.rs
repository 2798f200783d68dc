//! Logging setup.
//!
//! The terminal is the frame, so logs never go to stdout or stderr. Set
//! `TIE_RUNNER_LOG` to a file path to capture them; `RUST_LOG` picks the
//! filter as usual.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "TIE_RUNNER_LOG";

/// Keeps the background log writer alive; flushes on drop.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    const fn disabled() -> Self {
        Self { _guard: None }
    }
}

/// Install a file-backed subscriber if [`LOG_FILE_ENV`] is set.
pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    match log_file_path(std::env::var_os(LOG_FILE_ENV)) {
        Some(path) => init_file_tracing(&path, default_level),
        None => TelemetryGuard::disabled(),
    }
}

fn init_file_tracing(path: &Path, default_level: &str) -> TelemetryGuard {
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {err}", path.display());
            return TelemetryGuard::disabled();
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let (writer, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(true)
        .with_ansi(false)
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard {
        _guard: Some(guard),
    }
}

/// An unset or empty value means no log file.
fn log_file_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

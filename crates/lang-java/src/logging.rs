use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_DIR_ENV: &str = "SCOPECHAIN_LOG_DIR";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot create log directory {path}: {source}")]
    LogDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot open log file: {0}")]
    Appender(#[from] InitError),

    #[error("A global subscriber is already installed: {0}")]
    Subscriber(#[from] TryInitError),
}

/// `$SCOPECHAIN_LOG_DIR`, or `$HOME/.scopechain/logs`.
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".scopechain/logs")
}

/// Installs the global subscriber. Fails if the log directory is unusable or
/// a subscriber is already set.
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_logging(component: &str, to_stderr: bool) -> Result<WorkerGuard, LoggingError> {
    init_logging_in(&log_dir(), component, to_stderr)
}

pub fn init_logging_in(
    log_dir: &Path,
    component: &str,
    to_stderr: bool,
) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::LogDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    // Roll daily, with the component name as the prefix
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(component)
        .build(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).try_init()?;
    } else {
        registry.try_init()?;
    }

    Ok(guard)
}

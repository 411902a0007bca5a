//! Tracing subscriber installation.
//!
//! Production writes plain-text logs to a daily-rotated `app.log` in the
//! configured directory; every other environment logs to stdout.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::{Environment, LoggingConfig};

/// Name of the rotated application log file.
pub const LOG_FILE_NAME: &str = "app.log";

const FALLBACK_DIRECTIVE: &str = "info";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Builds a filter from `directive`, falling back to `info` when it does not
/// parse.
#[must_use]
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Runs `emit` with a temporary stdout subscriber installed.
///
/// Used for failures raised before [`init`] has a configuration to work from.
#[must_use]
pub fn with_bootstrap_logger<T>(emit: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::registry()
        .with(build_filter(FALLBACK_DIRECTIVE))
        .with(fmt::layer());
    tracing::subscriber::with_default(subscriber, emit)
}

/// Installs the global subscriber for `environment`.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. Non-production environments return `None`.
///
/// # Errors
///
/// Returns [`TelemetryError::CreateDirectory`] when the production log
/// directory cannot be created and [`TelemetryError::Install`] when a
/// subscriber is already installed.
pub fn init(
    environment: &Environment,
    logging: &LoggingConfig,
    directive: &str,
) -> Result<Option<WorkerGuard>, TelemetryError> {
    let filter = build_filter(directive);
    if !environment.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init()?;
        return Ok(None);
    }

    ensure_directory(&logging.directory)?;
    let appender = tracing_appender::rolling::daily(&logging.directory, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;
    Ok(Some(guard))
}

fn ensure_directory(path: &Path) -> Result<(), TelemetryError> {
    std::fs::create_dir_all(path).map_err(|source| TelemetryError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

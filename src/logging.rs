//! Logging setup.
//!
//! The terminal belongs to the UI, so tracing output goes to a log file under
//! the platform data directory instead of stdout.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

pub const LOG_DIR_ENV_VAR: &str = "LABELX_LOG_DIR";
const LOG_FILE_NAME: &str = "labelx.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no suitable data directory available for logs")]
    NoDataDir,
    #[error("failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Directory that holds `labelx.log`, created if missing.
pub fn log_directory() -> Result<PathBuf, LoggingError> {
    let dir = match std::env::var(LOG_DIR_ENV_VAR) {
        Ok(path) => PathBuf::from(path),
        Err(_) => ProjectDirs::from("io", "labelx", "labelx")
            .ok_or(LoggingError::NoDataDir)?
            .data_local_dir()
            .join("logs"),
    };
    fs::create_dir_all(&dir).map_err(|source| LoggingError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// `default_level` is used when `RUST_LOG` is unset or unparsable.
pub fn init(default_level: &str) -> Result<PathBuf, LoggingError> {
    let log_dir = log_directory()?;
    let log_path = log_dir.join(LOG_FILE_NAME);
    if LOG_GUARD.get().is_some() {
        return Ok(log_path);
    }

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = Registry::default().with(env_filter).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        started_at = %chrono::Local::now().to_rfc3339(),
        "logging initialized at {}",
        log_path.display()
    );
    Ok(log_path)
}

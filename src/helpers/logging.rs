//! Logging Setup
//!
//! Installs the global tracing subscriber: stdout always, daily rolling files
//! in the data directory when enabled.

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_FILE_NAME;
use crate::domain::config::LogConfig;
use crate::helpers::get_or_create_data_dir;

/// Filter from `RUST_LOG`, else the configured directive, else `info`
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole process. If the data directory is unavailable, logging continues on
/// stdout only.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let log_dir = config
        .file
        .then(|| get_or_create_data_dir().map(|dir| dir.join("logs")));

    let (file_layer, guard, dir_error) = match log_dir {
        Some(Ok(dir)) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Some(Err(e)) => (None, None, Some(e)),
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_timer(LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    if let Some(e) = dir_error {
        warn!(error = %e, "File logging disabled");
    }

    guard
}

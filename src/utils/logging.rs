//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for domain actions.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::errors::{GamesConnectError, Result};

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "games-connect.log";

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer when dropped, so callers keep
/// it alive for as long as the process runs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| GamesConnectError::Logging(format!("invalid log level {:?}: {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .max_log_files(config.max_files)
                .build(directory)
                .map_err(|e| GamesConnectError::Logging(format!("cannot open log directory {}: {}", directory, e)))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(non_blocking)), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    let initialized = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
    };
    initialized.map_err(|e| GamesConnectError::Logging(e.to_string()))?;

    info!(
        level = %config.level,
        format = ?config.format,
        directory = config.directory.as_deref(),
        "Logging initialized"
    );
    Ok(guard)
}

/// Log a new event registration
pub fn log_registration(event_id: i64, registration_id: i64) {
    info!(event_id = event_id, registration_id = registration_id, "Event registration created");
}

/// Log a rejected registration attempt for a past event
pub fn log_past_event_attempt(event_id: i64) {
    warn!(event_id = event_id, "Registration attempted for past event");
}

/// Log a received contact message
pub fn log_contact_message(message_id: i64) {
    info!(message_id = message_id, "Contact message received");
}

/// Log an event created through the API
pub fn log_event_created(event_id: i64, title: &str) {
    info!(event_id = event_id, title = title, "Event created");
}

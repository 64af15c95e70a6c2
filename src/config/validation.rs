//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! so that a misconfigured server fails at startup instead of at first request.

use super::Settings;
use crate::utils::errors::{GamesConnectError, Result};

/// Log levels accepted by the logging configuration
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(GamesConnectError::Config("Server host is required".to_string()));
    }

    if config.socket_addr().is_none() {
        return Err(GamesConnectError::Config(format!(
            "Server address {}:{} cannot be resolved",
            config.host, config.port
        )));
    }

    if config.max_body_bytes == 0 {
        return Err(GamesConnectError::Config(
            "Max body size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(GamesConnectError::Config("Log level is required".to_string()));
    }

    if !VALID_LOG_LEVELS.contains(&config.level.as_str()) {
        return Err(GamesConnectError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, VALID_LOG_LEVELS
        )));
    }

    if config.directory.is_some() && config.max_files == 0 {
        return Err(GamesConnectError::Config(
            "Max log files must be greater than 0 when file logging is enabled".to_string(),
        ));
    }

    Ok(())
}

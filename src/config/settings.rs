//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from built-in defaults, an optional TOML file and
//! environment variables, in that order of precedence.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Prefix of environment variables that override settings
pub const ENV_PREFIX: &str = "GAMES_CONNECT";

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "GAMES_CONNECT_CONFIG";

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
    pub features: FeaturesConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

/// Output format of the console log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily rolling log files; console only when unset
    pub directory: Option<String>,
    pub max_files: usize,
}

/// Startup data configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeedConfig {
    pub sample_events: bool,
}

/// Feature flags configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Mount `POST /api/events`
    pub event_creation_api: bool,
}

impl ServerConfig {
    /// Resolve the configured host and port into a socket address
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
    }
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.is_empty() => Self::load(Some(Path::new(&path))),
            _ => Self::load(None),
        }
    }

    /// Load settings, reading the given file instead of the default `config.toml`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                max_body_bytes: 64 * 1024,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                directory: None,
                max_files: 7,
            },
            seed: SeedConfig { sample_events: true },
            features: FeaturesConfig {
                event_creation_api: false,
            },
        }
    }
}

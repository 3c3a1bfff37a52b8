//! Configuration management for Cloakbrowse

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Default base URL of the profile service
pub const DEFAULT_BASE_URL: &str = "http://localhost:35000";

/// Default timeout for API requests in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 15000;

/// Default budget for a browser launch in milliseconds
pub const DEFAULT_LAUNCH_TIMEOUT_MS: u64 = 35000;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the profile service
    pub base_url: String,

    /// Port the local profile service listens on
    pub port: u16,

    /// Default timeout for API requests in milliseconds
    pub timeout_ms: u64,

    /// Overall budget for a browser launch in milliseconds
    pub launch_timeout_ms: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: 35000,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            launch_timeout_ms: DEFAULT_LAUNCH_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(base_url) = env::var("CLOAK_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(port) = env::var("CLOAK_PORT") {
            config.port = port
                .parse()
                .map_err(|_| Error::configuration("Invalid CLOAK_PORT"))?;
        }

        if let Ok(timeout) = env::var("CLOAK_TIMEOUT") {
            config.timeout_ms = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid CLOAK_TIMEOUT"))?;
        }

        if let Ok(launch_timeout) = env::var("CLOAK_LAUNCH_TIMEOUT") {
            config.launch_timeout_ms = launch_timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid CLOAK_LAUNCH_TIMEOUT"))?;
        }

        if let Ok(log_level) = env::var("CLOAK_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}

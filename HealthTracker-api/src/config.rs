//! Runtime configuration read from the environment.

use std::net::SocketAddr;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Default location of the data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "health_data.json";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number
    #[error("PORT must be a number between 0 and 65535, got '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file holding the entry collection (`DATA_FILE`)
    pub data_file: PathBuf,
    /// Port to listen on (`PORT`)
    pub port: u16,
    /// Deployment environment name reported by the health check (`APP_ENV`)
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            port: DEFAULT_PORT,
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        Ok(Self {
            data_file: lookup("DATA_FILE").map(PathBuf::from).unwrap_or(defaults.data_file),
            port,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        })
    }

    /// Address the server binds to
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

//! Server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! development defaults.

use std::env;
use std::str::FromStr;

use ventas_core::StoreZone;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// Store timezone for date filtering and display.
    /// `local` (server timezone) or a fixed offset like `-06:00`.
    pub timezone: StoreZone,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let port = env::var("VENTAS_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("VENTAS_PORT".to_string()))?;

        let database_path = env::var("VENTAS_DB_PATH").unwrap_or_else(|_| "./sales.db".to_string());

        let timezone =
            StoreZone::from_str(&env::var("VENTAS_TZ").unwrap_or_else(|_| "local".to_string()))
                .map_err(|_| ConfigError::InvalidValue("VENTAS_TZ".to_string()))?;

        Ok(ServerConfig {
            port,
            database_path,
            timezone,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Path value that selects a private in-memory database instead of a file.
pub const IN_MEMORY_PATH: &str = ":memory:";

/// SQLite configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file (or `:memory:`)
    pub path: String,
    /// Connection pool size
    pub max_connections: u32,
    /// How long a connection waits on a locked database, in seconds
    pub busy_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load SQLite configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DATABASE_PATH: SQLite file path (defaults to myjantes.db)
    /// - DATABASE_MAX_CONNECTIONS: Connection pool size (defaults to 5)
    /// - DATABASE_BUSY_TIMEOUT: Busy timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading database configuration from environment variables");

        let path = env::var("DATABASE_PATH").unwrap_or_else(|_| {
            warn!("DATABASE_PATH not set, using default: myjantes.db");
            "myjantes.db".to_string()
        });
        debug!("Database path: {}", path);

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| {
                warn!("DATABASE_MAX_CONNECTIONS not set, using default: 5");
                "5".to_string()
            })
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid DATABASE_MAX_CONNECTIONS value");
                ConfigError::InvalidValue("Invalid DATABASE_MAX_CONNECTIONS value".to_string())
            })?;
        debug!("Database max connections: {}", max_connections);

        let busy_timeout_secs = env::var("DATABASE_BUSY_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("DATABASE_BUSY_TIMEOUT not set, using default: 5 seconds");
                "5".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid DATABASE_BUSY_TIMEOUT value");
                ConfigError::InvalidValue("Invalid DATABASE_BUSY_TIMEOUT value".to_string())
            })?;
        debug!("Database busy timeout: {} seconds", busy_timeout_secs);

        let config = DatabaseConfig {
            path,
            max_connections,
            busy_timeout_secs,
        };

        config.validate()?;
        info!("Database configuration loaded successfully");
        Ok(config)
    }

    /// Configuration for a throwaway in-memory database.
    pub fn in_memory() -> Self {
        DatabaseConfig {
            path: IN_MEMORY_PATH.to_string(),
            max_connections: 1,
            busy_timeout_secs: 2,
        }
    }

    /// Configuration pointing at a database file with default pool settings.
    pub fn with_path<P: Into<String>>(path: P) -> Self {
        DatabaseConfig {
            path: path.into(),
            ..DatabaseConfig::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        info!("Validating database configuration");

        if self.path.is_empty() {
            error!("Database path is empty");
            return Err(ConfigError::ValidationError("Database path cannot be empty".to_string()));
        }

        if self.max_connections == 0 {
            error!("Database max connections is 0");
            return Err(ConfigError::ValidationError(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.busy_timeout_secs == 0 {
            error!("Database busy timeout is 0");
            return Err(ConfigError::ValidationError(
                "Database busy timeout must be greater than 0".to_string(),
            ));
        }

        info!("Database configuration validation successful");
        Ok(())
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_PATH
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: "myjantes.db".to_string(),
            max_connections: 5,
            busy_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "myjantes.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.busy_timeout_secs, 5);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_in_memory_config() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_path() {
        let config = DatabaseConfig::with_path("/tmp/records.db");
        assert_eq!(config.path, "/tmp/records.db");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_validate_empty_path() {
        let mut config = DatabaseConfig::default();
        config.path = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_max_connections() {
        let mut config = DatabaseConfig::default();
        config.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = DatabaseConfig::default();
        config.busy_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}

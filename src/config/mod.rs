pub mod app_conf;
pub mod database_conf;
pub mod log_conf;

pub use app_conf::AppConfig;
pub use database_conf::DatabaseConfig;
pub use log_conf::LogConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

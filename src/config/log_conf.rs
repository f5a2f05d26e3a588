use std::env;

/// File logging settings. The console filter comes from `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: String,
    pub file_level: String,
    pub error_file_level: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        LogConfig {
            dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            file_level: env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
            error_file_level: env::var("ERROR_FILE_LOG_LEVEL").unwrap_or_else(|_| "error".to_string()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            dir: "logs".to_string(),
            file_level: "debug".to_string(),
            error_file_level: "error".to_string(),
        }
    }
}

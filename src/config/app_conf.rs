use std::env;
use std::net::{IpAddr, SocketAddr};

use tracing::debug;

use crate::config::ConfigError;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// `APP_PORT` wins over `PORT`, which is what hosting platforms usually inject.
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("APP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);
        debug!("Application address: {}:{}", host, port);
        AppConfig { host, port }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("Invalid APP_HOST value: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig { host: "127.0.0.1".to_string(), port: 8080 };
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = AppConfig { host: "not a host".to_string(), port: 8080 };
        assert!(config.socket_addr().is_err());
    }
}

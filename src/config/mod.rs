//! Service configuration.

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::CanopyError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanopyConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    /// Parse the configured bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, CanopyError> {
        self.bind.parse().map_err(|e| {
            CanopyError::Config(format!("Invalid bind address {:?}: {}", self.bind, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_loopback() {
        let config = CanopyConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        let addr = config.server.bind_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn invalid_bind_address_is_a_config_error() {
        let server = ServerConfig {
            bind: "not-an-address".to_string(),
        };
        let err = server.bind_addr().unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}

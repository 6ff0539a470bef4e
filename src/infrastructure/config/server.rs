//! HTTP Server Configuration
//!
//! Listen address and static asset directory.

use std::path::PathBuf;

use serde::Deserialize;

use super::env::EnvOverrides;
use crate::error::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 3000)
    pub port: u16,

    /// Directory served for non-API paths (default: "static")
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn apply_env<F>(&mut self, env: &EnvOverrides<F>) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = env.string("HOST") {
            self.host = host;
        }
        if let Some(port) = env.port("PORT")? {
            self.port = port;
        }
        if let Some(dir) = env.string("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.host",
            });
        }
        Ok(())
    }
}

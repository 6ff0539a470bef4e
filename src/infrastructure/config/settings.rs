//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is read from an optional TOML file, then overridden by
//! environment variables (`DATABASE_URL`, `PG*`, `PORT`, ...). The result is
//! built once at startup and passed down explicitly.
//!
//! # Example
//!
//! ```no_run
//! use stocktake::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::env::EnvOverrides;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOCKTAKE_CONFIG";

/// Config file read from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Every section is optional in the TOML file and falls back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Listen address and static asset directory.
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Build the configuration from the process environment.
    ///
    /// Reads the file named by `STOCKTAKE_CONFIG` (which must exist), or
    /// `config.toml` if present, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or any override is invalid.
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(PathBuf::from(path))?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
            None => Self::default(),
        };
        base.with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` and re-validate.
    ///
    /// # Errors
    ///
    /// Returns an error if an override has an invalid value.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvOverrides::new(lookup);
        self.server.apply_env(&env)?;
        self.database.apply_env(&env)?;
        self.logging.apply_env(&env);
        self.validate()?;
        Ok(self)
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

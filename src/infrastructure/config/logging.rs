//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use super::env::EnvOverrides;

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `stocktake=debug,tower_http=info`.
    pub level: String,
    /// `json` for structured output; anything else is human-readable.
    pub format: String,
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()));

        if self.is_json() {
            fmt().json().with_env_filter(filter).init();
        } else {
            fmt().with_env_filter(filter).init();
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    pub(crate) fn apply_env<F>(&mut self, env: &EnvOverrides<F>)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = env.string("LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = env.string("LOG_FORMAT") {
            self.format = format;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,tower_http=debug".into(),
            format: "pretty".into(),
        }
    }
}

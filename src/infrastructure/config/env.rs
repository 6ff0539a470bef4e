//! Environment variable overrides.
//!
//! Lookups go through a caller-supplied function so tests can supply a map
//! instead of mutating the process environment.

use crate::error::ConfigError;

/// Reads one environment variable. Blank values count as unset.
pub(crate) struct EnvOverrides<F> {
    lookup: F,
}

impl<F> EnvOverrides<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: F) -> Self {
        Self { lookup }
    }

    pub(crate) fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    pub(crate) fn port(&self, key: &'static str) -> Result<Option<u16>, ConfigError> {
        self.string(key)
            .map(|value| {
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: key,
                    reason: format!("'{value}' is not a valid port number"),
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_unset() {
        let env = EnvOverrides::new(|key| match key {
            "EMPTY" => Some("  ".to_string()),
            "SET" => Some("value".to_string()),
            _ => None,
        });

        assert_eq!(env.string("EMPTY"), None);
        assert_eq!(env.string("MISSING"), None);
        assert_eq!(env.string("SET").as_deref(), Some("value"));
    }

    #[test]
    fn port_must_parse() {
        let env = EnvOverrides::new(|key| match key {
            "GOOD" => Some("5433".to_string()),
            "BAD" => Some("fifty".to_string()),
            _ => None,
        });

        assert_eq!(env.port("GOOD").unwrap(), Some(5433));
        assert_eq!(env.port("MISSING").unwrap(), None);
        assert!(matches!(
            env.port("BAD"),
            Err(ConfigError::InvalidValue { field: "BAD", .. })
        ));
    }
}

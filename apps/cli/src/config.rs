//! # CLI Configuration
//!
//! Configuration is loaded once at startup from environment variables with
//! fallback to defaults.
//!
//! | Variable                 | Default | Meaning                                  |
//! |--------------------------|---------|------------------------------------------|
//! | `STOCKROOM_MAX_CAPACITY` | `100`   | Record limit; `unlimited`, `none` or `0` lifts it |
//! | `STOCKROOM_LOG`          | `warn`  | Log filter directive (falls back to `RUST_LOG`) |
//!
//! Logs go to stderr, so the menu on stdout is the same whatever the filter.

use std::env;
use stockroom_core::DEFAULT_MAX_RECORDS;
use tracing_subscriber::EnvFilter;

/// Environment variable for the record limit.
pub const MAX_CAPACITY_VAR: &str = "STOCKROOM_MAX_CAPACITY";

/// Environment variable for the log filter.
pub const LOG_VAR: &str = "STOCKROOM_LOG";

/// Standard `tracing` filter variable, read when `STOCKROOM_LOG` is unset.
pub const RUST_LOG_VAR: &str = "RUST_LOG";

/// Log filter used when neither `STOCKROOM_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Stockroom CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Maximum number of records (`None` = unlimited).
    pub max_records: Option<usize>,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            max_records: Some(DEFAULT_MAX_RECORDS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let max_records = match lookup(MAX_CAPACITY_VAR) {
            Some(raw) => parse_capacity(&raw)?,
            None => defaults.max_records,
        };

        let source = [LOG_VAR, RUST_LOG_VAR]
            .into_iter()
            .find_map(|key| lookup(key).map(|value| (key, value)));

        let log_filter = match source {
            Some((key, value)) => {
                if EnvFilter::try_new(&value).is_err() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        value,
                    });
                }
                value
            }
            None => defaults.log_filter,
        };

        Ok(CliConfig {
            max_records,
            log_filter,
        })
    }
}

/// Parses a record limit. `0` means unlimited, as do `unlimited` and `none`.
fn parse_capacity(raw: &str) -> Result<Option<usize>, ConfigError> {
    let value = raw.trim();

    if value.eq_ignore_ascii_case("unlimited") || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(max) => Ok(Some(max)),
        Err(_) => Err(ConfigError::InvalidValue {
            key: MAX_CAPACITY_VAR.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

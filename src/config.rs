//! Configuration management for the contact assistant.
//!
//! Configuration comes only from environment variables (optionally seeded
//! from a `.env` file). Every setting has a default, so the assistant runs
//! with no configuration at all.

use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted reminder window: one full (leap) year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default window for the `birthdays` command in days (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: reminder window, 1 to 366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32(
            "ASSISTANT_BIRTHDAY_WINDOW_DAYS",
            DEFAULT_BIRTHDAY_WINDOW_DAYS,
        )?;

        if birthday_window_days == 0 || birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Load configuration, falling back to [`Config::default`] when any
    /// variable is invalid.
    ///
    /// The rejected configuration's error is handed back so the caller can
    /// report it once logging is up.
    pub fn from_env_or_default() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}

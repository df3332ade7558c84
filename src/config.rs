//! Configuration management for maptel.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is picked up if present.

use crate::domain::DEFAULT_MAX_LEN;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for a maptel service instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum phone number length in digits (default: 22)
    pub max_number_len: usize,

    /// Emit per-operation trace events (default: true)
    pub trace: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MAPTEL_MAX_NUMBER_LEN`: Phone number length bound (default: 22)
    /// - `MAPTEL_TRACE`: Emit per-operation trace events (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let max_number_len = Self::parse_env_usize("MAPTEL_MAX_NUMBER_LEN", DEFAULT_MAX_LEN)?;
        if max_number_len == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAPTEL_MAX_NUMBER_LEN".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let trace = Self::parse_env_bool("MAPTEL_TRACE", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            max_number_len,
            trace,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_number_len: DEFAULT_MAX_LEN,
            trace: true,
            log_level: "error".to_string(),
        }
    }
}

//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. The interactive menu owns stdout, so logging defaults to stderr
//! and can be redirected to a file instead.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,

    /// Append log output to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level, one of trace/debug/info/warn/error
    ///   (default: "info")
    /// - `CONTACT_BOOK_LOG_FILE`: Path of a file to append log output to;
    ///   unset or empty means stderr
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        // We use dotenvy::dotenv() which doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        if !LOG_LEVELS.contains(&log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of trace/debug/info/warn/error, got: {}", log_level),
            });
        }

        // An empty value counts as unset
        let log_file = env::var("CONTACT_BOOK_LOG_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            log_level,
            log_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

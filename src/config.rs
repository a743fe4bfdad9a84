//! Configuration management for the rolo shell.
//!
//! This module handles loading and validating configuration from environment
//! variables. All settings have defaults; a missing environment is a valid
//! environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for one shell session.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead of today a birthday counts as upcoming (default: 7)
    pub birthday_window_days: u32,

    /// Prompt text printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level fallback when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLO_BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window in days (default: 7)
    /// - `ROLO_PROMPT`: shell prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32("ROLO_BIRTHDAY_WINDOW_DAYS", 7)?;
        let prompt = env::var("ROLO_PROMPT").unwrap_or_else(|_| "Enter a command: ".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: 7,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}

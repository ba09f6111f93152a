//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_PORT, DEFAULT_RESPONSE_DELAY_MS};
use serde::Deserialize;
use std::env;

/// Runtime configuration for Tabdeck.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the cache-demo API binds to.
    pub port: u16,
    /// Artificial processing delay applied before API responses, in milliseconds.
    pub response_delay_ms: u64,
}

/// Interpret a boolean-like environment flag value.
///
/// Truthy: `1`, `true`, `yes`, `on`. Falsy: `0`, `false`, `no`, `off`, and the
/// empty string. Case and surrounding whitespace are ignored.
///
/// # Returns
/// `Some(bool)` for a recognized value, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment, treating anything missing or
/// unrecognized as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from `PORT` and `RESPONSE_DELAY_MS`, applying the
    /// defaults from [`crate::constants`] when a variable is missing or
    /// unparseable.
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("PORT", DEFAULT_PORT),
            response_delay_ms: env_parsed("RESPONSE_DELAY_MS", DEFAULT_RESPONSE_DELAY_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
        }
    }
}

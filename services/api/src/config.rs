//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use tracing::Level;

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Browser origin allowed by CORS. Cross-origin requests are refused when unset.
    pub cors_allow_origin: Option<HeaderValue>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8090)),
            log_level: Level::INFO,
            cors_allow_origin: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
            })?,
            None => defaults.bind_address,
        };

        let log_level = match lookup("RUST_LOG") {
            Some(value) => value.parse::<Level>().map_err(|_| {
                ConfigError::InvalidValue(
                    "RUST_LOG".to_string(),
                    format!("'{}' is not a valid log level", value),
                )
            })?,
            None => defaults.log_level,
        };

        let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN").filter(|o| !o.is_empty()) {
            Some(value) => Some(HeaderValue::from_str(&value).map_err(|e| {
                ConfigError::InvalidValue("CORS_ALLOW_ORIGIN".to_string(), e.to_string())
            })?),
            None => None,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value.parse::<usize>().map_err(|e| {
                ConfigError::InvalidValue("MAX_BODY_BYTES".to_string(), e.to_string())
            })?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            bind_address,
            log_level,
            cors_allow_origin,
            max_body_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8090".parse().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.cors_allow_origin, None);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = load(&[
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("RUST_LOG", "debug"),
            ("CORS_ALLOW_ORIGIN", "http://localhost:3000"),
            ("MAX_BODY_BYTES", "2048"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.cors_allow_origin.unwrap(), "http://localhost:3000");
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = load(&[("BIND_ADDRESS", "not-an-address")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDRESS"));

        let err = load(&[("RUST_LOG", "chatty")]).unwrap_err();
        assert!(err.to_string().contains("'chatty' is not a valid log level"));

        assert!(load(&[("MAX_BODY_BYTES", "-1")]).is_err());
        assert!(load(&[("CORS_ALLOW_ORIGIN", "http://bad\norigin")]).is_err());
    }
}

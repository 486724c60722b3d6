use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HISTORY_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS, DEMO_PASSWORD,
    DEMO_USERNAME, FALLBACK_TOKEN,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Upstream API
    pub api_base_url: String,
    pub request_timeout: Duration,

    // Demo authentication
    pub demo_username: String,
    pub demo_password: String,
    pub fallback_token: String,

    // Search UI
    pub history_limit: usize,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset or empty values fall back to the
    /// public demo defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Upstream API
            api_base_url: normalize_base_url(&env_or_default(
                "API_BASE_URL",
                DEFAULT_API_BASE_URL,
            )),
            request_timeout: Duration::from_secs(parse_env_u64(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),

            // Demo authentication
            demo_username: env_or_default("DEMO_USERNAME", DEMO_USERNAME),
            demo_password: env_or_default("DEMO_PASSWORD", DEMO_PASSWORD),
            fallback_token: env_or_default("FALLBACK_TOKEN", FALLBACK_TOKEN),

            // Search UI
            history_limit: parse_env_usize("SEARCH_HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?,

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Configuration pointing at `api_base_url` with every other value at its
    /// default. Used by tests that stand up a mock upstream.
    #[must_use]
    pub fn for_testing(api_base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            demo_username: DEMO_USERNAME.to_string(),
            demo_password: DEMO_PASSWORD.to_string(),
            fallback_token: FALLBACK_TOKEN.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "API_BASE_URL".to_string(),
                    message: format!("must be an http(s) URL, got scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "API_BASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.fallback_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "FALLBACK_TOKEN".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                name: "SEARCH_HISTORY_LIMIT".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://example.com/"),
            "https://example.com"
        );
        assert_eq!(
            normalize_base_url("  http://localhost:3000//  "),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_env_u64("NONEXISTENT_VAR", 10).unwrap(), 10);
        assert_eq!(parse_env_usize("NONEXISTENT_VAR", 5).unwrap(), 5);
    }

    #[test]
    fn test_for_testing_is_valid() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::for_testing("not a url");
        assert!(config.validate().is_err());

        config = Config::for_testing("ftp://example.com");
        assert!(config.validate().is_err());

        config = Config::for_testing("https://example.com");
        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config = Config::for_testing("https://example.com");
        config.fallback_token = "  ".to_string();
        assert!(config.validate().is_err());

        config = Config::for_testing("https://example.com");
        config.history_limit = 0;
        assert!(config.validate().is_err());
    }
}

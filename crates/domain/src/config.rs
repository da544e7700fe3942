//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RETRY_BACKOFF_MS, LOGIN_PATH,
};

/// Top-level client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to (no trailing slash)
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts per request (initial try + retries)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Where the navigator is sent after a 401
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
            login_path: LOGIN_PATH.to_string(),
            user_agent: None,
        }
    }
}

/// Tracing output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_retry_backoff_ms() -> u64 {
    DEFAULT_RETRY_BACKOFF_MS
}

fn default_login_path() -> String {
    LOGIN_PATH.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_fills_missing_fields_with_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{ "base_url": "https://ops.example.com/api" }"#).unwrap();

        assert_eq!(config.base_url, "https://ops.example.com/api");
        assert_eq!(config.timeout_secs, 100);
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.login_path, "/login");
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn client_config_logging_section_is_optional() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "api": { "base_url": "http://localhost" } }"#).unwrap();
        assert_eq!(config.logging, LoggingConfig::default());
    }
}

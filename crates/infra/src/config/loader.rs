//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads `.env` from the working directory if present
//! 2. Attempts to load from environment variables
//! 3. If `OPSDESK_API_BASE_URL` is missing, falls back to a config file
//! 4. Probes multiple paths for config files (JSON or TOML)
//! 5. With no file either, uses built-in defaults
//!
//! ## Environment Variables
//! - `OPSDESK_API_BASE_URL`: REST API base URL (required for env loading)
//! - `OPSDESK_API_TIMEOUT`: Request timeout in seconds
//! - `OPSDESK_API_MAX_ATTEMPTS`: Attempts per request, retries included
//! - `OPSDESK_LOGIN_PATH`: Redirect target after a 401
//! - `OPSDESK_LOG_LEVEL`: Default tracing filter
//! - `OPSDESK_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./opsdesk.json` or `./opsdesk.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use opsdesk_domain::{ApiConfig, ClientConfig, LoggingConfig, OpsDeskError, Result};

use crate::errors::InfraError;

const BASE_URL_VAR: &str = "OPSDESK_API_BASE_URL";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `OpsDeskError::Config` if an environment variable or config file
/// is present but invalid.
pub fn load() -> Result<ClientConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) if std::env::var_os(BASE_URL_VAR).is_some() => Err(e),
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration found; using defaults");
                    Ok(ClientConfig::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `OPSDESK_API_BASE_URL` is required; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `OpsDeskError::Config` if the base URL is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<ClientConfig> {
    let defaults = ApiConfig::default();

    let base_url = env_var(BASE_URL_VAR)?;
    let timeout_secs = env_parse("OPSDESK_API_TIMEOUT", defaults.timeout_secs)?;
    let max_attempts = env_parse("OPSDESK_API_MAX_ATTEMPTS", defaults.max_attempts)?;
    if max_attempts == 0 {
        return Err(OpsDeskError::Config("OPSDESK_API_MAX_ATTEMPTS must be at least 1".into()));
    }
    let login_path = std::env::var("OPSDESK_LOGIN_PATH").unwrap_or(defaults.login_path);

    let logging_defaults = LoggingConfig::default();
    let level = std::env::var("OPSDESK_LOG_LEVEL").unwrap_or(logging_defaults.level);
    let json = env_bool("OPSDESK_LOG_JSON", logging_defaults.json);

    Ok(ClientConfig {
        api: ApiConfig {
            base_url,
            timeout_secs,
            max_attempts,
            retry_backoff_ms: defaults.retry_backoff_ms,
            login_path,
            user_agent: None,
        },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `OpsDeskError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(OpsDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            OpsDeskError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| OpsDeskError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| OpsDeskError::from(InfraError::from(e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| OpsDeskError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(OpsDeskError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("opsdesk.json"),
        dir.join("opsdesk.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| OpsDeskError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional numeric environment variable
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| OpsDeskError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

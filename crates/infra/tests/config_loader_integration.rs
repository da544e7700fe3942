//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::fs;
use std::path::PathBuf;

use opsdesk_domain::OpsDeskError;
use opsdesk_infra::config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "opsdesk.json",
        r#"{
            "api": {
                "base_url": "https://ops.example.com/api",
                "timeout_secs": 30,
                "max_attempts": 3,
                "login_path": "/signin"
            },
            "logging": { "level": "debug", "json": true }
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.api.base_url, "https://ops.example.com/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.api.max_attempts, 3);
    assert_eq!(config.api.login_path, "/signin");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "config.toml",
        r#"
[api]
base_url = "https://ops.example.com/api"
user_agent = "ops-cli/2.0"

[logging]
level = "warn"
"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.api.base_url, "https://ops.example.com/api");
    assert_eq!(config.api.user_agent.as_deref(), Some("ops-cli/2.0"));
    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.json);
}

#[test]
fn test_load_config_with_minimal_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "config.json", r#"{ "api": { "base_url": "http://127.0.0.1:9000" } }"#);

    let config = config::load_from_file(Some(path)).expect("Failed to load minimal config");

    assert_eq!(config.api.timeout_secs, 100);
    assert_eq!(config.api.max_attempts, 1);
    assert_eq!(config.api.login_path, "/login");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/config.json".into()));

    match result {
        Err(OpsDeskError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "config.json", r#"{ "api": "not valid" "#);

    match config::load_from_file(Some(path)) {
        Err(OpsDeskError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "config.toml", "[api\nbase_url = 1");

    match config::load_from_file(Some(path)) {
        Err(OpsDeskError::Config(msg)) => assert!(msg.contains("Invalid TOML")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "config.yaml", "api: {}");

    match config::load_from_file(Some(path)) {
        Err(OpsDeskError::Config(msg)) => assert!(msg.contains("Unsupported")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

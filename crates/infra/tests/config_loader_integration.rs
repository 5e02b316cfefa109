//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! wiring a client context from it.

use std::io::Write;

use labelprint_domain::Locale;
use labelprint_infra::{config, ClientContext};
use tempfile::NamedTempFile;

fn write_with_extension(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "api": {
            "base_url": "/gateway",
            "origin": "http://printserver:9000",
            "timeout_ms": 15000,
            "locale": "zh-CN"
        },
        "storage": { "path": "/var/lib/labelprint/state.json" },
        "logging": { "level": "labelprint_infra=debug", "json": true },
        "app": { "title": "Warehouse Labels", "version": "2.1.0" }
    }"#;
    let path = write_with_extension(json_content, "json");

    let config = config::load_from_file(Some(path.clone())).expect("JSON config should load");

    assert_eq!(config.api.base_url, "/gateway");
    assert_eq!(config.api.origin, "http://printserver:9000");
    assert_eq!(config.api.timeout_ms, 15_000);
    assert_eq!(config.api.locale, Locale::SimplifiedChinese);
    assert_eq!(config.storage.path.as_deref(), Some("/var/lib/labelprint/state.json"));
    assert_eq!(config.logging.level, "labelprint_infra=debug");
    assert!(config.logging.json);
    assert_eq!(config.app.title, "Warehouse Labels");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[api]
base_url = "https://labels.example.com/api"

[logging]
level = "warn"
"#;
    let path = write_with_extension(toml_content, "toml");

    let config = config::load_from_file(Some(path.clone())).expect("TOML config should load");

    assert_eq!(config.api.base_url, "https://labels.example.com/api");
    assert_eq!(config.api.timeout_ms, 30_000);
    assert_eq!(config.api.locale, Locale::English);
    assert_eq!(config.logging.level, "warn");
    assert!(config.storage.path.is_none());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_toml_is_rejected() {
    let path = write_with_extension("[api\nbase_url = ", "toml");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_err(), "Should fail with invalid TOML");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_context_from_loaded_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = dir.path().join("state.json");
    let json_content = format!(
        r#"{{ "api": {{ "base_url": "http://127.0.0.1:9/api" }}, "storage": {{ "path": {:?} }} }}"#,
        state.to_string_lossy()
    );
    let path = write_with_extension(&json_content, "json");

    let config = config::load_from_file(Some(path.clone())).expect("config should load");
    let (context, _events) = ClientContext::new(config).expect("context should build");

    assert_eq!(context.api.endpoint(), "http://127.0.0.1:9/api");
    context.session.set_token("persisted").expect("token should be stored");
    assert!(state.exists());

    std::fs::remove_file(path).ok();
}

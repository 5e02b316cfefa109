//! Integration tests for durable key-value storage

use std::sync::Arc;

use labelprint_core::{AppSettingsService, KeyValueStore, SessionContext};
use labelprint_domain::{AppInfo, StorageConfig, Theme};
use labelprint_infra::{open_store, FileStore};

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.json");

    let store = FileStore::open(&path).expect("store should open");
    store.set("token", "abc123").expect("write should succeed");
    store.set("theme", "dark").expect("write should succeed");
    store.remove("theme").expect("remove should succeed");
    drop(store);

    let reopened = FileStore::open(&path).expect("store should reopen");
    assert_eq!(reopened.get("token").as_deref(), Some("abc123"));
    assert!(reopened.get("theme").is_none());

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("file should exist"))
            .expect("file should hold JSON");
    assert_eq!(raw, serde_json::json!({ "token": "abc123" }));
}

#[test]
fn credential_and_theme_persist_across_sessions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = StorageConfig { path: Some(dir.path().join("state.json").display().to_string()) };

    {
        let store = open_store(&config).expect("store should open");
        SessionContext::new(store.clone()).set_token("persisted").expect("token stored");
        let settings = AppSettingsService::new(store, AppInfo::default(), "/api");
        assert_eq!(settings.toggle_theme().expect("theme stored"), Theme::Dark);
    }

    let store: Arc<dyn KeyValueStore> = open_store(&config).expect("store should reopen");
    assert_eq!(SessionContext::new(store.clone()).token().as_deref(), Some("persisted"));
    let settings = AppSettingsService::new(store, AppInfo::default(), "/api");
    assert_eq!(settings.initialize(), Theme::Dark);
}

#[test]
fn memory_store_is_used_without_path() {
    let store = open_store(&StorageConfig::default()).expect("memory store");
    store.set("token", "ephemeral").expect("write should succeed");
    assert_eq!(store.get("token").as_deref(), Some("ephemeral"));
}

//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_TITLE, APP_VERSION, DEFAULT_API_BASE_URL, DEFAULT_API_ORIGIN, REQUEST_TIMEOUT_MS,
};
use crate::impl_domain_status_conversions;

/// Client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub app: AppInfo,
}

/// API gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base endpoint. A relative path (e.g. `/api`) is resolved against
    /// `origin`; an absolute URL is used as-is.
    pub base_url: String,
    /// Scheme and authority used to resolve a relative `base_url`.
    pub origin: String,
    pub timeout_ms: u64,
    pub locale: Locale,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            origin: DEFAULT_API_ORIGIN.to_string(),
            timeout_ms: REQUEST_TIMEOUT_MS,
            locale: Locale::default(),
        }
    }
}

/// Durable client-side storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the key-value store. `None` keeps values in memory.
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

/// Static application information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub title: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self { title: APP_TITLE.to_string(), version: APP_VERSION.to_string() }
    }
}

/// Language used for user-facing notification texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-cn", alias = "zh-CN")]
    SimplifiedChinese,
}

impl_domain_status_conversions!(Locale {
    English => "en",
    SimplifiedChinese => "zh-cn",
});

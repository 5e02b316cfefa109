//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! client.

// Gateway configuration
pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const HEALTH_CHECK_TIMEOUT_MS: u64 = 5_000;
pub const HEALTH_PATH: &str = "/health";

// Envelope success codes (RPC-style and HTTP-style are both accepted)
pub const SUCCESS_CODE_RPC: i64 = 0;
pub const SUCCESS_CODE_HTTP: i64 = 200;

// Durable storage keys
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const THEME_STORAGE_KEY: &str = "theme";

// Navigation
pub const LOGIN_PATH: &str = "/login";

// Upload
pub const UPLOAD_FIELD_NAME: &str = "file";
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

// Application info
pub const APP_TITLE: &str = "Label Printing System";
pub const APP_VERSION: &str = "1.0.0";

// Environment variable prefix
pub const ENV_PREFIX: &str = "LABELPRINT_";

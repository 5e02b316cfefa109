//! Configuration loader
//!
//! Loads client configuration from an optional file plus environment
//! overrides.
//!
//! ## Loading Strategy
//! 1. Read `.env` from the working directory, if present
//! 2. Probe for a config file (JSON or TOML); use defaults when none exists
//! 3. Apply `LABELPRINT_*` environment variables on top
//!
//! ## Environment Variables
//! - `LABELPRINT_API_BASE_URL`: Base endpoint, absolute or relative to origin
//! - `LABELPRINT_API_ORIGIN`: Backend origin used for relative endpoints
//! - `LABELPRINT_API_TIMEOUT_MS`: Request timeout in milliseconds
//! - `LABELPRINT_LOCALE`: Notification language (`en` or `zh-CN`)
//! - `LABELPRINT_STORAGE_PATH`: JSON file backing the credential store
//! - `LABELPRINT_LOG_LEVEL`: Log filter directive
//! - `LABELPRINT_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./labelprint.json` or `./labelprint.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use labelprint_domain::constants::ENV_PREFIX;
use labelprint_domain::{Config, LabelPrintError, Locale, Result};

/// Load configuration: `.env`, then file or defaults, then environment.
///
/// # Errors
/// Returns `LabelPrintError::Config` if a discovered file is invalid or an
/// environment variable has an invalid value.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    tracing::info!(
        base_url = %config.api.base_url,
        locale = %config.api.locale,
        "Configuration loaded"
    );
    Ok(config)
}

/// Defaults plus environment overrides, ignoring any config file
///
/// # Errors
/// Returns `LabelPrintError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Apply `LABELPRINT_*` variables to `config`. Unset or empty variables leave
/// the current value in place.
///
/// # Errors
/// Returns `LabelPrintError::Config` for an unparsable timeout or locale.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(base_url) = env_var("API_BASE_URL") {
        config.api.base_url = base_url;
    }
    if let Some(origin) = env_var("API_ORIGIN") {
        config.api.origin = origin;
    }
    if let Some(timeout) = env_var("API_TIMEOUT_MS") {
        config.api.timeout_ms = timeout
            .parse::<u64>()
            .map_err(|e| LabelPrintError::Config(format!("Invalid request timeout: {}", e)))?;
    }
    if let Some(locale) = env_var("LOCALE") {
        config.api.locale = locale.parse::<Locale>().map_err(|e| {
            LabelPrintError::Config(format!("Invalid locale {:?}: {}", locale, e))
        })?;
    }
    if let Some(path) = env_var("STORAGE_PATH") {
        config.storage.path = Some(path);
    }
    if let Some(level) = env_var("LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("LOG_JSON", config.logging.json);
    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields take their default values.
///
/// # Errors
/// Returns `LabelPrintError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LabelPrintError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LabelPrintError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LabelPrintError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LabelPrintError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LabelPrintError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LabelPrintError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("labelprint.json"),
        dir.join("labelprint.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Non-empty value of `LABELPRINT_<suffix>`
fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{suffix}")).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from `LABELPRINT_<suffix>`
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(suffix: &str, default: bool) -> bool {
    env_var(suffix)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

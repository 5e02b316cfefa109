use labelprint_domain::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

const FALLBACK_DIRECTIVE: &str = "info";

/// Filter from `RUST_LOG` when set, else from the configured level.
///
/// An unparsable directive falls back to `info`.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = build_filter(config);
    let installed = if config.json {
        fmt().with_env_filter(filter).json().with_current_span(true).try_init().is_ok()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "tracing initialized");
    }
    installed
}

//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::ConfigService;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the log filter from `RUST_LOG` as seen by `config`, which already
/// includes values loaded from `.env`.
pub fn filter(config: &ConfigService) -> EnvFilter {
    config
        .get("RUST_LOG")
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ConfigService) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(false)
        .try_init();
}

//! Tracing Setup
//!
//! Installs a `tracing-subscriber` formatter driven by the logging config.
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides the filter entirely when set
//! - `observability.logging.level`: level for this crate otherwise
//! - `observability.logging.format`: `pretty` or `json`
//!
//! # Usage
//!
//! ```rust,ignore
//! use orderbook_client::telemetry::init_tracing;
//!
//! let config = load_config(None)?;
//! init_tracing(&config.observability.logging);
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("orderbook_client={}", config.level.to_lowercase())
}

/// Build the environment filter, preferring `RUST_LOG`.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(config)))
        .unwrap_or_else(|_| EnvFilter::new("orderbook_client=info"))
}

/// Initialize the global subscriber.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = env_filter(config);

    let installed = if config.is_json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!(format = %config.format, level = %config.level, "Tracing initialized");
    }
}

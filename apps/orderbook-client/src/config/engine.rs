//! Matching engine connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::infrastructure::engine::{DEFAULT_ENGINE_URL, HttpEngineConfig};

/// Environment variable overriding `engine.base_url`.
pub const ENGINE_URL_ENV: &str = "ORDERBOOK_API_URL";

/// Matching engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds. Absent means no timeout.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

impl EngineConfig {
    /// Build the HTTP adapter configuration.
    #[must_use]
    pub fn to_http_config(&self) -> HttpEngineConfig {
        let config = HttpEngineConfig::new(self.base_url.as_str());
        match self.timeout_ms {
            Some(ms) => config.with_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_ENGINE_URL.to_string()
}

//! Engine adapter configuration.

use std::time::Duration;

/// Engine base URL used when nothing else is configured.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:3001";

/// Configuration for the HTTP matching engine adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEngineConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpEngineConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Join a path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpEngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_URL)
    }
}

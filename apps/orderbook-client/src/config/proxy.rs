//! Ask proxy server configuration.

use serde::{Deserialize, Serialize};

/// Ask proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Listening port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upstream `/ask` endpoint.
    #[serde(default = "default_ask_upstream")]
    pub ask_upstream: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            ask_upstream: default_ask_upstream(),
        }
    }
}

impl ProxyConfig {
    /// `bind_address:port`
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_ask_upstream() -> String {
    "https://clownfish-app-sawhl.ondigitalocean.app/ask".to_string()
}

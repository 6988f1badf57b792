//! Configuration module for the order book client.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use orderbook_client::config::load_config;
//!
//! // Load from default path (config.yaml), falling back to defaults
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("engine: {}", config.engine.base_url);
//! ```

mod engine;
mod observability;
mod proxy;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use engine::{ENGINE_URL_ENV, EngineConfig};
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use proxy::ProxyConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Matching engine connection.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Ask proxy server.
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// Without an explicit path, `config.yaml` is used if present and defaults
/// otherwise. An explicit path must exist.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let contents = match path {
        Some(path) => read_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => read_file(DEFAULT_CONFIG_PATH)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            String::new()
        }
    };

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let mut config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    normalize_config(&mut config);
    validate_config(&config)?;

    Ok(config)
}

fn read_file(path: &str) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;
    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Apply variables that take precedence over the file.
fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENGINE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.engine.base_url = url;
    }
}

fn normalize_config(config: &mut Config) {
    config.engine.base_url = trim_url(&config.engine.base_url);
    config.proxy.ask_upstream = trim_url(&config.proxy.ask_upstream);
    config.observability.logging.format = config.observability.logging.format.to_lowercase();
}

fn trim_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !is_http_url(&config.engine.base_url) {
        return Err(ConfigError::ValidationError(format!(
            "engine.base_url must start with http:// or https://, got '{}'",
            config.engine.base_url
        )));
    }

    if !is_http_url(&config.proxy.ask_upstream) {
        return Err(ConfigError::ValidationError(format!(
            "proxy.ask_upstream must start with http:// or https://, got '{}'",
            config.proxy.ask_upstream
        )));
    }

    if config.proxy.port == 0 {
        return Err(ConfigError::ValidationError(
            "proxy.port must be non-zero".to_string(),
        ));
    }

    if config.engine.timeout_ms == Some(0) {
        return Err(ConfigError::ValidationError(
            "engine.timeout_ms must be positive when set".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.engine.base_url, "http://localhost:3001");
        assert!(config.engine.timeout_ms.is_none());
        assert_eq!(config.proxy.port, 3000);
        assert_eq!(config.proxy.bind_address, "127.0.0.1");
        assert_eq!(
            config.proxy.ask_upstream,
            "https://clownfish-app-sawhl.ondigitalocean.app/ask"
        );
        assert_eq!(config.observability.logging.format, "pretty");
    }

    #[test]
    fn test_empty_string_yields_defaults() {
        let mut expected = Config::default();
        apply_env_overrides(&mut expected, |name| std::env::var(name).ok());
        normalize_config(&mut expected);

        let config = match load_config_from_string("") {
            Ok(c) => c,
            Err(e) => panic!("empty config should load: {e}"),
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "base_url: ${ORDERBOOK_CONFIG_TEST_NONEXISTENT_VAR:-http://engine:3001}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "base_url: http://engine:3001");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "upstream: ${ORDERBOOK_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "upstream: ");
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, |name| {
            (name == ENGINE_URL_ENV).then(|| "https://engine.example".to_string())
        });

        assert_eq!(config.engine.base_url, "https://engine.example");
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, |_| Some("  ".to_string()));

        assert_eq!(config.engine.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let mut config = Config::default();
        config.engine.base_url = "http://engine:3001/".to_string();
        normalize_config(&mut config);

        assert_eq!(config.engine.base_url, "http://engine:3001");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_upstream() {
        let yaml = r"
proxy:
  ask_upstream: ftp://upstream/ask
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for non-http upstream");
        };
        assert!(err.to_string().contains("ask_upstream"));
    }

    #[test]
    fn test_validation_zero_port() {
        let yaml = r"
proxy:
  port: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero port");
        };
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
engine:
  timeout_ms: 2500

proxy:
  bind_address: "0.0.0.0"
  port: 8080
  ask_upstream: "https://ask.example/ask/"

observability:
  logging:
    level: "debug"
    format: "JSON"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.proxy.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.proxy.ask_upstream, "https://ask.example/ask");
        assert_eq!(config.observability.logging.level, "debug");
        assert!(config.observability.logging.is_json());
        assert_eq!(
            config.engine.to_http_config().timeout,
            Some(Duration::from_millis(2500))
        );
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "proxy:\n  port: 4010").unwrap();

        let config = load_config(file.path().to_str()).unwrap();

        assert_eq!(config.proxy.port, 4010);
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let Err(err) = load_config(path.to_str()) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}

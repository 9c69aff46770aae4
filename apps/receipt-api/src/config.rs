//! # API Configuration
//!
//! Configuration management for the receipt API server.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RECEIPT_API_HOST=0.0.0.0                                           │
//! │     RECEIPT_API_PORT=9000                                              │
//! │     RECEIPT_API_LOG=debug                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $RECEIPT_API_CONFIG, or                                            │
//! │     ~/.config/receipt-api/receipt-api.toml (Linux)                     │
//! │     ~/Library/Application Support/com.receipts.receipt-api/... (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     127.0.0.1:8080                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RUST_LOG`, when set, still wins over the configured log filter.
//!
//! ## Configuration File Format
//! ```toml
//! # receipt-api.toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [logging]
//! filter = "info,receipt=debug,tower_http=info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Environment Variables
// =============================================================================

/// Path of the TOML config file.
pub const CONFIG_PATH_ENV: &str = "RECEIPT_API_CONFIG";

const HOST_ENV: &str = "RECEIPT_API_HOST";
const PORT_ENV: &str = "RECEIPT_API_PORT";
const LOG_ENV: &str = "RECEIPT_API_LOG";

// =============================================================================
// Server Settings
// =============================================================================

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host name or IP address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info,receipt=debug,tower_http=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// Main API Configuration
// =============================================================================

/// Complete API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ApiConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform default), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with environment lookups going through `lookup`.
    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading API config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let host = &self.server.host;
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "server.host must be a host name or IP address, got: '{}'",
                host
            )));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid(
                "server.port must be greater than 0".into(),
            ));
        }

        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            ConfigError::Invalid(format!(
                "logging.filter '{}' is not a valid filter: {}",
                self.logging.filter, e
            ))
        })?;

        Ok(())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            debug!(host = %host, "Overriding host from environment");
            self.server.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            let parsed = port.parse::<u16>().map_err(|_| ConfigError::InvalidEnv {
                var: PORT_ENV,
                value: port.clone(),
            })?;
            debug!(port = parsed, "Overriding port from environment");
            self.server.port = parsed;
        }

        if let Some(filter) = lookup(LOG_ENV) {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "receipts", "receipt-api")
            .map(|dirs| dirs.config_dir().join("receipt-api.toml"))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.logging.filter, "info,receipt=debug,tower_http=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ApiConfig::from_toml("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging, LoggingSettings::default());

        let config = ApiConfig::from_toml("").unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = ApiConfig::from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8081

            [logging]
            filter = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8081");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = ApiConfig::from_toml("[server]\nport = \"eighty\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = ApiConfig::from_toml("[server]\nport = 9000\n").unwrap();
        config
            .apply_overrides(env(&[
                ("RECEIPT_API_HOST", "0.0.0.0"),
                ("RECEIPT_API_PORT", "7000"),
                ("RECEIPT_API_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:7000");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_bad_port_override_is_an_error() {
        let mut config = ApiConfig::default();
        let err = config
            .apply_overrides(env(&[("RECEIPT_API_PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "RECEIPT_API_PORT", .. }));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ApiConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = ApiConfig::default();
        config.server.host = String::new();
        assert!(config.validate().is_err());

        let mut config = ApiConfig::default();
        config.server.host = "local host".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("receipt-api-no-such-config.toml");
        let config = ApiConfig::load_with(Some(path), env(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_load_applies_overrides_over_file() {
        let path = std::env::temp_dir().join(format!(
            "receipt-api-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let config = ApiConfig::load_with(Some(path.clone()), env(&[("RECEIPT_API_PORT", "7000")]));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:7000");
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let path = std::env::temp_dir().join("receipt-api-no-such-config.toml");
        let err = ApiConfig::load_with(Some(path), env(&[("RECEIPT_API_LOG", "receipt=loudest")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}

//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::timeline::DEFAULT_ICON_BASE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Location of the stats profile document (URL or local path)
    #[serde(default = "default_profile_source")]
    pub profile: String,

    /// Location of the pull-history sheet (URL or local path)
    #[serde(default = "default_sheet_source")]
    pub sheet: String,

    /// Base URL for item icon assets
    #[serde(default = "default_icon_base")]
    pub icon_base: String,

    /// Per-request timeout for remote sources (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_profile_source() -> String {
    "data/stats.json".to_string()
}

fn default_sheet_source() -> String {
    "data/sheet.csv".to_string()
}

fn default_icon_base() -> String {
    DEFAULT_ICON_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            profile: default_profile_source(),
            sheet: default_sheet_source(),
            icon_base: default_icon_base(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pullboard").join("config.toml")),
            Some(PathBuf::from("/etc/pullboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(profile) = std::env::var("PULLBOARD_PROFILE_SOURCE") {
            self.sources.profile = profile;
        }
        if let Ok(sheet) = std::env::var("PULLBOARD_SHEET_SOURCE") {
            self.sources.sheet = sheet;
        }
        if let Ok(icon_base) = std::env::var("PULLBOARD_ICON_BASE") {
            self.sources.icon_base = icon_base;
        }

        if let Ok(host) = std::env::var("PULLBOARD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PULLBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(level) = std::env::var("PULLBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PULLBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pullboard Configuration
#
# Environment variables override these settings:
# - PULLBOARD_PROFILE_SOURCE
# - PULLBOARD_SHEET_SOURCE
# - PULLBOARD_ICON_BASE
# - PULLBOARD_HOST
# - PULLBOARD_PORT
# - PULLBOARD_LOG_LEVEL
# - PULLBOARD_LOG_FORMAT

[sources]
# Stats profile document: URL or local path
profile = "data/stats.json"

# Pull-history sheet: URL or local path
sheet = "data/sheet.csv"

# Base URL for item icon assets
icon_base = "https://stardb.gg/api/static/StarRailResWebp/icon"

# Per-request timeout for remote sources (seconds)
request_timeout_secs = 10

[server]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8083

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sources.profile, "data/stats.json");
        assert_eq!(config.sources.sheet, "data/sheet.csv");
        assert_eq!(config.server.port, 8083);
        assert_eq!(config.server.addr(), "0.0.0.0:8083");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [sources]
            sheet = "https://example.com/sheet.csv"

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.sources.sheet, "https://example.com/sheet.csv");
        assert_eq!(config.sources.profile, "data/stats.json");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.sources.icon_base, DEFAULT_ICON_BASE);
    }
}

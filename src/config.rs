//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::source::{SourceConfig as ClientSourceConfig, DEFAULT_USERS_URL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Users endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,

    /// No timeout unless set
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_source_url() -> String {
    DEFAULT_USERS_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            request_timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientSourceConfig {
        ClientSourceConfig {
            url: self.url.clone(),
            request_timeout_ms: self.request_timeout_secs.map(|s| s.saturating_mul(1000)),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8087".to_string(),
        "http://127.0.0.1:8087".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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
            dirs::config_dir().map(|p| p.join("userboard").join("config.toml")),
            Some(PathBuf::from("/etc/userboard/config.toml")),
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
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("USERBOARD_SOURCE_URL") {
            self.source.url = url;
        }

        if let Some(host) = lookup("USERBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("USERBOARD_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid USERBOARD_API_PORT {:?}", port),
            }
        }

        if let Some(level) = lookup("USERBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("USERBOARD_LOG_FORMAT") {
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
    r#"# Userboard Configuration
#
# Environment variables override these settings:
# - USERBOARD_SOURCE_URL
# - USERBOARD_API_HOST
# - USERBOARD_API_PORT
# - USERBOARD_LOG_LEVEL
# - USERBOARD_LOG_FORMAT

[source]
# Endpoint returning { "users": [...] }, fetched once at startup
url = "https://dummyjson.com/users"

# Optional request timeout in seconds (no timeout when unset)
# request_timeout_secs = 10

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8086

# Allowed CORS origins
cors_origins = ["http://localhost:8087", "http://127.0.0.1:8087"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

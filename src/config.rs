//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
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

/// Ledger workbook locations
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    #[serde(default = "default_staff_file")]
    pub staff_file: String,

    #[serde(default = "default_orders_file")]
    pub orders_file: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("opsdesk"))
        .unwrap_or_else(|| PathBuf::from("./opsdesk_data"))
}

fn default_inventory_file() -> String {
    "inventory.csv".to_string()
}

fn default_staff_file() -> String {
    "staff.csv".to_string()
}

fn default_orders_file() -> String {
    "orders.csv".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            inventory_file: default_inventory_file(),
            staff_file: default_staff_file(),
            orders_file: default_orders_file(),
        }
    }
}

impl LedgerConfig {
    /// Ledger rooted at `data_dir` with the default file names
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn staff_path(&self) -> PathBuf {
        self.data_dir.join(&self.staff_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }
}

/// LLM provider configuration (OpenAI-compatible chat completions)
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_enabled")]
    pub enabled: bool,

    #[serde(default = "default_llm_url")]
    pub base_url: String,

    #[serde(default = "default_llm_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_llm_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_llm_retries")]
    pub max_retries: u32,

    /// Bearer token; usually supplied through the environment
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_llm_enabled() -> bool {
    true
}

fn default_llm_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_llm_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_llm_timeout() -> u64 {
    10_000
}

fn default_llm_retries() -> u32 {
    2
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: default_llm_enabled(),
            base_url: default_llm_url(),
            model: default_llm_model(),
            temperature: default_temperature(),
            request_timeout_ms: default_llm_timeout(),
            max_retries: default_llm_retries(),
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// The LLM is only used when enabled and a key is present
    pub fn is_usable(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
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

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
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
            dirs::config_dir().map(|p| p.join("opsdesk").join("config.toml")),
            Some(PathBuf::from("/etc/opsdesk/config.toml")),
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
        if let Some(host) = lookup("OPSDESK_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("OPSDESK_API_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        if let Some(data_dir) = lookup("OPSDESK_DATA_DIR") {
            self.ledger.data_dir = PathBuf::from(data_dir);
        }

        if let Some(url) = lookup("OPSDESK_LLM_URL") {
            self.llm.base_url = url;
        }
        if let Some(model) = lookup("OPSDESK_LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(key) = lookup("OPSDESK_LLM_API_KEY").or_else(|| lookup("GROQ_API_KEY")) {
            self.llm.api_key = Some(key);
        }
        if let Some(enabled) = lookup("OPSDESK_LLM_ENABLED") {
            self.llm.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        if let Some(level) = lookup("OPSDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OPSDESK_LOG_FORMAT") {
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
    r#"# OpsDesk Configuration
#
# Environment variables override these settings:
# - OPSDESK_API_HOST / OPSDESK_API_PORT
# - OPSDESK_DATA_DIR
# - OPSDESK_LLM_URL / OPSDESK_LLM_MODEL / OPSDESK_LLM_ENABLED
# - OPSDESK_LLM_API_KEY (or GROQ_API_KEY)
# - OPSDESK_LOG_LEVEL / OPSDESK_LOG_FORMAT

[api]
# API server host
host = "127.0.0.1"

# API server port
port = 8000

# Allowed CORS origins (empty = any origin)
cors_origins = []

[ledger]
# Directory holding the CSV workbooks
data_dir = "./opsdesk_data"

inventory_file = "inventory.csv"
staff_file = "staff.csv"
orders_file = "orders.csv"

[llm]
# Use the LLM for explanations and the daily insight.
# Template text is used when disabled or when no API key is set.
enabled = true

# OpenAI-compatible endpoint
base_url = "https://api.groq.com/openai/v1"
model = "llama-3.1-8b-instant"
temperature = 0.2

# Request timeout in milliseconds
request_timeout_ms = 10000

# Retries on connection errors and rate limiting
max_retries = 2

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
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.addr(), "127.0.0.1:8000");
        assert_eq!(config.ledger.inventory_file, "inventory.csv");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert!(!config.llm.is_usable());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.ledger.data_dir, PathBuf::from("./opsdesk_data"));
        assert_eq!(config.logging.format, "pretty");
        assert!(config.llm.enabled);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[api]\nport = 9001\n").unwrap();
        assert_eq!(config.api.port, 9001);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.ledger.staff_file, "staff.csv");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("OPSDESK_API_PORT", "9100"),
            ("OPSDESK_DATA_DIR", "/tmp/ops"),
            ("GROQ_API_KEY", "secret"),
            ("OPSDESK_LOG_FORMAT", "json"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 9100);
        assert_eq!(config.ledger.orders_path(), PathBuf::from("/tmp/ops/orders.csv"));
        assert_eq!(config.llm.api_key.as_deref(), Some("secret"));
        assert!(config.llm.is_usable());
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "OPSDESK_API_PORT").then(|| "nope".to_string()));
        assert_eq!(config.api.port, 8000);
    }
}

//! Startup configuration.
//!
//! FreshScanner reads `freshscanner.toml` (path overridable via the
//! `FRESHSCANNER_CONFIG` environment variable). Every field has a default so
//! a missing file is a valid zero-config start; an unreadable or invalid file
//! is a startup error, never a runtime surprise.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "FreshScanner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    "freshscanner=info,tower_http=warn".to_string()
}

/// Get the default config file path: ~/.freshscanner/freshscanner.toml,
/// falling back to the working directory when no home exists (containers).
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".freshscanner").join("freshscanner.toml"))
        .unwrap_or_else(|| PathBuf::from("freshscanner.toml"))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration. Serializes back to TOML for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ollama: OllamaConfig,
    pub assistant: AssistantConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for the hub API.
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Base URL of the local Ollama instance.
    pub base_url: String,
    /// Model identifier sent with every generate request.
    pub model: String,
    /// Per-request timeout. CPU-only inference is slow; default generously.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Override for the built-in advisor system prompt. `None` keeps the
    /// food-safety framing shipped with the binary.
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Transcript cap per session: oldest turns are dropped past this.
    pub max_turns: usize,
    /// Sessions idle longer than this are evicted.
    pub ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ollama: OllamaConfig::default(),
            assistant: AssistantConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8750".to_string(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama2".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            ttl_secs: 1800,
        }
    }
}

impl ServerConfig {
    /// Parse the configured bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("bad bind_addr '{}'", self.bind_addr)))
    }
}

impl AppConfig {
    /// Load from `FRESHSCANNER_CONFIG` or the default path. A missing file
    /// yields the defaults; a present file must parse and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("FRESHSCANNER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path);
        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Reject configurations that cannot work before any request is served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        if !self.ollama.base_url.starts_with("http://") && !self.ollama.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "ollama.base_url '{}' is not an http(s) URL",
                self.ollama.base_url
            )));
        }
        if self.ollama.model.trim().is_empty() {
            return Err(ConfigError::Invalid("ollama.model must not be empty".into()));
        }
        if self.ollama.timeout_secs == 0 {
            return Err(ConfigError::Invalid("ollama.timeout_secs must be positive".into()));
        }
        if self.session.max_turns < 2 {
            return Err(ConfigError::Invalid(
                "session.max_turns must hold at least one exchange".into(),
            ));
        }
        if self.session.ttl_secs == 0 {
            return Err(ConfigError::Invalid("session.ttl_secs must be positive".into()));
        }
        if let Some(prompt) = &self.assistant.system_prompt {
            if prompt.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "assistant.system_prompt override must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

//! Process configuration.
//!
//! Built once at startup from an optional TOML file plus environment overrides, validated, and
//! handed read-only to each adapter at construction.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const DEFAULT_REDDIT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Environment variable naming the optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "PULSE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub reddit: RedditConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Posts requested per analysis.
    pub post_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upper bound on classification requests in flight for one analysis.
    pub max_concurrency: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_INFERENCE_URL.to_string(),
            api_key: None,
            timeout_secs: 15,
        }
    }
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REDDIT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 15,
            post_limit: 20,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { max_concurrency: 8 }
    }
}

impl InferenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Model identifier taken from the endpoint path, e.g.
    /// `cardiffnlp/twitter-roberta-base-sentiment-latest`.
    pub fn model_name(&self) -> String {
        match self.api_url.split_once("/models/") {
            Some((_, model)) => model.trim_end_matches('/').to_string(),
            None => self.api_url.clone(),
        }
    }
}

impl RedditConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Load the process configuration: the file named by `PULSE_CONFIG` if set, then
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        if config.inference.api_key.is_none() {
            warn!("HUGGING_FACE_API_KEY or HUGGINGFACE_TOKEN not found in environment variables");
        }
        info!(
            "Configuration loaded: port {}, model {}",
            config.server.port,
            config.inference.model_name()
        );
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: shown });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        debug!("Read configuration from {}", shown);
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment overrides through `lookup` so callers and tests control the source.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let api_key = non_empty("HUGGING_FACE_API_KEY").or_else(|| non_empty("HUGGINGFACE_TOKEN"));
        if let Some(key) = api_key {
            self.inference.api_key = Some(key);
        }
        if let Some(url) = lookup("INFERENCE_API_URL") {
            self.inference.api_url = url;
        }
        if let Some(url) = lookup("REDDIT_BASE_URL") {
            self.reddit.base_url = url;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(limit) = lookup("PULSE_MAX_CONCURRENCY").and_then(|c| c.parse().ok()) {
            self.analysis.max_concurrency = limit;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("inference.api_url", &self.inference.api_url),
            ("reddit.base_url", &self.reddit.base_url),
        ] {
            Url::parse(value).map_err(|_| ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.clone(),
            })?;
        }

        if self.analysis.max_concurrency == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "analysis.max_concurrency must be at least 1".to_string(),
            });
        }
        if self.inference.timeout_secs == 0 || self.reddit.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "timeouts must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}

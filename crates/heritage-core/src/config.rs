use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{BACKEND_URL_ENV, DEFAULT_CHAT_ENDPOINT, DEFAULT_CHAT_TIMEOUT_SECS};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// TOML catalog of heritage sites.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            chat: ChatConfig::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

fn default_catalog() -> PathBuf {
    PathBuf::from("catalog.toml")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the backend API; requests go to `{endpoint}/chat`.
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
        }
    }
}

impl ChatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub show_hotspots: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_hotspots: true,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read `path`; a relative catalog path resolves against the config's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if config.catalog.is_relative() {
            if let Some(base) = path.parent() {
                config.catalog = base.join(&config.catalog);
            }
        }
        Ok(config)
    }

    /// Load `path` if given, else defaults; then apply environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Ok(endpoint) = std::env::var(BACKEND_URL_ENV) {
            if !endpoint.trim().is_empty() {
                config.chat.endpoint = endpoint;
            }
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// src/infrastructure/config.rs
use crate::constants::{NOTES_PER_PAGE, REQUEST_TIMEOUT_SECS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for the notehub client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request. Optional; the public service
    /// rejects unauthenticated writes.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BrowseConfig {
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

// Default value functions
fn default_base_url() -> String {
    "https://notehub-public.goit.study/api".to_string()
}
fn default_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}
fn default_per_page() -> u32 {
    NOTES_PER_PAGE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Load from an explicit path, from the default location if a file
    /// exists there, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!(?path, "Loading config from provided path");
            return Self::load(path);
        }

        let default_path = default_config_path()?;
        if default_path.exists() {
            debug!(?default_path, "Loading config from default path");
            Self::load(default_path)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment overrides: `NOTEHUB_API_URL` and `NOTEHUB_TOKEN`.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("NOTEHUB_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(token) = std::env::var("NOTEHUB_TOKEN") {
            self.api.token = Some(token);
        }
    }
}

/// Default config file location, e.g. `~/.config/notehub/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("notehub").join("config.toml"))
}

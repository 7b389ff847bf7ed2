//! Configuration management

use crate::error::{MomoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Caption service defaults, matching the remote collaborator's public API
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub created: DateTime<Utc>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            model: default_model(),
            endpoint: default_endpoint(),
            created: Utc::now(),
        }
    }

    /// Load config from .momo/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".momo").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MomoError::NotInitialized(path.to_path_buf())
            } else {
                MomoError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MomoError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .momo/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let momo_dir = path.join(".momo");
        let config_path = momo_dir.join("config.toml");

        if !momo_dir.exists() {
            fs::create_dir(&momo_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MomoError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// API key for the caption service, from the environment only; never
    /// written to disk
    pub fn api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

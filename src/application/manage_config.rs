//! Config management use case

use crate::error::{MomoError, Result};
use crate::infrastructure::{Config, FileStore};

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "model" => Ok(config.model.clone()),
            "endpoint" => Ok(config.endpoint.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MomoError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: model, endpoint, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "model" => {
                config.model = value.to_string();
            }
            "endpoint" => {
                config.endpoint = value.trim_end_matches('/').to_string();
            }
            "created" => {
                return Err(MomoError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MomoError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: model, endpoint",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}

//! Config management use case

use crate::domain::WeekStart;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{validate_key, Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key.clone()),
            "week_start" => Ok(config.week_start.to_string()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, week_start",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "week_start" => {
                config.week_start = WeekStart::from_str(value).map_err(MoodlogError::Config)?;
            }
            "storage_key" => {
                // Existing entries stay under the old key; switching starts a fresh journal view
                validate_key(value).map_err(|_| {
                    MoodlogError::Config(format!(
                        "Invalid storage_key: '{}'. Use letters, digits, '-', '_' or '.', \
                         not starting with '.'",
                        value
                    ))
                })?;
                config.storage_key = value.to_string();
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, week_start",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

//! Config management use case

use crate::error::{MoodstarError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const VALID_KEYS: &str = "log_level, popular_tags_limit, created";

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
            "log_level" => Ok(config.log_level.clone()),
            "popular_tags_limit" => Ok(config.popular_tags_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodstarError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "log_level" => {
                config.log_level = Config::parse_log_level(value)?;
            }
            "popular_tags_limit" => {
                config.popular_tags_limit = value.trim().parse().map_err(|_| {
                    MoodstarError::Config(format!(
                        "popular_tags_limit must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(MoodstarError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodstarError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: log_level, popular_tags_limit",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(init(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("log_level").unwrap(), "warn");
        assert_eq!(service.get("popular_tags_limit").unwrap(), "10");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("log_level", "DEBUG").unwrap();
        service.set("popular_tags_limit", "5").unwrap();

        assert_eq!(service.get("log_level").unwrap(), "debug");
        assert_eq!(service.list().unwrap().popular_tags_limit, 5);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("log_level", "loud").is_err());
        assert!(service.set("popular_tags_limit", "many").is_err());
        assert!(service.set("created", "2025-01-01").is_err());
        assert!(service.set("colour", "blue").is_err());
    }

    #[test]
    fn test_get_unknown_key() {
        let temp = TempDir::new().unwrap();
        let err = service(&temp).get("colour").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }
}

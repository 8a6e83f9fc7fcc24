//! Configuration management

use crate::error::{MoodstarError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding journal metadata and data
pub const JOURNAL_DIR: &str = ".moodstar";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_POPULAR_TAGS_LIMIT: usize = 10;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_popular_tags_limit() -> usize {
    DEFAULT_POPULAR_TAGS_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_popular_tags_limit")]
    pub popular_tags_limit: usize,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            log_level: default_log_level(),
            popular_tags_limit: DEFAULT_POPULAR_TAGS_LIMIT,
        }
    }

    /// Load config from .moodstar/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodstarError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodstarError::Io(e)
            }
        })?;

        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to .moodstar/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join(CONFIG_FILE);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Log level, with MOODSTAR_LOG taking precedence over the stored value
    pub fn get_log_level(&self) -> String {
        std::env::var("MOODSTAR_LOG").unwrap_or_else(|_| self.log_level.clone())
    }

    /// Validate and normalize a log level name
    pub fn parse_log_level(value: &str) -> Result<String> {
        let normalized = value.trim().to_lowercase();
        let normalized = if normalized == "warning" {
            "warn".to_string()
        } else {
            normalized
        };

        if LOG_LEVELS.contains(&normalized.as_str()) {
            Ok(normalized)
        } else {
            Err(MoodstarError::Config(format!(
                "Invalid log level: '{}'",
                value
            )))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

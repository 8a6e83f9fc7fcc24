//! Error types for moodstar

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodstar application
#[derive(Debug, Error)]
pub enum MoodstarError {
    #[error("Not a moodstar directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid emotion: {0}")]
    InvalidEmotion(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry content is empty")]
    EmptyContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Journal data error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodstarError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodstarError::NotJournalDirectory(_) => 2,
            MoodstarError::InvalidEmotion(_) => 3,
            MoodstarError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodstarError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodstar directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodstar init' in this directory to create a new journal\n\
                    • Navigate to an existing moodstar directory\n\
                    • Set MOODSTAR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodstarError::InvalidEmotion(value) => {
                format!(
                    "Invalid emotion: '{}'\n\n\
                    Valid emotions:\n\
                    • 기쁨 (joy), 슬픔 (sadness), 화남 (anger)\n\
                    • 불안 (anxiety), 평온 (calm), 흥분 (excitement)\n\n\
                    Examples:\n\
                    moodstar write -e 기쁨 \"오늘은 정말 좋은 날\"\n\
                    moodstar write -e calm \"a quiet walk\"",
                    value
                )
            }
            MoodstarError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodstar list' to see entry ids\n\
                    • Ids are matched exactly",
                    id
                )
            }
            MoodstarError::EmptyContent => "Entry content is empty\n\n\
                Write something after the emotion, e.g.:\n\
                moodstar write -e 평온 \"산책을 했다\""
                .to_string(),
            MoodstarError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: trace, debug, info, warn, error\n\
                        Example: moodstar config log_level info",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodstarError
pub type Result<T> = std::result::Result<T, MoodstarError>;

//! File system repository
//!
//! The whole journal lives in one JSON document, `.moodstar/journal.json`,
//! which is read and written in full.

use crate::domain::JournalEntry;
use crate::error::{MoodstarError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const ENTRIES_FILE: &str = "journal.json";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Load configuration from .moodstar/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodstar/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodstar directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodstar directory structure
    fn initialize(&self) -> Result<()>;

    /// Load all entries, newest first. A missing document is an empty journal.
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Replace the stored entries
    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODSTAR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODSTAR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodstarError::Config(format!(
                    "MOODSTAR_ROOT is set to '{}' but no .moodstar directory found. \
                    Run 'moodstar init' in that directory or unset MOODSTAR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodstarError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodstar directory
    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    fn entries_path(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(ENTRIES_FILE)
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(MoodstarError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        if !self.is_initialized() {
            return Err(MoodstarError::NotJournalDirectory(self.root.clone()));
        }

        let path = self.entries_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<JournalEntry> = serde_json::from_str(&contents)?;
        debug!("loaded {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }

    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        if !self.is_initialized() {
            return Err(MoodstarError::NotJournalDirectory(self.root.clone()));
        }

        let path = self.entries_path();
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&path, contents)?;
        debug!("saved {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Emotion;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_entry(id: &str) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            emotion: Emotion::Joy,
            content: "좋은 하루 #감사".to_string(),
            hashtags: vec!["감사".to_string()],
            auto_tags: Vec::new(),
            star: None,
        }
    }

    #[test]
    fn test_initialize_creates_directory() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".moodstar").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_without_journal_fails() {
        let temp = TempDir::new().unwrap();
        match FileSystemRepository::discover_from(temp.path()) {
            Err(MoodstarError::NotJournalDirectory(_)) => {}
            other => panic!("Expected NotJournalDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_document_is_empty_journal() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        assert!(repo.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_entries() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let entries = vec![sample_entry("2"), sample_entry("1")];
        repo.save_entries(&entries).unwrap();

        let loaded = repo.load_entries().unwrap();
        assert_eq!(loaded, entries);
        assert!(temp.path().join(".moodstar/journal.json").exists());
    }

    #[test]
    fn test_corrupt_document_is_error() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        fs::write(temp.path().join(".moodstar/journal.json"), "{not json").unwrap();

        assert!(matches!(repo.load_entries(), Err(MoodstarError::Json(_))));
    }

    #[test]
    fn test_uninitialized_load_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(matches!(
            repo.load_entries(),
            Err(MoodstarError::NotJournalDirectory(_))
        ));
    }
}

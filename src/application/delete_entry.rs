//! Delete entry use case

use crate::domain::JournalEntry;
use crate::error::{MoodstarError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use log::info;

/// Service for removing entries (and their badges) from the journal
pub struct DeleteEntryService {
    repository: FileSystemRepository,
}

impl DeleteEntryService {
    /// Create a new delete entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        DeleteEntryService { repository }
    }

    /// Remove the entry with `id`, returning it
    pub fn execute(&self, id: &str) -> Result<JournalEntry> {
        let mut entries = self.repository.load_entries()?;

        let position = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| MoodstarError::EntryNotFound(id.to_string()))?;

        let removed = entries.remove(position);
        self.repository.save_entries(&entries)?;

        info!("deleted entry {}", removed.id);
        Ok(removed)
    }
}

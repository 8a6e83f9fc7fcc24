//! Tag search and popular tag use cases

use crate::domain::tags::{popular_tags, search_by_tags, TagCount};
use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Service for querying entries by tag
pub struct TagSearchService {
    repository: FileSystemRepository,
}

impl TagSearchService {
    /// Create a new tag search service
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Entries matching any of `tags`; every entry when `tags` is empty
    pub fn search(&self, tags: &[String]) -> Result<Vec<JournalEntry>> {
        let entries = self.repository.load_entries()?;
        Ok(search_by_tags(&entries, tags).into_iter().cloned().collect())
    }

    /// Most used tags. `limit` falls back to the configured default.
    pub fn popular(&self, limit: Option<usize>) -> Result<Vec<TagCount>> {
        let limit = match limit {
            Some(limit) => limit,
            None => self.repository.load_config()?.popular_tags_limit,
        };
        let entries = self.repository.load_entries()?;
        Ok(popular_tags(&entries, limit))
    }
}

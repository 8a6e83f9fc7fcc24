//! List entries use case

use crate::domain::{Emotion, JournalEntry};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// List entries newest first, optionally filtered by emotion and limited.
pub fn list_entries(
    repository: &FileSystemRepository,
    emotion: Option<Emotion>,
    limit: Option<usize>,
) -> Result<Vec<JournalEntry>> {
    let entries = repository.load_entries()?;

    let filtered = entries
        .into_iter()
        .filter(|entry| emotion.map_or(true, |wanted| entry.emotion == wanted));

    Ok(match limit {
        Some(limit) => filtered.take(limit).collect(),
        None => filtered.collect(),
    })
}

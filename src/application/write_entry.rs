//! Write entry use case
//!
//! Creating an entry extracts its tags and generates its star badge, then
//! stores it at the front of the journal.

use crate::domain::star::{generate_emotion_star_with, RandomSource};
use crate::domain::tags::TagExtractor;
use crate::domain::{Emotion, JournalEntry};
use crate::error::{MoodstarError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{Local, NaiveDate};
use log::info;
use std::str::FromStr;
use uuid::Uuid;

/// Service for adding entries to the journal
pub struct WriteEntryService {
    repository: FileSystemRepository,
}

impl WriteEntryService {
    /// Create a new write entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        WriteEntryService { repository }
    }

    /// Write an entry dated today
    pub fn execute(&self, emotion: &str, content: &str) -> Result<JournalEntry> {
        self.execute_with(
            &mut rand::thread_rng(),
            emotion,
            content,
            Local::now().date_naive(),
        )
    }

    /// Write an entry for `date`, drawing badge attributes from `rng`
    pub fn execute_with<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        emotion: &str,
        content: &str,
        date: NaiveDate,
    ) -> Result<JournalEntry> {
        let emotion = Emotion::from_str(emotion)
            .map_err(|_| MoodstarError::InvalidEmotion(emotion.to_string()))?;

        let content = content.trim();
        if content.is_empty() {
            return Err(MoodstarError::EmptyContent);
        }

        let mut entries = self.repository.load_entries()?;

        let id = Uuid::new_v4().simple().to_string();
        let tags = TagExtractor::extract_all(content);
        let star = generate_emotion_star_with(rng, emotion.label(), content, &id);

        let entry = JournalEntry {
            id,
            date,
            emotion,
            content: content.to_string(),
            hashtags: tags.hashtags,
            auto_tags: tags.auto_tags,
            star: Some(star),
        };

        entries.insert(0, entry.clone());
        self.repository.save_entries(&entries)?;

        info!(
            "wrote entry {} ({}) with {} hashtags and {} auto-tags",
            entry.id,
            entry.emotion,
            entry.hashtags.len(),
            entry.auto_tags.len()
        );
        Ok(entry)
    }
}

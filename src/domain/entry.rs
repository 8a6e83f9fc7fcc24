//! Journal entry record

use crate::domain::star::EmotionBadge;
use crate::domain::Emotion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One diary entry as persisted in the journal document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,

    /// Local calendar day the entry was written
    pub date: NaiveDate,

    pub emotion: Emotion,

    pub content: String,

    #[serde(default)]
    pub hashtags: Vec<String>,

    #[serde(default)]
    pub auto_tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star: Option<EmotionBadge>,
}

impl JournalEntry {
    /// Hashtags followed by auto-tags
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.hashtags
            .iter()
            .chain(self.auto_tags.iter())
            .map(String::as_str)
    }
}

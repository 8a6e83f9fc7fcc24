//! Star collection use case

use crate::domain::star::{
    star_collection, star_stats_by_emotion, EmotionBadge, EmotionStarStats,
};
use crate::domain::Emotion;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use std::collections::BTreeMap;

/// Badges plus their per-emotion statistics
#[derive(Debug, Clone)]
pub struct StarReport {
    /// Newest first
    pub badges: Vec<EmotionBadge>,
    pub stats: BTreeMap<String, EmotionStarStats>,
}

/// Collect the journal's badges, optionally for a single emotion.
pub fn star_report(
    repository: &FileSystemRepository,
    emotion: Option<Emotion>,
) -> Result<StarReport> {
    let entries = repository.load_entries()?;

    let mut badges = star_collection(&entries);
    if let Some(emotion) = emotion {
        badges.retain(|badge| badge.emotion == emotion.label());
    }
    let stats = star_stats_by_emotion(&badges);

    Ok(StarReport { badges, stats })
}

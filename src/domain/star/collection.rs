//! Star collection and per-emotion badge statistics

use super::badge::{EmotionBadge, Shape};
use crate::domain::JournalEntry;
use std::collections::BTreeMap;

/// Aggregate figures for the badges of one emotion
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionStarStats {
    pub count: usize,
    pub avg_intensity: f64,
    pub shape_counts: BTreeMap<Shape, usize>,
    /// Keyed by the exact color string
    pub color_counts: BTreeMap<String, usize>,
}

/// All badges carried by the entries, newest first.
///
/// Entries without a badge are skipped.
pub fn star_collection(entries: &[JournalEntry]) -> Vec<EmotionBadge> {
    let mut badges: Vec<EmotionBadge> = entries
        .iter()
        .filter_map(|entry| entry.star.clone())
        .collect();
    badges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    badges
}

/// Group badges by emotion label
pub fn star_stats_by_emotion(badges: &[EmotionBadge]) -> BTreeMap<String, EmotionStarStats> {
    let mut intensity_sums: BTreeMap<&str, u32> = BTreeMap::new();
    let mut stats: BTreeMap<String, EmotionStarStats> = BTreeMap::new();

    for badge in badges {
        let entry = stats
            .entry(badge.emotion.clone())
            .or_insert_with(|| EmotionStarStats {
                count: 0,
                avg_intensity: 0.0,
                shape_counts: BTreeMap::new(),
                color_counts: BTreeMap::new(),
            });
        entry.count += 1;
        *entry.shape_counts.entry(badge.shape).or_insert(0) += 1;
        *entry.color_counts.entry(badge.color.clone()).or_insert(0) += 1;
        *intensity_sums.entry(badge.emotion.as_str()).or_insert(0) += u32::from(badge.intensity);
    }

    for (emotion, entry) in stats.iter_mut() {
        let sum = intensity_sums.get(emotion.as_str()).copied().unwrap_or(0);
        entry.avg_intensity = f64::from(sum) / entry.count as f64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::star::{Pattern, Size};
    use crate::domain::Emotion;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn badge(
        id: &str,
        emotion: &str,
        intensity: u8,
        shape: Shape,
        color: &str,
        minute: u32,
    ) -> EmotionBadge {
        EmotionBadge {
            id: id.to_string(),
            emotion: emotion.to_string(),
            intensity,
            shape,
            size: Size::Medium,
            color: color.to_string(),
            glow: false,
            pattern: Pattern::Solid,
            created_at: Utc.with_ymd_and_hms(2025, 1, 17, 9, minute, 0).unwrap(),
            entry_id: format!("entry-{}", id),
        }
    }

    fn entry(id: &str, star: Option<EmotionBadge>) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            emotion: Emotion::Joy,
            content: "내용".to_string(),
            hashtags: Vec::new(),
            auto_tags: Vec::new(),
            star,
        }
    }

    #[test]
    fn test_collection_newest_first_and_skips_missing() {
        let a = badge("a", "기쁨", 3, Shape::Star, "#FFD700", 1);
        let b = badge("b", "기쁨", 3, Shape::Heart, "#FFA500", 2);
        let entries = vec![
            entry("1", Some(a.clone())),
            entry("2", None),
            entry("3", Some(b.clone())),
        ];

        let collection = star_collection(&entries);
        assert_eq!(collection, vec![b, a]);
    }

    #[test]
    fn test_collection_empty() {
        assert!(star_collection(&[entry("1", None)]).is_empty());
    }

    #[test]
    fn test_stats_by_emotion() {
        let badges = vec![
            badge("a", "기쁨", 5, Shape::Star, "#FFD700", 1),
            badge("b", "기쁨", 2, Shape::Star, "#FFA500", 2),
            badge("c", "기쁨", 2, Shape::Heart, "#FFD700", 3),
            badge("d", "슬픔", 4, Shape::Circle, "#4169E1", 4),
        ];

        let stats = star_stats_by_emotion(&badges);
        assert_eq!(stats.len(), 2);

        let joy = &stats["기쁨"];
        assert_eq!(joy.count, 3);
        assert!((joy.avg_intensity - 3.0).abs() < f64::EPSILON);
        assert_eq!(joy.shape_counts[&Shape::Star], 2);
        assert_eq!(joy.shape_counts[&Shape::Heart], 1);
        assert_eq!(joy.color_counts["#FFD700"], 2);
        assert_eq!(joy.color_counts["#FFA500"], 1);

        let sadness = &stats["슬픔"];
        assert_eq!(sadness.count, 1);
        assert!((sadness.avg_intensity - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_keep_unknown_labels() {
        let badges = vec![badge("a", "불명", 3, Shape::Star, "#FFD700", 1)];
        let stats = star_stats_by_emotion(&badges);
        assert_eq!(stats["불명"].count, 1);
    }

    #[test]
    fn test_stats_empty() {
        assert!(star_stats_by_emotion(&[]).is_empty());
    }
}

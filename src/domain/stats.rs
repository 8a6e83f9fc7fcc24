//! Emotion frequency statistics over journal entries

use crate::domain::{Emotion, JournalEntry};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Number of days covered by [`weekly_trend`]
pub const TREND_DAYS: i64 = 7;

/// How often one emotion was recorded
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionCount {
    pub emotion: Emotion,
    pub count: usize,
    /// Fraction of all entries, 0.0 to 1.0
    pub share: f64,
}

/// Emotions recorded on one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTrend {
    pub date: NaiveDate,
    pub counts: BTreeMap<Emotion, usize>,
    pub total: usize,
}

/// Per-emotion counts, most frequent first. Emotions never recorded are
/// left out.
pub fn emotion_counts(entries: &[JournalEntry]) -> Vec<EmotionCount> {
    let mut counts: BTreeMap<Emotion, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.emotion).or_insert(0) += 1;
    }

    let total = entries.len();
    let mut result: Vec<EmotionCount> = counts
        .into_iter()
        .map(|(emotion, count)| EmotionCount {
            emotion,
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    // Stable sort keeps display order for ties
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Daily emotion counts for the week ending at `today`, oldest day first
pub fn weekly_trend(entries: &[JournalEntry], today: NaiveDate) -> Vec<DayTrend> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let mut counts: BTreeMap<Emotion, usize> = BTreeMap::new();
            let mut total = 0;
            for entry in entries.iter().filter(|entry| entry.date == date) {
                *counts.entry(entry.emotion).or_insert(0) += 1;
                total += 1;
            }
            DayTrend {
                date,
                counts,
                total,
            }
        })
        .collect()
}

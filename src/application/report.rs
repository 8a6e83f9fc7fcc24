//! Emotion statistics and daily feedback use cases

use crate::domain::feedback::{daily_feedback, DailyFeedback};
use crate::domain::stats::{emotion_counts, weekly_trend, DayTrend, EmotionCount};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{Local, NaiveDate};

/// Overall emotion counts and the trend of the last week
#[derive(Debug, Clone)]
pub struct EmotionReport {
    pub total_entries: usize,
    pub counts: Vec<EmotionCount>,
    pub trend: Vec<DayTrend>,
}

/// Build the statistics report as of `today`
pub fn emotion_report(
    repository: &FileSystemRepository,
    today: NaiveDate,
) -> Result<EmotionReport> {
    let entries = repository.load_entries()?;
    Ok(EmotionReport {
        total_entries: entries.len(),
        counts: emotion_counts(&entries),
        trend: weekly_trend(&entries, today),
    })
}

/// Feedback for today's entries, if any were written
pub fn todays_feedback(repository: &FileSystemRepository) -> Result<Option<DailyFeedback>> {
    let entries = repository.load_entries()?;
    Ok(daily_feedback(
        &mut rand::thread_rng(),
        &entries,
        Local::now().date_naive(),
    ))
}

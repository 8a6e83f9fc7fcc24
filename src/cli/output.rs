//! Output formatting utilities

use crate::application::{EmotionReport, StarReport};
use crate::domain::feedback::DailyFeedback;
use crate::domain::star::EmotionBadge;
use crate::domain::tags::TagCount;
use crate::domain::JournalEntry;

/// Longest content preview shown in entry lists, in characters
const PREVIEW_CHARS: usize = 40;

fn preview(content: &str) -> String {
    let single_line = content.replace(['\n', '\r'], " ");
    if single_line.chars().count() > PREVIEW_CHARS {
        let cut: String = single_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        single_line
    }
}

fn format_tags(entry: &JournalEntry) -> String {
    entry
        .hashtags
        .iter()
        .map(|tag| format!("#{}", tag))
        .chain(entry.auto_tags.iter().map(|tag| format!("[{}]", tag)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line description of a badge
pub fn format_badge(badge: &EmotionBadge) -> String {
    format!(
        "{} {} {} {} {}{} {}",
        "★".repeat(usize::from(badge.intensity)),
        badge.size,
        badge.color,
        badge.shape,
        badge.pattern,
        if badge.glow { " glow" } else { "" },
        badge.emotion
    )
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {}  {}  {}\n",
            entry.date.format("%Y-%m-%d"),
            entry.emotion.emoji(),
            entry.emotion,
            entry.id,
            preview(&entry.content)
        ));
    }
    output
}

/// Full description of a single entry
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = format!(
        "{} {} {}\n{}\n",
        entry.date.format("%Y-%m-%d"),
        entry.emotion.emoji(),
        entry.emotion,
        entry.content
    );

    let tags = format_tags(entry);
    if !tags.is_empty() {
        output.push_str(&format!("tags: {}\n", tags));
    }
    if let Some(star) = &entry.star {
        output.push_str(&format!("star: {}\n", format_badge(star)));
    }
    output.push_str(&format!("id: {}\n", entry.id));
    output
}

/// Format tag counts, most used first
pub fn format_tag_counts(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}  {}\n", tag.tag, tag.count));
    }
    output
}

/// Format the badge collection and per-emotion badge statistics
pub fn format_star_report(report: &StarReport) -> String {
    if report.badges.is_empty() {
        return "No stars collected yet".to_string();
    }

    let total_intensity: u32 = report
        .badges
        .iter()
        .map(|badge| u32::from(badge.intensity))
        .sum();
    let glowing = report.badges.iter().filter(|badge| badge.glow).count();

    let mut output = format!("{} stars collected\n", report.badges.len());
    output.push_str(&format!(
        "{} emotions, avg intensity {:.1}, {} glowing\n\n",
        report.stats.len(),
        f64::from(total_intensity) / report.badges.len() as f64,
        glowing
    ));
    for badge in &report.badges {
        output.push_str(&format!(
            "{}  {}\n",
            badge.created_at.format("%Y-%m-%d %H:%M"),
            format_badge(badge)
        ));
    }

    output.push('\n');
    for (emotion, stats) in &report.stats {
        let shapes = stats
            .shape_counts
            .iter()
            .map(|(shape, count)| format!("{} {}", shape, count))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "{}: {} stars, avg intensity {:.1}, shapes: {}\n",
            emotion, stats.count, stats.avg_intensity, shapes
        ));
    }
    output
}

/// Format emotion counts and the weekly trend
pub fn format_emotion_report(report: &EmotionReport) -> String {
    if report.total_entries == 0 {
        return "No entries yet. Write one to see statistics.".to_string();
    }

    let mut output = format!("{} entries\n\n", report.total_entries);
    for count in &report.counts {
        output.push_str(&format!(
            "{} {}  {}  ({:.1}%)  {}\n",
            count.emotion.emoji(),
            count.emotion,
            count.count,
            count.share * 100.0,
            count.emotion.color()
        ));
    }

    output.push_str("\nLast 7 days\n");
    for day in &report.trend {
        let emotions = day
            .counts
            .iter()
            .map(|(emotion, count)| format!("{} {}", emotion, count))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "{}  {}  {}\n",
            day.date.format("%m-%d"),
            day.total,
            emotions
        ));
    }
    output
}

/// Format today's feedback
pub fn format_feedback(feedback: Option<&DailyFeedback>) -> String {
    match feedback {
        None => "No entries today. Write one to get feedback.".to_string(),
        Some(feedback) => format!(
            "{} {}\n{}\n{}\n\n오늘의 감정: {}\n",
            feedback.message.emoji,
            feedback.message.greeting,
            feedback.message.reflection,
            feedback.message.encouragement,
            feedback.summary()
        ),
    }
}

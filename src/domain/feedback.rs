//! Daily feedback messages
//!
//! Picks the emotion that dominated today's entries and returns one of the
//! canned encouragement messages written for it.

use crate::domain::star::random::{choose, RandomSource};
use crate::domain::{Emotion, JournalEntry};
use chrono::NaiveDate;

/// A canned feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub greeting: &'static str,
    pub reflection: &'static str,
    pub encouragement: &'static str,
    pub emoji: &'static str,
}

const fn message(
    greeting: &'static str,
    reflection: &'static str,
    encouragement: &'static str,
    emoji: &'static str,
) -> FeedbackMessage {
    FeedbackMessage {
        greeting,
        reflection,
        encouragement,
        emoji,
    }
}

static JOY_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘 하루는 정말 기쁘셨군요!",
        "행복한 순간들이 가득했던 것 같아요.",
        "내일도 이런 즐거운 하루가 되길 바라요!",
        "🌟",
    ),
    message(
        "오늘은 웃음이 가득한 하루였네요!",
        "긍정적인 에너지가 느껴져요.",
        "앞으로도 이런 밝은 마음을 유지하세요!",
        "✨",
    ),
];

static SADNESS_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘 하루는 조금 힘드셨군요.",
        "슬픈 감정도 소중한 마음의 표현이에요.",
        "내일은 더 밝은 하루가 되길 바라요!",
        "🌙",
    ),
    message(
        "오늘은 마음이 무거웠나 보네요.",
        "때로는 슬픔을 느끼는 것도 자연스러운 일이에요.",
        "곧 다시 웃을 수 있는 날이 올 거예요!",
        "🌈",
    ),
];

static ANGER_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘 하루는 화가 나는 일이 있었군요.",
        "분노도 중요한 감정 중 하나예요.",
        "내일은 더 평온한 하루가 되길 바라요!",
        "🔥",
    ),
    message(
        "오늘은 속상한 일들이 있었나 보네요.",
        "화난 마음을 표현하는 것도 건강한 일이에요.",
        "내일은 마음이 차분해지길 바라요!",
        "🌊",
    ),
];

static ANXIETY_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘 하루는 불안하셨군요.",
        "걱정이 많았던 하루였나 봐요.",
        "내일은 더 안정된 마음으로 보내세요!",
        "🕊️",
    ),
    message(
        "오늘은 마음이 편치 않으셨나요?",
        "불안한 감정을 인정하는 것도 용기예요.",
        "내일은 더 평안한 하루가 되길 바라요!",
        "🌸",
    ),
];

static CALM_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘 하루는 평온하셨군요.",
        "마음의 안정을 찾으신 것 같아요.",
        "내일도 이런 고요한 평화가 함께하길 바라요!",
        "🍃",
    ),
    message(
        "오늘은 차분한 하루를 보내셨네요.",
        "내면의 평화를 느끼셨나 봐요.",
        "앞으로도 이런 고요함을 유지하세요!",
        "🧘",
    ),
];

static EXCITEMENT_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘 하루는 정말 신나셨군요!",
        "에너지가 넘치는 하루였나 봐요.",
        "내일도 이런 활기찬 하루가 되길 바라요!",
        "🎉",
    ),
    message(
        "오늘은 흥미진진한 하루였네요!",
        "열정적인 에너지가 느껴져요.",
        "앞으로도 이런 활력을 잃지 마세요!",
        "🚀",
    ),
];

/// Messages used when no emotion-specific list applies
pub static GENERAL_MESSAGES: &[FeedbackMessage] = &[
    message(
        "오늘도 하루를 잘 마무리하셨네요.",
        "다양한 감정을 경험하며 성장하고 계세요.",
        "내일도 멋진 하루가 되길 바라요!",
        "💫",
    ),
    message(
        "오늘 하루도 수고 많으셨어요.",
        "감정을 기록하는 것만으로도 큰 의미가 있어요.",
        "내일은 더 좋은 일들이 기다리고 있을 거예요!",
        "🌺",
    ),
];

/// Canned messages for an emotion
pub fn messages_for(emotion: Emotion) -> &'static [FeedbackMessage] {
    match emotion {
        Emotion::Joy => JOY_MESSAGES,
        Emotion::Sadness => SADNESS_MESSAGES,
        Emotion::Anger => ANGER_MESSAGES,
        Emotion::Anxiety => ANXIETY_MESSAGES,
        Emotion::Calm => CALM_MESSAGES,
        Emotion::Excitement => EXCITEMENT_MESSAGES,
    }
}

/// Feedback for one day of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyFeedback {
    pub date: NaiveDate,
    pub dominant: Emotion,
    pub message: FeedbackMessage,
    /// Today's emotions with counts, most frequent first
    pub counts: Vec<(Emotion, usize)>,
}

impl DailyFeedback {
    /// Summary line such as `기쁨(2회), 슬픔(1회)`
    pub fn summary(&self) -> String {
        self.counts
            .iter()
            .map(|(emotion, count)| format!("{}({}회)", emotion, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Emotion counts for the entries in iteration order of first appearance,
/// then sorted by count (stable, so earlier entries win ties).
fn ranked_counts<'a>(entries: impl Iterator<Item = &'a JournalEntry>) -> Vec<(Emotion, usize)> {
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(emotion, _)| *emotion == entry.emotion) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.emotion, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Build feedback for `today`, or `None` when nothing was written today.
///
/// Entries are expected newest first, so on a tie the most recent emotion
/// dominates.
pub fn daily_feedback<R: RandomSource + ?Sized>(
    rng: &mut R,
    entries: &[JournalEntry],
    today: NaiveDate,
) -> Option<DailyFeedback> {
    let counts = ranked_counts(entries.iter().filter(|entry| entry.date == today));
    let dominant = counts.first()?.0;

    let candidates = messages_for(dominant);
    let message = choose(rng, candidates)
        .or_else(|| choose(rng, GENERAL_MESSAGES))
        .copied()?;

    Some(DailyFeedback {
        date: today,
        dominant,
        message,
        counts,
    })
}

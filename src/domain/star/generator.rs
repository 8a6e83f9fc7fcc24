//! Star badge generation

use super::badge::{EmotionBadge, Pattern, Shape, Size};
use super::intensity::{calculate_intensity, BASELINE_INTENSITY};
use super::random::{choose, weighted_choice, RandomSource};
use super::rules::{star_rule, DEFAULT_COLOR};
use crate::domain::Emotion;
use chrono::Utc;
use log::debug;
use std::str::FromStr;
use uuid::Uuid;

/// Intensity from which every badge glows
const GLOW_INTENSITY: u8 = 4;

fn new_badge_id() -> String {
    format!("star-{}", Uuid::new_v4().simple())
}

/// Generate a badge using the thread-local random generator
pub fn generate_emotion_star(emotion: &str, content: &str, entry_id: &str) -> EmotionBadge {
    generate_emotion_star_with(&mut rand::thread_rng(), emotion, content, entry_id)
}

/// Generate a badge for an entry.
///
/// `emotion` may be a Korean label or an English alias. Unknown emotions get
/// a plain gold star with baseline intensity.
pub fn generate_emotion_star_with<R: RandomSource + ?Sized>(
    rng: &mut R,
    emotion: &str,
    content: &str,
    entry_id: &str,
) -> EmotionBadge {
    let Ok(known) = Emotion::from_str(emotion) else {
        debug!("no star rule for emotion '{}', using default badge", emotion);
        return default_badge(emotion, entry_id);
    };

    let rule = star_rule(known);
    let intensity = calculate_intensity(content);

    let shape = choose(rng, rule.shapes).copied().unwrap_or(Shape::Star);
    let color = choose(rng, rule.colors).copied().unwrap_or(DEFAULT_COLOR);
    let pattern = choose(rng, rule.patterns)
        .copied()
        .unwrap_or(Pattern::Solid);
    let size = weighted_choice(rng, &Size::ALL, &rule.size_weights.as_array())
        .copied()
        .unwrap_or(Size::Medium);

    let badge = EmotionBadge {
        id: new_badge_id(),
        emotion: known.label().to_string(),
        intensity,
        shape,
        size,
        color: color.to_string(),
        glow: rule.default_glow || intensity >= GLOW_INTENSITY,
        pattern,
        created_at: Utc::now(),
        entry_id: entry_id.to_string(),
    };

    debug!(
        "generated star {} for entry {}: {} {} {} {} intensity={} glow={}",
        badge.id,
        entry_id,
        badge.shape,
        badge.size,
        badge.color,
        badge.pattern,
        badge.intensity,
        badge.glow
    );

    badge
}

fn default_badge(emotion: &str, entry_id: &str) -> EmotionBadge {
    EmotionBadge {
        id: new_badge_id(),
        emotion: emotion.to_string(),
        intensity: BASELINE_INTENSITY,
        shape: Shape::Star,
        size: Size::Medium,
        color: DEFAULT_COLOR.to_string(),
        glow: false,
        pattern: Pattern::Solid,
        created_at: Utc::now(),
        entry_id: entry_id.to_string(),
    }
}

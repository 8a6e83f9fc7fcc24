//! Emotion star badges

pub mod badge;
pub mod collection;
pub mod generator;
pub mod intensity;
pub mod random;
pub mod rules;

pub use badge::{EmotionBadge, Pattern, Shape, Size};
pub use collection::{star_collection, star_stats_by_emotion, EmotionStarStats};
pub use generator::{generate_emotion_star, generate_emotion_star_with};
pub use random::RandomSource;
pub use rules::{star_rule, StarRule};

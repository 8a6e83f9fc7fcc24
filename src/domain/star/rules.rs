//! Per-emotion rules for star badge appearance

use super::badge::{Pattern, Shape, Size};
use crate::domain::Emotion;

/// Relative weights for each badge size; they need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeWeights {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl SizeWeights {
    /// Weights in `Size::ALL` order
    pub fn as_array(&self) -> [f64; 3] {
        [self.small, self.medium, self.large]
    }
}

/// Allowed visual attributes for one emotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRule {
    pub shapes: &'static [Shape],
    pub colors: &'static [&'static str],
    pub patterns: &'static [Pattern],
    pub default_glow: bool,
    pub size_weights: SizeWeights,
}

static JOY: StarRule = StarRule {
    shapes: &[Shape::Star, Shape::Heart, Shape::Circle],
    colors: &["#FFD700", "#FFA500", "#FF69B4", "#FFFF00"],
    patterns: &[Pattern::Sparkle, Pattern::Gradient, Pattern::Pulse],
    default_glow: true,
    size_weights: SizeWeights {
        small: 0.2,
        medium: 0.5,
        large: 0.3,
    },
};

static SADNESS: StarRule = StarRule {
    shapes: &[Shape::Circle, Shape::Diamond, Shape::Triangle],
    colors: &["#4169E1", "#6495ED", "#87CEEB", "#B0C4DE"],
    patterns: &[Pattern::Solid, Pattern::Gradient],
    default_glow: false,
    size_weights: SizeWeights {
        small: 0.4,
        medium: 0.4,
        large: 0.2,
    },
};

static ANGER: StarRule = StarRule {
    shapes: &[Shape::Triangle, Shape::Diamond, Shape::Star],
    colors: &["#FF4500", "#DC143C", "#B22222", "#FF6347"],
    patterns: &[Pattern::Pulse, Pattern::Solid, Pattern::Sparkle],
    default_glow: true,
    size_weights: SizeWeights {
        small: 0.3,
        medium: 0.4,
        large: 0.3,
    },
};

static ANXIETY: StarRule = StarRule {
    shapes: &[Shape::Triangle, Shape::Diamond, Shape::Circle],
    colors: &["#9370DB", "#8A2BE2", "#9932CC", "#BA55D3"],
    patterns: &[Pattern::Pulse, Pattern::Gradient],
    default_glow: false,
    size_weights: SizeWeights {
        small: 0.5,
        medium: 0.3,
        large: 0.2,
    },
};

static CALM: StarRule = StarRule {
    shapes: &[Shape::Circle, Shape::Heart, Shape::Star],
    colors: &["#32CD32", "#98FB98", "#90EE90", "#00FA9A"],
    patterns: &[Pattern::Solid, Pattern::Gradient],
    default_glow: false,
    size_weights: SizeWeights {
        small: 0.3,
        medium: 0.5,
        large: 0.2,
    },
};

static EXCITEMENT: StarRule = StarRule {
    shapes: &[Shape::Star, Shape::Diamond, Shape::Heart],
    colors: &["#FF8C00", "#FF4500", "#FF1493", "#FF69B4"],
    patterns: &[Pattern::Sparkle, Pattern::Pulse, Pattern::Gradient],
    default_glow: true,
    size_weights: SizeWeights {
        small: 0.2,
        medium: 0.4,
        large: 0.4,
    },
};

/// Color of the fallback badge for unknown emotions
pub const DEFAULT_COLOR: &str = "#FFD700";

/// Look up the rule for an emotion
pub fn star_rule(emotion: Emotion) -> &'static StarRule {
    match emotion {
        Emotion::Joy => &JOY,
        Emotion::Sadness => &SADNESS,
        Emotion::Anger => &ANGER,
        Emotion::Anxiety => &ANXIETY,
        Emotion::Calm => &CALM,
        Emotion::Excitement => &EXCITEMENT,
    }
}

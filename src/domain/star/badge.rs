//! Emotion star badge record and its visual attributes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Star,
    Heart,
    Diamond,
    Circle,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Fixed enumeration order used by weighted selection
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Solid,
    Gradient,
    Sparkle,
    Pulse,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Star => "star",
            Shape::Heart => "heart",
            Shape::Diamond => "diamond",
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Solid => "solid",
            Pattern::Gradient => "gradient",
            Pattern::Sparkle => "sparkle",
            Pattern::Pulse => "pulse",
        };
        f.write_str(name)
    }
}

/// Decorative badge generated once per entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionBadge {
    pub id: String,

    /// Emotion label the badge was generated for (kept verbatim when unknown)
    pub emotion: String,

    /// 1 (faint) to 5 (strong)
    pub intensity: u8,

    pub shape: Shape,
    pub size: Size,

    /// Hex color, e.g. `#FFD700`
    pub color: String,

    pub glow: bool,
    pub pattern: Pattern,
    pub created_at: DateTime<Utc>,

    /// Owning entry
    pub entry_id: String,
}

//! Emotion labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six emotions an entry can be tagged with.
///
/// Serialized with the Korean label the journal stores on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "기쁨")]
    Joy,
    #[serde(rename = "슬픔")]
    Sadness,
    #[serde(rename = "화남")]
    Anger,
    #[serde(rename = "불안")]
    Anxiety,
    #[serde(rename = "평온")]
    Calm,
    #[serde(rename = "흥분")]
    Excitement,
}

impl Emotion {
    /// All emotions in display order
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Anxiety,
        Emotion::Calm,
        Emotion::Excitement,
    ];

    /// Korean label, as stored in the journal
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "기쁨",
            Emotion::Sadness => "슬픔",
            Emotion::Anger => "화남",
            Emotion::Anxiety => "불안",
            Emotion::Calm => "평온",
            Emotion::Excitement => "흥분",
        }
    }

    /// English alias accepted on the command line
    pub fn alias(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Anxiety => "anxiety",
            Emotion::Calm => "calm",
            Emotion::Excitement => "excitement",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Anxiety => "😰",
            Emotion::Calm => "😌",
            Emotion::Excitement => "🤩",
        }
    }

    /// Chart color used for this emotion in statistics output
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::Joy => "#FDE047",
            Emotion::Sadness => "#60A5FA",
            Emotion::Anger => "#F87171",
            Emotion::Anxiety => "#C084FC",
            Emotion::Calm => "#4ADE80",
            Emotion::Excitement => "#FB923C",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.label() == trimmed || emotion.alias() == lowered)
            .ok_or_else(|| {
                format!(
                    "Invalid emotion: '{}'. Valid emotions are: 기쁨 (joy), 슬픔 (sadness), \
                    화남 (anger), 불안 (anxiety), 평온 (calm), 흥분 (excitement)",
                    s
                )
            })
    }
}

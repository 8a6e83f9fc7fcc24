//! Emotion intensity scoring from entry text

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;
pub const BASELINE_INTENSITY: u8 = 3;

/// Content longer than this many characters reads as more intense
const LONG_CONTENT_CHARS: usize = 200;
/// Content shorter than this many characters reads as less intense
const SHORT_CONTENT_CHARS: usize = 50;

const HIGH_KEYWORDS: &[&str] = &[
    "정말", "너무", "엄청", "완전", "진짜", "매우", "굉장히", "극도로", "최고", "최악",
];
const MEDIUM_KEYWORDS: &[&str] = &["조금", "약간", "살짝", "어느 정도", "그럭저럭", "보통"];
const LOW_KEYWORDS: &[&str] = &["별로", "그냥", "평범", "무난"];

fn count_present(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|keyword| text.contains(*keyword)).count()
}

/// Score content on a 1..=5 scale.
///
/// Starts at 3. Each distinct strong keyword adds one and each distinct weak
/// keyword subtracts one; moderate keywords alone pin the score at 3. A
/// length adjustment is applied afterwards in every case.
pub fn calculate_intensity(content: &str) -> u8 {
    let lowered = content.to_lowercase();
    let high = count_present(&lowered, HIGH_KEYWORDS);
    let medium = count_present(&lowered, MEDIUM_KEYWORDS);
    let low = count_present(&lowered, LOW_KEYWORDS);

    let mut intensity = i32::from(BASELINE_INTENSITY);
    let (min, max) = (i32::from(MIN_INTENSITY), i32::from(MAX_INTENSITY));

    if high > 0 {
        intensity = (intensity + high as i32).min(max);
    }
    if low > 0 {
        intensity = (intensity - low as i32).max(min);
    }
    if medium > 0 && high == 0 && low == 0 {
        intensity = i32::from(BASELINE_INTENSITY);
    }

    let length = content.chars().count();
    if length > LONG_CONTENT_CHARS {
        intensity = (intensity + 1).min(max);
    } else if length < SHORT_CONTENT_CHARS {
        intensity = (intensity - 1).max(min);
    }

    intensity.clamp(min, max) as u8
}

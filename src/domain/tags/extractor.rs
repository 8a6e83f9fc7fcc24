//! Tag extraction from entry content

use super::rules::{TagCategoryRule, TAG_CATEGORY_RULES};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for matching hashtags: `#` followed by word characters of any script
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#(\w+)").unwrap())
}

/// Tags derived from one entry's content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTags {
    /// Tags written by the user as `#tag`, without the `#`
    pub hashtags: Vec<String>,

    /// Canonical tags inferred from the keyword table
    pub auto_tags: Vec<String>,
}

pub struct TagExtractor;

impl TagExtractor {
    /// Extract both hashtags and auto-tags
    pub fn extract_all(content: &str) -> ExtractedTags {
        ExtractedTags {
            hashtags: Self::extract_hashtags(content),
            auto_tags: Self::extract_auto_tags(content),
        }
    }

    /// Hashtags in order of first appearance, duplicates collapsed
    pub fn extract_hashtags(content: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for captures in hashtag_regex().captures_iter(content) {
            let tag = &captures[1];
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    /// Auto-tags using the built-in keyword table
    pub fn extract_auto_tags(content: &str) -> Vec<String> {
        Self::extract_auto_tags_with(content, TAG_CATEGORY_RULES)
    }

    /// Auto-tags using a caller-supplied keyword table.
    ///
    /// Each matching rule contributes its tag once, no matter how many of its
    /// keywords occur.
    pub fn extract_auto_tags_with(content: &str, rules: &[TagCategoryRule]) -> Vec<String> {
        let lowered = content.to_lowercase();
        let mut tags: Vec<String> = Vec::new();

        for rule in rules {
            let matched = rule
                .keywords
                .iter()
                .any(|keyword| lowered.contains(&keyword.to_lowercase()));

            if matched && !tags.iter().any(|existing| existing == rule.tag) {
                tags.push(rule.tag.to_string());
            }
        }

        tags
    }
}

//! Tag system

pub mod extractor;
pub mod rules;
pub mod search;

// Re-export main types
pub use extractor::{ExtractedTags, TagExtractor};
pub use rules::{TagCategoryRule, TAG_CATEGORY_RULES};
pub use search::{popular_tags, search_by_tags, TagCount};

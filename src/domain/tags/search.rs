//! Tag search and popularity over journal entries

use crate::domain::JournalEntry;
use std::collections::HashMap;

/// A tag with the number of times it occurs across entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Filter entries whose hashtags or auto-tags contain any of the query tags.
///
/// Matching is case-insensitive substring containment, so `산` finds `산책`.
/// An empty query, or one made only of blank tags like `""` or `"#"`,
/// returns every entry, untagged ones included.
pub fn search_by_tags<'a>(entries: &'a [JournalEntry], tags: &[String]) -> Vec<&'a JournalEntry> {
    let needles: Vec<String> = tags
        .iter()
        .map(|tag| tag.strip_prefix('#').unwrap_or(tag).to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    if needles.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.all_tags().any(|entry_tag| {
                let entry_tag = entry_tag.to_lowercase();
                needles.iter().any(|needle| entry_tag.contains(needle.as_str()))
            })
        })
        .collect()
}

/// Most frequent tags, highest count first, at most `limit` of them.
///
/// Equal counts are ordered by tag text.
pub fn popular_tags(entries: &[JournalEntry], limit: usize) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        for tag in entry.all_tags() {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    ranked.truncate(limit);
    ranked
}

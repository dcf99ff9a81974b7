//! Tag frequency aggregation.
//!
//! # Responsibility
//! - Count tag labels across the snapshot and return the most frequent few.
//!
//! # Invariants
//! - Matching is case-sensitive after trimming: `Work` and `work` count
//!   separately.
//! - Ties are broken by first-seen order of the label across the snapshot,
//!   so output is deterministic for any given input order.

use crate::model::entry::JournalEntry;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Maximum number of tags returned by [`top_tags`].
pub const TOP_TAGS_LIMIT: usize = 5;

/// One tag label with its occurrence count across the snapshot.
///
/// Displays as `<tag> (<count>)`, the shape the journal UI renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub label: String,
    pub count: u32,
}

impl Display for TagCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.count)
    }
}

/// Returns up to [`TOP_TAGS_LIMIT`] tags, most frequent first.
///
/// Each entry's `tags` field is split on commas; tokens are trimmed and
/// empty tokens discarded. Equal counts keep first-seen order.
pub fn top_tags(entries: &[JournalEntry]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        for label in entry.tag_list() {
            match slots.get(label) {
                Some(&slot) => counts[slot].count += 1,
                None => {
                    slots.insert(label.to_string(), counts.len());
                    counts.push(TagCount {
                        label: label.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort over first-seen order pins the tie-break.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_TAGS_LIMIT);
    counts
}

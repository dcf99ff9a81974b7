//! Primary mood aggregation.
//!
//! # Responsibility
//! - Pick the most frequent `primary_mood` across the snapshot.
//!
//! # Invariants
//! - An empty snapshot yields the [`NO_ENTRIES_MOOD`] sentinel.
//! - Among equal counts the first-encountered mood wins, so output is
//!   deterministic for any given input order.

use crate::model::entry::JournalEntry;

/// Sentinel returned when there are no entries to aggregate.
pub const NO_ENTRIES_MOOD: &str = "None";

/// Returns the most frequent primary mood label.
///
/// Mood labels are grouped verbatim; the model's default keeps unset moods
/// from ever reaching here as empty strings, but an empty label would
/// simply form its own group rather than fault.
pub fn top_mood(entries: &[JournalEntry]) -> String {
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for entry in entries {
        match counts
            .iter_mut()
            .find(|(label, _)| *label == entry.primary_mood.as_str())
        {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.primary_mood.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for &(label, count) in &counts {
        // Strictly-greater keeps the first-encountered group among ties.
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }

    best.map_or_else(
        || NO_ENTRIES_MOOD.to_string(),
        |(label, _)| label.to_string(),
    )
}

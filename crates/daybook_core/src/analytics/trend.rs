//! Recent word-count trend sampling.
//!
//! # Responsibility
//! - Sample word counts for the most recent calendar days, oldest first.
//!
//! # Invariants
//! - Output length is always [`TREND_WINDOW_DAYS`], regardless of how many
//!   entries exist. Days without an entry sample as zero.
//! - Word counting is the model's naive single-space split; smarter
//!   word-boundary logic would silently change the numbers users see.

use crate::model::entry::JournalEntry;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Number of calendar days sampled by [`word_trend`].
pub const TREND_WINDOW_DAYS: usize = 5;

/// Samples word counts for `today - 4` through `today`, oldest first.
pub fn word_trend(entries: &[JournalEntry], today: NaiveDate) -> Vec<u32> {
    let by_date: HashMap<NaiveDate, &JournalEntry> = entries
        .iter()
        .map(|entry| (entry.entry_date, entry))
        .collect();

    (0..TREND_WINDOW_DAYS as u64)
        .rev()
        .map(|offset| {
            today
                .checked_sub_days(Days::new(offset))
                .and_then(|day| by_date.get(&day))
                .map_or(0, |entry| entry.word_count() as u32)
        })
        .collect()
}

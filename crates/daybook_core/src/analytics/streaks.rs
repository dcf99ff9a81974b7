//! Streak and missed-day statistics.
//!
//! # Responsibility
//! - Compute current streak, longest streak, and missed-day count from a
//!   snapshot of dated entries.
//!
//! # Invariants
//! - The current-streak walk and the longest-streak scan stay independent:
//!   the walk breaks at the first gap, the scan resets its run and keeps
//!   going. Unifying them would change termination behavior.
//! - A future-dated entry never satisfies a present-or-past candidate day;
//!   the walk matches exact dates only.
//! - All outputs are non-negative; missed days floor at zero.

use crate::model::entry::JournalEntry;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Streak statistics for one journal snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    /// Consecutive journaled days ending today (or yesterday, when today
    /// has no entry yet).
    pub current: u32,
    /// Longest run of consecutive journaled days anywhere in history.
    pub longest: u32,
    /// Calendar days since the first entry (inclusive) minus days actually
    /// journaled, floored at zero.
    pub missed_days: u32,
}

/// Computes streak statistics relative to the injected `today`.
///
/// An empty snapshot yields the all-zero summary. When entries exist the
/// longest streak is always at least 1.
pub fn streak_summary(entries: &[JournalEntry], today: NaiveDate) -> StreakSummary {
    if entries.is_empty() {
        return StreakSummary::default();
    }

    let dates: BTreeSet<NaiveDate> = entries.iter().map(|entry| entry.entry_date).collect();

    StreakSummary {
        current: current_streak(&dates, today),
        longest: longest_streak(&dates),
        missed_days: missed_days(&dates, entries.len(), today),
    }
}

/// Walks backward one day at a time while an entry exists for the exact
/// candidate day.
///
/// Writing later today must not be penalized before end of day, so when
/// today has no entry the walk starts at yesterday instead. Candidate days
/// never move forward, so future-dated entries are simply never visited.
fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut candidate = if dates.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = candidate {
        if !dates.contains(&day) {
            break;
        }
        streak += 1;
        candidate = day.pred_opt();
    }

    streak
}

/// Scans distinct dates ascending, extending a run on one-day gaps and
/// resetting it on anything larger.
fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut iter = dates.iter().copied();
    let Some(mut prev) = iter.next() else {
        return 0;
    };

    let mut longest = 1;
    let mut run = 1;
    for date in iter {
        if (date - prev).num_days() == 1 {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
        prev = date;
    }

    longest
}

/// Counts the calendar days in `[earliest, today]` not covered by an entry.
///
/// The floor guards the clock-skew case where the earliest entry is dated
/// after `today`: the span goes non-positive and missed days stay zero.
fn missed_days(dates: &BTreeSet<NaiveDate>, total_entries: usize, today: NaiveDate) -> u32 {
    let Some(earliest) = dates.iter().next().copied() else {
        return 0;
    };

    let span = (today - earliest).num_days() + 1;
    (span - total_entries as i64).max(0) as u32
}

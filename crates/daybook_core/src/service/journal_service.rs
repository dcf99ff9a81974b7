//! Journal use-case service.
//!
//! # Responsibility
//! - Provide stable entry CRUD and analytics entry points for callers.
//! - Delegate persistence to the injected store implementation.
//!
//! # Invariants
//! - Each analytics call performs exactly one bulk snapshot fetch.
//! - The reference "today" is always a parameter; the service never reads
//!   the wall clock.

use crate::analytics::moods::top_mood;
use crate::analytics::streaks::{streak_summary, StreakSummary};
use crate::analytics::tags::top_tags;
use crate::analytics::trend::word_trend;
use crate::model::entry::{EntryId, JournalEntry};
use crate::repo::entry_repo::{EntryStore, RepoResult};
use chrono::NaiveDate;

/// Use-case facade over an injected entry store.
pub struct JournalService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> JournalService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates or overwrites the entry for its calendar date.
    ///
    /// # Contract
    /// - At most one entry per date survives the call.
    /// - Returns the effective stable id: the stored row's id when an
    ///   existing date was overwritten.
    pub fn upsert_entry(&self, entry: &JournalEntry) -> RepoResult<EntryId> {
        self.store.upsert(entry)
    }

    /// Gets the entry for the exact calendar date, if any.
    pub fn entry_for_date(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>> {
        self.store.get_by_date(date)
    }

    /// Lists every entry, newest entry date first.
    pub fn list_entries(&self) -> RepoResult<Vec<JournalEntry>> {
        self.store.list_all()
    }

    /// Lists favorited entries, newest entry date first.
    pub fn list_favorites(&self) -> RepoResult<Vec<JournalEntry>> {
        self.store.list_favorites()
    }

    /// Deletes one entry by stable id.
    pub fn delete_entry(&self, id: EntryId) -> RepoResult<()> {
        self.store.delete(id)
    }

    /// Deletes every entry.
    pub fn delete_all_entries(&self) -> RepoResult<()> {
        self.store.delete_all()
    }

    /// Computes streak statistics relative to the injected `today`.
    pub fn streaks(&self, today: NaiveDate) -> RepoResult<StreakSummary> {
        let snapshot = self.store.list_all()?;
        Ok(streak_summary(&snapshot, today))
    }

    /// Returns the most frequent tags formatted as `<tag> (<count>)`.
    pub fn top_tags(&self) -> RepoResult<Vec<String>> {
        let snapshot = self.store.list_all()?;
        Ok(top_tags(&snapshot)
            .into_iter()
            .map(|tag| tag.to_string())
            .collect())
    }

    /// Returns the most frequent primary mood, or `"None"` without entries.
    pub fn top_mood(&self) -> RepoResult<String> {
        let snapshot = self.store.list_all()?;
        Ok(top_mood(&snapshot))
    }

    /// Samples word counts for the recent trend window, oldest day first.
    pub fn word_trend(&self, today: NaiveDate) -> RepoResult<Vec<u32>> {
        let snapshot = self.store.list_all()?;
        Ok(word_trend(&snapshot, today))
    }
}

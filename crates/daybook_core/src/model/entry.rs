//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the canonical daily record shared by storage and analytics.
//! - Provide parsing helpers for the free-text `tags` and `content` fields.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another entry.
//! - `entry_date` is the natural key: at most one entry per calendar date.
//! - `created_at`/`updated_at` are managed by the store; `0` until persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Mood label applied when the writer picked none.
pub const DEFAULT_MOOD: &str = "Neutral";

/// Stable identifier for every journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Validation error for entry invariants checked before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// The nil uuid is reserved and never a valid entry identity.
    NilUuid,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "entry uuid must not be nil"),
        }
    }
}

impl Error for EntryValidationError {}

/// Canonical record for one journaled calendar day.
///
/// The analytics engine only ever sees value copies of this struct; it is
/// cheap to clone and carries no storage handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable global ID used for deletion and auditing.
    pub uuid: EntryId,
    /// Calendar day this entry belongs to. Natural unique key.
    pub entry_date: NaiveDate,
    /// Optional short headline.
    pub title: String,
    /// Free-text body. Word counting is the naive single-space split.
    pub content: String,
    /// Primary mood label. Defaults to [`DEFAULT_MOOD`].
    pub primary_mood: String,
    /// Optional secondary mood, stored but not aggregated.
    pub secondary_mood_1: Option<String>,
    /// Optional secondary mood, stored but not aggregated.
    pub secondary_mood_2: Option<String>,
    /// Free text, comma-separated labels. Parsed via [`JournalEntry::tag_list`].
    pub tags: String,
    /// Marks the entry for the favorites listing.
    pub is_favorite: bool,
    /// Unix epoch milliseconds, set by the store on first insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, bumped by the store on every write.
    pub updated_at: i64,
}

impl JournalEntry {
    /// Creates a new entry for `entry_date` with a generated stable ID.
    ///
    /// # Invariants
    /// - `primary_mood` starts as [`DEFAULT_MOOD`].
    /// - Audit timestamps start at `0` and are owned by the store.
    pub fn new(entry_date: NaiveDate, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), entry_date, content)
    }

    /// Creates a new entry with a caller-provided stable ID.
    ///
    /// Used by the store when an upsert must keep the identity of the row
    /// already persisted for the same date.
    pub fn with_id(uuid: EntryId, entry_date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            uuid,
            entry_date,
            title: String::new(),
            content: content.into(),
            primary_mood: DEFAULT_MOOD.to_string(),
            secondary_mood_1: None,
            secondary_mood_2: None,
            tags: String::new(),
            is_favorite: false,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Checks entry invariants that must hold before persistence.
    ///
    /// # Errors
    /// - Returns [`EntryValidationError::NilUuid`] for the nil identity.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.uuid.is_nil() {
            return Err(EntryValidationError::NilUuid);
        }
        Ok(())
    }

    /// Splits the free-text `tags` field into clean labels.
    ///
    /// Tokens are split on commas and trimmed; empty tokens are discarded.
    /// Labels keep their original case: `Work` and `work` are distinct.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Counts words in `content` using the naive single-space split.
    ///
    /// Consecutive spaces inflate the count on purpose, and tabs or
    /// newlines do not split at all; downstream consumers rely on this
    /// exact tokenization. Empty or whitespace-only content counts as
    /// zero words.
    pub fn word_count(&self) -> usize {
        if self.content.trim().is_empty() {
            return 0;
        }
        self.content.split(' ').count()
    }
}

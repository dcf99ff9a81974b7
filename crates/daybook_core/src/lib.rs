//! Core domain logic for Daybook, a one-entry-per-day journal.
//! This crate is the single source of truth for business invariants.

pub mod analytics;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use analytics::moods::{top_mood, NO_ENTRIES_MOOD};
pub use analytics::streaks::{streak_summary, StreakSummary};
pub use analytics::tags::{top_tags, TagCount, TOP_TAGS_LIMIT};
pub use analytics::trend::{word_trend, TREND_WINDOW_DAYS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryId, EntryValidationError, JournalEntry, DEFAULT_MOOD};
pub use repo::entry_repo::{EntryStore, RepoError, RepoResult, SqliteEntryStore};
pub use service::journal_service::JournalService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

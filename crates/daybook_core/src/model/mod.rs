//! Domain model for daily journal records.
//!
//! # Responsibility
//! - Define the canonical one-entry-per-day record used by core logic.
//! - Keep text-parsing helpers (tags, word count) next to the data they read.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - `entry_date` has calendar-day granularity; there is no time-of-day
//!   component anywhere in the model.

pub mod entry;

//! Habit analytics derived from the full entry snapshot.
//!
//! # Responsibility
//! - Turn an unordered collection of dated entries into the statistics
//!   shown to the user: streaks, missed days, top tags, top mood, and the
//!   recent word-count trend.
//!
//! # Invariants
//! - Every function is pure and deterministic: same snapshot and same
//!   reference date, same output. No wall-clock reads, no store access.
//! - Degenerate input (empty snapshot, empty fields, whitespace-only
//!   content) degrades to documented defaults, never to an error.
//! - The reference "today" is always injected by the caller.

pub mod moods;
pub mod streaks;
pub mod tags;
pub mod trend;

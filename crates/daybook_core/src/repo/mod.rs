//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the entry-store contract consumed by services and analytics.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - Store writes must enforce `JournalEntry::validate()` before persistence.
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod entry_repo;

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daybook_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Local;
use daybook_core::db::open_db_in_memory;
use daybook_core::{JournalService, SqliteEntryStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Why: a throwaway in-memory journal exercises the full
    // open -> store -> service path without touching user data.
    let conn = open_db_in_memory()?;
    let store = SqliteEntryStore::try_new(&conn)?;
    let service = JournalService::new(store);

    let today = Local::now().date_naive();
    let streaks = service.streaks(today)?;

    println!("daybook_core version={}", daybook_core::core_version());
    println!(
        "empty journal: current_streak={} longest_streak={} missed_days={}",
        streaks.current, streaks.longest, streaks.missed_days
    );
    println!("word_trend={:?}", service.word_trend(today)?);
    println!("top_mood={}", service.top_mood()?);

    Ok(())
}

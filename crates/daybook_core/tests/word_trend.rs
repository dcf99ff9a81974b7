use chrono::NaiveDate;
use daybook_core::{word_trend, JournalEntry, TREND_WINDOW_DAYS};

#[test]
fn empty_journal_samples_all_zero() {
    let trend = word_trend(&[], date(2024, 1, 10));
    assert_eq!(trend, vec![0; TREND_WINDOW_DAYS]);
}

#[test]
fn samples_cover_the_window_oldest_first() {
    let entries = vec![
        entry_on(date(2024, 1, 6), "one"),
        entry_on(date(2024, 1, 8), "one two three"),
        entry_on(date(2024, 1, 10), "one two"),
    ];

    let trend = word_trend(&entries, date(2024, 1, 10));
    // Jan 6 through Jan 10; Jan 7 and Jan 9 were not journaled.
    assert_eq!(trend, vec![1, 0, 3, 0, 2]);
}

#[test]
fn length_is_fixed_regardless_of_entry_count() {
    let single = vec![entry_on(date(2024, 1, 10), "only entry")];

    let trend = word_trend(&single, date(2024, 1, 10));
    assert_eq!(trend.len(), TREND_WINDOW_DAYS);
    assert_eq!(trend, vec![0, 0, 0, 0, 2]);
}

#[test]
fn entries_outside_the_window_are_ignored() {
    let entries = vec![
        // One day too old.
        entry_on(date(2024, 1, 5), "ancient words here"),
        // Future relative to the reference day.
        entry_on(date(2024, 1, 11), "tomorrow words"),
        entry_on(date(2024, 1, 6), "oldest sampled"),
    ];

    let trend = word_trend(&entries, date(2024, 1, 10));
    assert_eq!(trend, vec![2, 0, 0, 0, 0]);
}

#[test]
fn consecutive_spaces_inflate_the_count() {
    let entries = vec![entry_on(date(2024, 1, 10), "a  b")];

    let trend = word_trend(&entries, date(2024, 1, 10));
    assert_eq!(trend[TREND_WINDOW_DAYS - 1], 3);
}

#[test]
fn whitespace_only_content_samples_zero() {
    let entries = vec![entry_on(date(2024, 1, 10), "   ")];

    let trend = word_trend(&entries, date(2024, 1, 10));
    assert_eq!(trend, vec![0; TREND_WINDOW_DAYS]);
}

fn entry_on(day: NaiveDate, content: &str) -> JournalEntry {
    JournalEntry::new(day, content)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

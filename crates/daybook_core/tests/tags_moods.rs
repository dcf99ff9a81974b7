use chrono::NaiveDate;
use daybook_core::{top_mood, top_tags, JournalEntry, DEFAULT_MOOD, NO_ENTRIES_MOOD, TOP_TAGS_LIMIT};

#[test]
fn tags_are_counted_case_sensitively() {
    let entries = vec![
        entry_with_tags(1, "Work, School"),
        entry_with_tags(2, "work"),
        entry_with_tags(3, "School"),
    ];

    let top = top_tags(&entries);
    assert_eq!(top[0].label, "School");
    assert_eq!(top[0].count, 2);

    let labels: Vec<&str> = top.iter().map(|tag| tag.label.as_str()).collect();
    assert!(labels.contains(&"Work"));
    assert!(labels.contains(&"work"));
}

#[test]
fn tag_counts_format_as_label_and_count() {
    let entries = vec![entry_with_tags(1, "Reading"), entry_with_tags(2, "Reading")];

    let formatted: Vec<String> = top_tags(&entries)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(formatted, vec!["Reading (2)"]);
}

#[test]
fn result_is_capped_at_the_limit() {
    let entries = vec![
        entry_with_tags(1, "a, b, c"),
        entry_with_tags(2, "d, e, f"),
        entry_with_tags(3, "g"),
    ];

    let top = top_tags(&entries);
    assert_eq!(top.len(), TOP_TAGS_LIMIT);
}

#[test]
fn empty_and_whitespace_tokens_are_discarded() {
    let entries = vec![entry_with_tags(1, " , ,,  Gym , ")];

    let top = top_tags(&entries);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].label, "Gym");
}

#[test]
fn equal_counts_keep_first_seen_order() {
    let entries = vec![
        entry_with_tags(1, "zebra"),
        entry_with_tags(2, "alpha"),
        entry_with_tags(3, "zebra, alpha"),
    ];

    let top = top_tags(&entries);
    let labels: Vec<&str> = top
        .iter()
        .map(|tag| tag.label.as_str())
        .collect();
    // `zebra` appeared first in the snapshot, so it wins the tie.
    assert_eq!(labels, vec!["zebra", "alpha"]);
}

#[test]
fn higher_count_beats_first_seen_order() {
    let entries = vec![
        entry_with_tags(1, "early"),
        entry_with_tags(2, "late"),
        entry_with_tags(3, "late"),
    ];

    let top = top_tags(&entries);
    assert_eq!(top[0].label, "late");
    assert_eq!(top[0].count, 2);
}

#[test]
fn no_entries_yield_no_tags() {
    assert!(top_tags(&[]).is_empty());
}

#[test]
fn top_mood_of_empty_journal_is_the_sentinel() {
    assert_eq!(top_mood(&[]), NO_ENTRIES_MOOD);
}

#[test]
fn most_frequent_mood_wins() {
    let entries = vec![
        entry_with_mood(1, "Happy"),
        entry_with_mood(2, "Sad"),
        entry_with_mood(3, "Happy"),
    ];

    assert_eq!(top_mood(&entries), "Happy");
}

#[test]
fn mood_ties_go_to_the_first_encountered() {
    let entries = vec![
        entry_with_mood(1, "Calm"),
        entry_with_mood(2, "Happy"),
        entry_with_mood(3, "Happy"),
        entry_with_mood(4, "Calm"),
    ];

    assert_eq!(top_mood(&entries), "Calm");
}

#[test]
fn default_mood_counts_like_any_other_label() {
    let entries = vec![
        JournalEntry::new(date(2024, 1, 1), "unset mood"),
        JournalEntry::new(date(2024, 1, 2), "unset mood"),
        entry_with_mood(3, "Happy"),
    ];

    assert_eq!(top_mood(&entries), DEFAULT_MOOD);
}

fn entry_with_tags(day: u32, tags: &str) -> JournalEntry {
    let mut entry = JournalEntry::new(date(2024, 1, day), "entry");
    entry.tags = tags.to_string();
    entry
}

fn entry_with_mood(day: u32, mood: &str) -> JournalEntry {
    let mut entry = JournalEntry::new(date(2024, 1, day), "entry");
    entry.primary_mood = mood.to_string();
    entry
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

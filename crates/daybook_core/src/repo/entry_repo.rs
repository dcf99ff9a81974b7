//! Entry store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the keyed one-entry-per-day persistence API over `entries`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `upsert` overwrites any entry sharing the same calendar date while
//!   preserving the stored row's uuid and `created_at`.
//! - Write paths call `JournalEntry::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::entry::{EntryId, EntryValidationError, JournalEntry};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    uuid,
    entry_date,
    title,
    content,
    primary_mood,
    secondary_mood_1,
    secondary_mood_2,
    tags,
    is_favorite,
    created_at,
    updated_at
FROM entries";

const REQUIRED_ENTRY_COLUMNS: &[&str] = &[
    "uuid",
    "entry_date",
    "title",
    "content",
    "primary_mood",
    "secondary_mood_1",
    "secondary_mood_2",
    "tags",
    "is_favorite",
    "created_at",
    "updated_at",
];

const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic store error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    NotFound(EntryId),
    InvalidData(String),
    /// Connection has not been migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: String,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed persistent collection of entries, one per calendar day.
///
/// Analytics code never talks to storage directly; it consumes snapshots
/// fetched through this contract, so tests can substitute an in-memory
/// fake with a fixed data set.
pub trait EntryStore {
    /// Returns every entry, newest entry date first.
    fn list_all(&self) -> RepoResult<Vec<JournalEntry>>;
    /// Returns the entry for the exact calendar date, if any.
    fn get_by_date(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>>;
    /// Inserts the entry, or overwrites the entry already stored for the
    /// same date. Returns the effective stable id.
    fn upsert(&self, entry: &JournalEntry) -> RepoResult<EntryId>;
    /// Deletes one entry by stable id.
    fn delete(&self, id: EntryId) -> RepoResult<()>;
    /// Deletes every entry.
    fn delete_all(&self) -> RepoResult<()>;
    /// Returns favorited entries, newest entry date first.
    fn list_favorites(&self) -> RepoResult<Vec<JournalEntry>>;
}

/// SQLite-backed entry store.
pub struct SqliteEntryStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryStore<'conn> {
    /// Constructs a store from a migrated, ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the `entries`
    ///   shape is incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EntryStore for SqliteEntryStore<'_> {
    fn list_all(&self) -> RepoResult<Vec<JournalEntry>> {
        collect_entries(
            self.conn,
            &format!("{ENTRY_SELECT_SQL} ORDER BY entry_date DESC;"),
        )
    }

    fn get_by_date(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE entry_date = ?1;"))?;

        let mut rows = stmt.query([date_to_db(date)])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }

        Ok(None)
    }

    fn upsert(&self, entry: &JournalEntry) -> RepoResult<EntryId> {
        entry.validate()?;

        // The stored row's identity wins over the incoming one, so the id
        // stays stable for the whole lifetime of a date's entry.
        if let Some(existing) = self.get_by_date(entry.entry_date)? {
            self.conn.execute(
                "UPDATE entries
                 SET
                    title = ?2,
                    content = ?3,
                    primary_mood = ?4,
                    secondary_mood_1 = ?5,
                    secondary_mood_2 = ?6,
                    tags = ?7,
                    is_favorite = ?8,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE uuid = ?1;",
                params![
                    existing.uuid.to_string(),
                    entry.title.as_str(),
                    entry.content.as_str(),
                    entry.primary_mood.as_str(),
                    entry.secondary_mood_1.as_deref(),
                    entry.secondary_mood_2.as_deref(),
                    entry.tags.as_str(),
                    bool_to_int(entry.is_favorite),
                ],
            )?;
            return Ok(existing.uuid);
        }

        self.conn.execute(
            "INSERT INTO entries (
                uuid,
                entry_date,
                title,
                content,
                primary_mood,
                secondary_mood_1,
                secondary_mood_2,
                tags,
                is_favorite
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                entry.uuid.to_string(),
                date_to_db(entry.entry_date),
                entry.title.as_str(),
                entry.content.as_str(),
                entry.primary_mood.as_str(),
                entry.secondary_mood_1.as_deref(),
                entry.secondary_mood_2.as_deref(),
                entry.tags.as_str(),
                bool_to_int(entry.is_favorite),
            ],
        )?;

        Ok(entry.uuid)
    }

    fn delete(&self, id: EntryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM entries;", [])?;
        Ok(())
    }

    fn list_favorites(&self) -> RepoResult<Vec<JournalEntry>> {
        collect_entries(
            self.conn,
            &format!("{ENTRY_SELECT_SQL} WHERE is_favorite = 1 ORDER BY entry_date DESC;"),
        )
    }
}

fn collect_entries(conn: &Connection, sql: &str) -> RepoResult<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut entries = Vec::new();

    while let Some(row) = rows.next()? {
        entries.push(parse_entry_row(row)?);
    }

    Ok(entries)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'entries'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("entries"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('entries');")?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_ENTRY_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "entries",
                column: (*column).to_string(),
            });
        }
    }

    Ok(())
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in entries.uuid"))
    })?;

    let date_text: String = row.get("entry_date")?;
    let entry_date = NaiveDate::parse_from_str(&date_text, ENTRY_DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in entries.entry_date"
        ))
    })?;

    let is_favorite = match row.get::<_, i64>("is_favorite")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_favorite value `{other}` in entries.is_favorite"
            )));
        }
    };

    let entry = JournalEntry {
        uuid,
        entry_date,
        title: row.get("title")?,
        content: row.get("content")?,
        primary_mood: row.get("primary_mood")?,
        secondary_mood_1: row.get("secondary_mood_1")?,
        secondary_mood_2: row.get("secondary_mood_2")?,
        tags: row.get("tags")?,
        is_favorite,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    entry.validate()?;
    Ok(entry)
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(ENTRY_DATE_FORMAT).to_string()
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

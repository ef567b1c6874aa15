//! NoteRepository trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{NewNote, Note, NoteId};
use crate::store::{NoteRepository, StoreError, StoreResult};
use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};
use log::debug;
use rusqlite::types::Type;
use rusqlite::{Row, params};

const SELECT_NOTES: &str = "SELECT id, title, content, created_at, updated_at, tags FROM notes";

// julianday() orders RFC 3339 and `YYYY-MM-DD HH:MM:SS` rows on one clock, but
// only to the millisecond; the raw text then orders same-format rows exactly.
// Ties fall back to the newest id so ordering is total.
const NEWEST_FIRST: &str = "ORDER BY julianday(updated_at) DESC, updated_at DESC, id DESC";

impl NoteRepository for SqliteStore {
    fn create(&mut self, draft: &NewNote) -> StoreResult<Note> {
        let conn = self.connection()?;
        let now = Utc::now();
        let stamp = encode_timestamp(now);

        conn.execute(
            "INSERT INTO notes (title, content, tags, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![draft.title, draft.content, draft.tags, stamp, stamp],
        )
        .map_err(StoreError::WriteFailed)?;

        let id = NoteId::new(conn.last_insert_rowid());
        debug!("created note {id}");

        Ok(Note::new(
            id,
            draft.title.as_str(),
            draft.content.as_str(),
            draft.tags.as_str(),
            now,
            now,
        ))
    }

    fn get_all(&self) -> StoreResult<Vec<Note>> {
        let conn = self.connection()?;
        let mut stmt = conn
            .prepare(&format!("{SELECT_NOTES} {NEWEST_FIRST}"))
            .map_err(StoreError::ReadFailed)?;

        let notes = stmt
            .query_map([], note_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(StoreError::ReadFailed)?;

        debug!("loaded {} notes", notes.len());
        Ok(notes)
    }

    fn get_by_id(&self, id: NoteId) -> StoreResult<Note> {
        let conn = self.connection()?;

        conn.query_row(
            &format!("{SELECT_NOTES} WHERE id = ?1"),
            [id.get()],
            note_from_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound { id },
            e => StoreError::ReadFailed(e),
        })
    }

    fn update(&mut self, note: &Note) -> StoreResult<Note> {
        let conn = self.connection()?;
        let id = note.id();

        // The clock may not have advanced since the snapshot was read.
        let now = Utc::now().max(note.updated_at() + Duration::nanoseconds(1));

        let created_at = conn
            .query_row(
                "UPDATE notes SET title = ?1, content = ?2, tags = ?3, updated_at = ?4
                 WHERE id = ?5
                 RETURNING created_at",
                params![
                    note.title(),
                    note.content(),
                    note.tags(),
                    encode_timestamp(now),
                    id.get()
                ],
                |row| timestamp_column(row, 0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound { id },
                e => StoreError::WriteFailed(e),
            })?;

        debug!("updated note {id}");
        Ok(note.touched(created_at, now))
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let conn = self.connection()?;
        let removed = conn
            .execute("DELETE FROM notes WHERE id = ?1", [id.get()])
            .map_err(StoreError::WriteFailed)?;

        debug!("deleted note {id} ({removed} row(s))");
        Ok(())
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Note>> {
        if query.is_empty() {
            return self.get_all();
        }

        let conn = self.connection()?;
        // instr() is a literal, case-sensitive substring test, so `%` and `_`
        // in the query carry no pattern meaning.
        let mut stmt = conn
            .prepare(&format!(
                "{SELECT_NOTES}
                 WHERE instr(title, ?1) > 0 OR instr(content, ?1) > 0 OR instr(tags, ?1) > 0
                 {NEWEST_FIRST}"
            ))
            .map_err(StoreError::ReadFailed)?;

        let notes = stmt
            .query_map([query], note_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(StoreError::ReadFailed)?;

        debug!("search {query:?} matched {} notes", notes.len());
        Ok(notes)
    }
}

impl SqliteStore {
    /// Returns the number of stored notes.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.connection()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .map_err(StoreError::ReadFailed)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

// ===========================================
// Row Mapping
// ===========================================

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note::new(
        NoteId::new(row.get(0)?),
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        timestamp_column(row, 3)?,
        timestamp_column(row, 4)?,
    ))
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    decode_timestamp(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

// ===========================================
// Timestamp Encoding
// ===========================================

/// Encodes a timestamp as fixed-width RFC 3339 text.
///
/// Nanosecond precision with a `Z` suffix keeps text order equal to time
/// order among encoded rows and makes the round trip exact.
pub(super) fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Decodes a stored timestamp.
///
/// Accepts RFC 3339 and the `YYYY-MM-DD HH:MM:SS` form SQLite's
/// `CURRENT_TIMESTAMP` default produces.
pub(super) fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|at| at.and_utc())
        })
}

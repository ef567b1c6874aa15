//! NoteRepository trait and error types.

use crate::domain::{NewNote, Note, NoteId};
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or initialised, or has been shut down.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// A read statement failed.
    #[error("read failed: {0}")]
    ReadFailed(#[source] rusqlite::Error),

    /// A write statement failed.
    #[error("write failed: {0}")]
    WriteFailed(#[source] rusqlite::Error),

    /// No note has the requested id.
    #[error("note not found: {id}")]
    NotFound { id: NoteId },
}

impl StoreError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// NoteRepository Trait
// ===========================================

/// Durable storage for notes.
///
/// Every method issues a single statement and is atomic only with respect to
/// that statement. Listing methods return notes ordered by `updated_at`,
/// most recently written first.
pub trait NoteRepository {
    /// Inserts a new note and returns it with its id and timestamps filled in.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    fn create(&mut self, draft: &NewNote) -> StoreResult<Note>;

    /// Returns every note. An empty store yields an empty vector.
    fn get_all(&self) -> StoreResult<Vec<Note>>;

    /// Returns the note with the given id, or `NotFound`.
    fn get_by_id(&self, id: NoteId) -> StoreResult<Note>;

    /// Overwrites title, content and tags of an existing note.
    ///
    /// Refreshes `updated_at` and leaves `created_at` untouched. Returns the
    /// stored snapshot, or `NotFound` if no row has `note.id()`.
    fn update(&mut self, note: &Note) -> StoreResult<Note>;

    /// Removes a note by id (idempotent).
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;

    /// Returns notes whose title, content or tags contain `query`.
    ///
    /// Matching is a case-sensitive literal substring test. An empty query
    /// returns the same sequence as [`get_all`](Self::get_all).
    fn search(&self, query: &str) -> StoreResult<Vec<Note>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        let err = StoreError::NotFound {
            id: NoteId::new(12),
        };
        assert_eq!(err.to_string(), "note not found: 12");
    }

    #[test]
    fn unavailable_message_includes_reason() {
        let err = StoreError::unavailable("store has been shut down");
        assert_eq!(
            err.to_string(),
            "storage unavailable: store has been shut down"
        );
    }

    #[test]
    fn read_failed_exposes_source() {
        use std::error::Error;

        let err = StoreError::ReadFailed(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("read failed:"));
    }
}

//! Row identifier assigned to a note by the store.

use std::fmt;

/// The identifier of a stored note.
///
/// Ids are assigned by the store's auto-increment primary key when a note is
/// created and never change afterwards. A `NoteId` is only ever obtained from
/// a prior read or create, so it is always positive for persisted notes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw row id.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

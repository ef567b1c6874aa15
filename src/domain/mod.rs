//! Core types: Note, NewNote, NoteId, and title derivation

mod note;
mod note_id;
mod title;

pub use note::{NewNote, Note};
pub use note_id::NoteId;
pub use title::{ELLIPSIS, MAX_TITLE_CHARS, UNTITLED, derive_title};

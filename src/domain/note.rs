//! The note record and the draft used to create one.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};

/// A persisted note.
///
/// Every `Note` value is a snapshot of a row in the store. Changing a note
/// means handing a revised copy back to the store, which returns a fresh
/// snapshot with the new `updated_at`.
///
/// # Invariants
/// - `id` is assigned by the store and never changes
/// - `created_at` is set once at creation
/// - `updated_at >= created_at`
///
/// # Examples
///
/// ```
/// use zettl::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::new(NoteId::new(1), "Groceries", "Buy milk", "notebook", now, now);
/// let revised = note.revised("Groceries", "Buy milk and eggs");
/// assert_eq!(revised.id(), note.id());
/// assert_eq!(revised.tags(), "notebook");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    tags: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note snapshot from its stored fields.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags: tags.into(),
            created_at,
            updated_at,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the free-form tag label.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last written.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy with a new title and body. Id, tags and timestamps are kept.
    pub fn revised(&self, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..self.clone()
        }
    }

    /// Returns a copy stamped with a new modification time.
    pub(crate) fn touched(&self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
            ..self.clone()
        }
    }

    /// Returns true if the title, body or tags contain `needle`, ignoring case.
    pub fn matches_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.title, &self.content, &self.tags]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// The fields supplied when creating a note.
///
/// The store fills in the id and both timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl NewNote {
    /// Creates a draft with an empty tag label.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: String::new(),
        }
    }

    /// Sets the tag label.
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

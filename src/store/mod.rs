//! Note persistence: repository trait, schema, and the SQLite store

mod repository;
mod schema;
mod sqlite;

pub use repository::{NoteRepository, StoreError, StoreResult};
pub use schema::create_schema;
pub use sqlite::SqliteStore;

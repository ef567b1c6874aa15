//! SQLite-backed note store implementation.

mod connection;
mod repo_impl;


use rusqlite::Connection;
use std::path::PathBuf;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns the single database connection for the lifetime of the process. The
/// connection is opened once by [`SqliteStore::open`] and released either by
/// [`SqliteStore::shutdown`] or when the store is dropped. After shutdown every
/// operation fails with `StoreError::Unavailable`.
pub struct SqliteStore {
    conn: Option<Connection>,
    location: Option<PathBuf>,
}

//! Connection lifecycle for SqliteStore.

use super::SqliteStore;
use crate::store::{StoreError, StoreResult, create_schema};
use log::{debug, info};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl SqliteStore {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory database with the notes schema.
    ///
    /// Nothing is persisted; useful for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::unavailable(format!("cannot open in-memory database: {e}")))?;
        create_schema(&conn)
            .map_err(|e| StoreError::unavailable(format!("cannot create schema: {e}")))?;
        Ok(Self {
            conn: Some(conn),
            location: None,
        })
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates the database file at `path`.
    ///
    /// Creates parent directories if they don't exist and ensures the notes
    /// table exists. Any failure is reported as `StoreError::Unavailable`.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            debug!("creating database directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::unavailable(format!(
                    "cannot create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let conn = Connection::open(path).map_err(|e| {
            StoreError::unavailable(format!("cannot open {}: {e}", path.display()))
        })?;
        create_schema(&conn).map_err(|e| {
            StoreError::unavailable(format!(
                "cannot initialise schema in {}: {e}",
                path.display()
            ))
        })?;

        info!("opened note store at {}", path.display());
        Ok(Self {
            conn: Some(conn),
            location: Some(path.to_path_buf()),
        })
    }

    // ===========================================
    // Shutdown
    // ===========================================

    /// Closes the connection.
    ///
    /// Intended to be called once at exit. Calling it again, or calling any
    /// other operation afterwards, fails with `StoreError::Unavailable`.
    pub fn shutdown(&mut self) -> StoreResult<()> {
        let conn = self.conn.take().ok_or_else(Self::closed)?;
        conn.close()
            .map_err(|(_, e)| StoreError::unavailable(format!("cannot close database: {e}")))?;
        info!("closed note store");
        Ok(())
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns true until [`shutdown`](Self::shutdown) succeeds.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Returns the database file path, or `None` for an in-memory store.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Returns the live connection, or `Unavailable` after shutdown.
    pub(crate) fn connection(&self) -> StoreResult<&Connection> {
        self.conn.as_ref().ok_or_else(Self::closed)
    }

    fn closed() -> StoreError {
        StoreError::unavailable("store has been shut down")
    }
}

//! SQLite schema creation for the note store.

use rusqlite::Connection;

/// Creates the database schema for the note store.
///
/// It is idempotent - calling it on an existing database is safe and leaves
/// stored rows alone.
///
/// # Tables Created
/// - `notes` - one row per note
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            tags TEXT DEFAULT ''
        );",
    )?;

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_notes_updated_at ON notes(updated_at);")?;

    Ok(())
}

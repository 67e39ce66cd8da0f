//! SQLite schema creation for the note store.

use rusqlite::Connection;

/// Creates the `notes` table and its indexes.
///
/// Idempotent: every statement is `IF NOT EXISTS`, so calling it on an
/// existing database changes nothing and keeps all rows.
///
/// `AUTOINCREMENT` keeps ids from being reused after the newest note is
/// deleted. `created_at` is filled by SQLite as `YYYY-MM-DD HH:MM:SS` UTC.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            body TEXT,
            title TEXT,
            rating INTEGER NOT NULL CHECK (rating BETWEEN -1 AND 10)
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_rating ON notes(rating);
         CREATE INDEX IF NOT EXISTS idx_notes_title ON notes(title);",
    )?;

    Ok(())
}

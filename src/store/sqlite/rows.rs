//! Row decoding shared by the query methods.

use crate::domain::{Note, NoteId, Rating};
use crate::store::{StoreError, StoreResult};
use chrono::NaiveDateTime;
use rusqlite::Row;

/// Column list matching the field order read by `NoteRow::read`.
pub(super) const NOTE_COLUMNS: &str = "id, created_at, body, title, rating";

/// Format SQLite uses for `CURRENT_TIMESTAMP`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw column values of a `notes` row, before validation.
pub(super) struct NoteRow {
    id: i64,
    created_at: String,
    body: Option<String>,
    title: Option<String>,
    rating: i64,
}

impl NoteRow {
    pub(super) fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            created_at: row.get(1)?,
            body: row.get(2)?,
            title: row.get(3)?,
            rating: row.get(4)?,
        })
    }

    pub(super) fn into_note(self) -> StoreResult<Note> {
        let created_at = NaiveDateTime::parse_from_str(&self.created_at, TIMESTAMP_FORMAT)
            .map_err(|e| StoreError::InvalidData {
                column: "created_at",
                reason: format!("'{}': {}", self.created_at, e),
            })?
            .and_utc();

        let rating = Rating::new(self.rating).map_err(|e| StoreError::InvalidData {
            column: "rating",
            reason: e.to_string(),
        })?;

        Ok(Note::new(
            NoteId::new(self.id),
            created_at,
            self.body,
            self.title,
            rating,
        ))
    }
}

/// Runs a note query and decodes every row.
pub(super) fn query_notes(
    conn: &rusqlite::Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> StoreResult<Vec<Note>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, NoteRow::read)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    rows.into_iter().map(NoteRow::into_note).collect()
}

//! NoteRepository trait implementation for SqliteStore.

use super::SqliteStore;
use super::rows::{NOTE_COLUMNS, NoteRow, query_notes};
use crate::domain::{MatchKey, NewNote, Note, NoteId, RatingUpdate, SortOrder};
use crate::search::{TruncationPolicy, rank_titles};
use crate::store::{NoteRepository, ScoredNote, StoreError, StoreResult, create_schema};
use rusqlite::{OptionalExtension, params};
use tracing::{debug, info};

impl NoteRepository for SqliteStore {
    fn initialize(&mut self) -> StoreResult<()> {
        create_schema(&self.conn)?;
        Ok(())
    }

    fn create(&mut self, note: &NewNote) -> StoreResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (body, title, rating) VALUES (?1, ?2, ?3)",
            params![note.body(), note.title(), note.rating().get()],
        )?;
        let id = NoteId::new(self.conn.last_insert_rowid());
        info!(%id, rating = %note.rating(), "created note");
        Ok(id)
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                [id.get()],
                NoteRow::read,
            )
            .optional()?;
        row.map(NoteRow::into_note).transpose()
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", [id.get()])?;
        if removed == 0 {
            debug!(%id, "delete matched no note");
        } else {
            info!(%id, "deleted note");
        }
        Ok(())
    }

    fn update_rating(&mut self, update: &RatingUpdate) -> StoreResult<()> {
        let key = update.match_key().ok_or(StoreError::MissingMatchKey)?;
        let rating = update.rating().get();

        // Column names are fixed here; only the key is user input.
        let updated = match key {
            MatchKey::Body(body) => self.conn.execute(
                "UPDATE notes SET rating = ?1 WHERE body = ?2",
                params![rating, body],
            )?,
            MatchKey::Title(title) => self.conn.execute(
                "UPDATE notes SET rating = ?1 WHERE title = ?2",
                params![rating, title],
            )?,
        };
        info!(?key, rating, updated, "updated rating");
        Ok(())
    }

    fn list_sorted(&self, order: SortOrder) -> StoreResult<Vec<Note>> {
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes ORDER BY rating {}, id ASC",
            order.as_sql()
        );
        let notes = query_notes(&self.conn, &sql, [])?;
        debug!(count = notes.len(), ?order, "listed notes");
        Ok(notes)
    }

    fn search(&self, term: &str, policy: TruncationPolicy) -> StoreResult<Vec<ScoredNote>> {
        // 1. Collect candidate titles (null titles never match)
        let mut stmt = self
            .conn
            .prepare("SELECT title FROM notes WHERE title IS NOT NULL ORDER BY id")?;
        let titles: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;

        // 2. Rank distinct titles and apply the truncation policy
        let ranked = rank_titles(term, titles.iter().map(String::as_str), policy);
        debug!(
            term,
            candidates = titles.len(),
            kept = ranked.len(),
            ?policy,
            "ranked titles"
        );

        // 3. Fetch the notes behind each kept title, best title first
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE title = ?1 ORDER BY id");
        let mut results = Vec::new();
        for hit in ranked {
            for note in query_notes(&self.conn, &sql, [&hit.title])? {
                results.push(ScoredNote::new(note, hit.score));
            }
        }
        Ok(results)
    }
}

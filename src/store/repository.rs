//! NoteRepository trait and result types.

use crate::domain::{NewNote, Note, NoteId, RatingUpdate, SortOrder};
use crate::search::TruncationPolicy;
use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A rating update named neither a body nor a title to match on.
    #[error("no match key given: a rating update needs a body or a title")]
    MissingMatchKey,

    /// A stored row could not be decoded.
    #[error("invalid {column} in database: {reason}")]
    InvalidData {
        column: &'static str,
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns true when retrying the same operation may succeed.
    ///
    /// Only a busy or locked database is retryable. Every other storage
    /// failure is fatal for the operation, and validation errors will fail
    /// the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// ScoredNote Type
// ===========================================

/// A search hit: a note and how closely its title matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredNote {
    note: Note,
    score: u8,
}

impl ScoredNote {
    pub fn new(note: Note, score: u8) -> Self {
        Self { note, score }
    }

    /// Returns the matched note.
    pub fn note(&self) -> &Note {
        &self.note
    }

    /// Returns the title similarity in `0..=100` (higher is closer).
    pub fn score(&self) -> u8 {
        self.score
    }
}

// ===========================================
// NoteRepository Trait
// ===========================================

/// Repository trait for stored notes.
///
/// Every operation is a single statement, or a read followed by reads;
/// none spans a transaction.
pub trait NoteRepository {
    /// Creates the backing table if missing (idempotent).
    fn initialize(&mut self) -> StoreResult<()>;

    /// Stores a new note and returns its id.
    fn create(&mut self, note: &NewNote) -> StoreResult<NoteId>;

    /// Retrieves a single note by id.
    fn get(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Removes a note by id (idempotent).
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;

    /// Sets the rating of every note whose body (or, without a body key,
    /// title) equals the key exactly.
    ///
    /// Fails with `StoreError::MissingMatchKey` when the update has no key.
    /// Matching zero notes is not an error.
    fn update_rating(&mut self, update: &RatingUpdate) -> StoreResult<()>;

    /// Lists every note ordered by rating.
    fn list_sorted(&self, order: SortOrder) -> StoreResult<Vec<Note>>;

    /// Fuzzy title search, ranked by similarity (highest first).
    fn search(&self, term: &str, policy: TruncationPolicy) -> StoreResult<Vec<ScoredNote>>;
}

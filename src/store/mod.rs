//! Note storage: repository trait, SQLite schema and implementation

mod repository;
mod schema;
mod sqlite;

pub use repository::{NoteRepository, ScoredNote, StoreError, StoreResult};
pub use schema::create_schema;
pub use sqlite::SqliteStore;

//! SQLite-backed note store implementation.

mod connection;
mod repo_impl;
mod rows;


use rusqlite::Connection;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns a single connection. Mutating operations take `&mut self`, so
/// writes through one store are never concurrent.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

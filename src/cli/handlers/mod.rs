//! Command handlers for the CLI.
//!
//! Each handler opens the store, delegates to a `run_*` function that
//! works against any `NoteRepository` and writer, and prints to stdout.

mod add;
mod completions;
mod list;
mod rate;
mod remove;
mod search;


use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::domain::Note;
use crate::store::SqliteStore;

// Re-export public items
pub use add::{handle_add, run_add};
pub use completions::handle_completions;
pub use list::{handle_list, render_notes};
pub use rate::{handle_rate, run_rate};
pub use remove::{handle_remove, run_remove};
pub use search::{handle_search, render_hits};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the note store, creating the database file if needed.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

const TITLE_WIDTH: usize = 30;
const BODY_WIDTH: usize = 40;

/// Writes the table header, optionally with a leading score column.
pub(crate) fn write_table_header(out: &mut impl Write, with_score: bool) -> Result<()> {
    if with_score {
        write!(out, "{:>5}  ", "Score")?;
    }
    writeln!(
        out,
        "{:>6}  {:<19}  {:>6}  {:<tw$}  {}",
        "ID",
        "Created",
        "Rating",
        "Title",
        "Body",
        tw = TITLE_WIDTH
    )?;
    if with_score {
        write!(out, "{}  ", "-".repeat(5))?;
    }
    writeln!(
        out,
        "{}  {}  {}  {}  {}",
        "-".repeat(6),
        "-".repeat(19),
        "-".repeat(6),
        "-".repeat(TITLE_WIDTH),
        "-".repeat(BODY_WIDTH)
    )?;
    Ok(())
}

/// Writes one table row, optionally prefixed by a score.
pub(crate) fn write_table_row(out: &mut impl Write, note: &Note, score: Option<u8>) -> Result<()> {
    if let Some(score) = score {
        write!(out, "{:>5}  ", score)?;
    }
    let title = truncate_str(note.title().unwrap_or("-"), TITLE_WIDTH);
    let body = truncate_str(note.body().unwrap_or("-"), BODY_WIDTH);
    writeln!(
        out,
        "{:>6}  {:<19}  {:>6}  {:<tw$}  {}",
        note.id(),
        note.created_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        note.rating(),
        title,
        body,
        tw = TITLE_WIDTH
    )?;
    Ok(())
}

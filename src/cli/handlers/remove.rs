//! Remove command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::open_store;
use crate::cli::RmArgs;
use crate::store::NoteRepository;

pub fn handle_remove(args: &RmArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    run_remove(&mut store, args, &mut std::io::stdout().lock())
}

/// Deletes the note with the given id; a missing id is not an error.
pub fn run_remove(
    store: &mut impl NoteRepository,
    args: &RmArgs,
    out: &mut impl Write,
) -> Result<()> {
    store
        .delete(args.id)
        .with_context(|| format!("failed to delete note {}", args.id))?;
    writeln!(out, "Deleted note {}", args.id)?;
    Ok(())
}

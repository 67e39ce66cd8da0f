//! Add command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::open_store;
use crate::cli::AddArgs;
use crate::domain::{NewNote, NoteId};
use crate::store::NoteRepository;

pub fn handle_add(args: &AddArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    run_add(&mut store, args, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Stores the note described by `args` and reports its id.
pub fn run_add(
    store: &mut impl NoteRepository,
    args: &AddArgs,
    out: &mut impl Write,
) -> Result<NoteId> {
    let note = NewNote::new(args.body.as_deref(), args.title.as_deref(), args.rating);
    let id = store.create(&note).context("failed to add note")?;
    writeln!(out, "Added note {}", id)?;
    Ok(id)
}

//! List command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::{open_store, write_table_header, write_table_row};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Note, SortOrder};
use crate::store::NoteRepository;

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;

    let order = if args.asc {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let notes = store
        .list_sorted(order)
        .with_context(|| "failed to list notes")?;

    render_notes(&mut std::io::stdout().lock(), &notes, args.format)
}

/// Writes notes as a table or as JSON.
pub fn render_notes(out: &mut impl Write, notes: &[Note], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "No notes found.")?;
            } else {
                write_table_header(out, false)?;
                for note in notes {
                    write_table_row(out, note, None)?;
                }
                writeln!(out)?;
                writeln!(out, "{} note(s)", notes.len())?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

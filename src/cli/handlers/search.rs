//! Search command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::{open_store, write_table_header, write_table_row};
use crate::cli::SearchArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, SearchListing};
use crate::store::{NoteRepository, ScoredNote};

pub fn handle_search(args: &SearchArgs, db_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(db_path)?;

    let policy = config.truncation(args.half_cut);
    let hits = store
        .search(&args.term, policy)
        .with_context(|| format!("search failed for term: {}", args.term))?;

    render_hits(&mut std::io::stdout().lock(), &hits, args.format)
}

/// Writes ranked search hits as a table or as JSON.
pub fn render_hits(out: &mut impl Write, hits: &[ScoredNote], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if hits.is_empty() {
                writeln!(out, "No matching notes found.")?;
            } else {
                write_table_header(out, true)?;
                for hit in hits {
                    write_table_row(out, hit.note(), Some(hit.score()))?;
                }
                writeln!(out)?;
                writeln!(out, "{} result(s)", hits.len())?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<SearchListing> = hits.iter().map(SearchListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

//! Rate command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::open_store;
use crate::cli::RateArgs;
use crate::domain::{MatchKey, RatingUpdate};
use crate::store::NoteRepository;

pub fn handle_rate(args: &RateArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    run_rate(&mut store, args, &mut std::io::stdout().lock())
}

/// Applies the rating to every note matching the body or title key.
pub fn run_rate(
    store: &mut impl NoteRepository,
    args: &RateArgs,
    out: &mut impl Write,
) -> Result<()> {
    let update = RatingUpdate::new(args.rating, args.body.as_deref(), args.title.as_deref());
    store
        .update_rating(&update)
        .context("failed to update rating")?;

    match update.match_key() {
        Some(MatchKey::Body(body)) => {
            writeln!(out, "Set rating {} on notes with body \"{}\"", args.rating, body)?
        }
        Some(MatchKey::Title(title)) => {
            writeln!(out, "Set rating {} on notes titled \"{}\"", args.rating, title)?
        }
        None => {}
    }
    Ok(())
}

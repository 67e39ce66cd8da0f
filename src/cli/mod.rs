//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{NoteId, Rating};
use output::OutputFormat;

/// ratenote - rate and fuzzy-find short notes
#[derive(Parser, Debug)]
#[command(name = "ratenote", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note
    Add(AddArgs),

    /// Delete a note by id
    Rm(RmArgs),

    /// Change the rating of notes matching a body or title
    Rate(RateArgs),

    /// List notes sorted by rating
    #[command(name = "ls")]
    List(ListArgs),

    /// Fuzzy-search notes by title
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text
    #[arg(short, long)]
    pub body: Option<String>,

    /// Note title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Rating from -1 to 10 (-1 means not consumed yet)
    #[arg(short, long, default_value = "-1", allow_negative_numbers = true)]
    pub rating: Rating,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Id of the note to delete
    pub id: NoteId,
}

/// Arguments for the `rate` command
#[derive(Parser, Debug)]
pub struct RateArgs {
    /// New rating from -1 to 10
    #[arg(allow_negative_numbers = true)]
    pub rating: Rating,

    /// Match notes whose body equals this text (takes precedence over --title)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Match notes whose title equals this text
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Sort by ascending rating instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Title to search for
    pub term: String,

    /// Keep only the better-matching half of titles
    #[arg(long)]
    pub half_cut: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

//! ratenote - rate and fuzzy-find short notes

pub mod cli;
pub mod domain;
pub mod search;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_list, handle_rate, handle_remove, handle_search,
    },
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    debug!(db = %db_path.display(), "resolved database path");

    match &cli.command {
        Command::Add(args) => handle_add(args, &db_path),
        Command::Rm(args) => handle_remove(args, &db_path),
        Command::Rate(args) => handle_rate(args, &db_path),
        Command::List(args) => handle_list(args, &db_path),
        Command::Search(args) => handle_search(args, &db_path, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

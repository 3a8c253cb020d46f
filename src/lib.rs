//! mintmemo - local-first Markdown notes with tags and full-text search

pub mod cli;
pub mod domain;
pub mod export;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_export, handle_list, handle_new, handle_pin,
        handle_reindex, handle_remove, handle_search, handle_show, handle_tags,
    },
    logging::init_logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let settings = config.settings(cli.db.as_ref())?;
    debug!(db = %settings.db_path.display(), "resolved settings");

    match &cli.command {
        Command::New(args) => handle_new(args, &settings),
        Command::Edit(args) => handle_edit(args, &settings),
        Command::Remove(args) => handle_remove(args, &settings),
        Command::Pin(args) => handle_pin(args, &settings),
        Command::Show(args) => handle_show(args, &settings),
        Command::List(args) => handle_list(args, &settings),
        Command::Search(args) => handle_search(args, &settings),
        Command::Tags(args) => handle_tags(args, &settings),
        Command::Export(args) => handle_export(args, &settings),
        Command::Reindex => handle_reindex(&settings),
        Command::Completions(args) => handle_completions(args),
    }
}

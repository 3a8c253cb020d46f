//! Search command handler.

use anyhow::{Context, Result};
use std::io::Write;

use super::list::write_summaries;
use super::open_store;
use crate::cli::SearchArgs;
use crate::cli::config::Settings;
use crate::cli::output::{Output, OutputFormat};
use crate::store::NoteRepository;

pub fn handle_search(args: &SearchArgs, settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    run_search(&store, args, settings.search_limit, &mut std::io::stdout().lock())
}

pub(crate) fn run_search<R: NoteRepository, W: Write>(
    repo: &R,
    args: &SearchArgs,
    default_limit: usize,
    out: &mut W,
) -> Result<()> {
    let query = args.query.join(" ");
    let limit = args.limit.unwrap_or(default_limit);
    let results = repo
        .search(&query, limit)
        .with_context(|| format!("search failed for '{query}'"))?;

    match args.format {
        OutputFormat::Human => {
            if results.is_empty() {
                writeln!(out, "No notes match '{query}'.")?;
            } else {
                write_summaries(out, &results)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(&results))?)?;
        }
    }

    Ok(())
}

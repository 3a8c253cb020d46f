//! List and tags command handlers.

use anyhow::{Context, Result};
use std::io::Write;

use super::{format_time, open_store, tag_list, truncate_str};
use crate::cli::config::Settings;
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{ListArgs, TagsArgs};
use crate::domain::NoteSummary;
use crate::store::NoteRepository;

const TITLE_WIDTH: usize = 48;

pub fn handle_list(args: &ListArgs, settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    run_list(&store, args, settings.list_limit, &mut std::io::stdout().lock())
}

pub(crate) fn run_list<R: NoteRepository, W: Write>(
    repo: &R,
    args: &ListArgs,
    default_limit: usize,
    out: &mut W,
) -> Result<()> {
    let limit = args.limit.unwrap_or(default_limit);
    let notes = repo
        .list(args.tag.as_deref(), limit)
        .context("failed to list notes")?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "No notes found.")?;
            } else {
                write_summaries(out, &notes)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(&notes))?)?;
        }
    }

    Ok(())
}

/// Prints summaries as a table with excerpt and tag lines under each row.
pub(super) fn write_summaries<W: Write>(out: &mut W, notes: &[NoteSummary]) -> Result<()> {
    writeln!(
        out,
        "  {:>6}  {:<width$}  {:>16}",
        "ID",
        "Title",
        "Updated",
        width = TITLE_WIDTH
    )?;
    writeln!(
        out,
        "  {:>6}  {:<width$}  {:>16}",
        "------",
        "-".repeat(TITLE_WIDTH),
        "----------------",
        width = TITLE_WIDTH
    )?;

    for note in notes {
        let marker = if note.pinned { '*' } else { ' ' };
        writeln!(
            out,
            "{} {:>6}  {:<width$}  {:>16}",
            marker,
            format!("#{}", note.id),
            truncate_str(&note.title, TITLE_WIDTH),
            format_time(&note.updated_at),
            width = TITLE_WIDTH
        )?;
        if !note.excerpt.is_empty() {
            writeln!(out, "{:>10}{}", "", note.excerpt)?;
        }
        if !note.tags.is_empty() {
            writeln!(out, "{:>10}tags: {}", "", tag_list(&note.tags))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} note(s)", notes.len())?;
    Ok(())
}

pub fn handle_tags(args: &TagsArgs, settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    run_tags(&store, args, &mut std::io::stdout().lock())
}

pub(crate) fn run_tags<R: NoteRepository, W: Write>(
    repo: &R,
    args: &TagsArgs,
    out: &mut W,
) -> Result<()> {
    let tags = repo.list_tags().context("failed to list tags")?;

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                writeln!(out, "No tags found.")?;
            } else {
                for tag in &tags {
                    writeln!(out, "{:<32}  {:>5}", tag.name(), tag.count())?;
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags.iter().map(TagListing::from).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listings))?)?;
        }
    }

    Ok(())
}

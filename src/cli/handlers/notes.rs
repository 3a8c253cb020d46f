//! Handlers for commands that act on a single note.

use anyhow::{Context, Result, bail};
use std::io::Write;

use super::{collect_tags, format_time, open_store, read_content, require_note, tag_list};
use crate::cli::config::Settings;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{EditArgs, NewArgs, PinArgs, RemoveArgs, ShowArgs};
use crate::domain::NoteId;
use crate::export::markdown_to_html;
use crate::store::NoteRepository;

pub fn handle_new(args: &NewArgs, settings: &Settings) -> Result<()> {
    let content = read_content(args.content.as_deref(), args.file.as_deref())?.unwrap_or_default();
    let mut store = open_store(settings)?;
    run_new(&mut store, args, &content, &mut std::io::stdout().lock())?;
    Ok(())
}

pub(crate) fn run_new<R, W>(repo: &mut R, args: &NewArgs, content: &str, out: &mut W) -> Result<NoteId>
where
    R: NoteRepository,
    W: Write,
{
    let tags = collect_tags(&args.tags);
    let id = repo
        .create(&args.title, content, &tags)
        .context("failed to create note")?;
    writeln!(out, "Created note #{id}")?;
    Ok(id)
}

pub fn handle_edit(args: &EditArgs, settings: &Settings) -> Result<()> {
    let content = read_content(args.content.as_deref(), args.file.as_deref())?;
    let mut store = open_store(settings)?;
    run_edit(&mut store, args, content, &mut std::io::stdout().lock())
}

/// Applies the given changes; fields left out keep their stored values.
pub(crate) fn run_edit<R, W>(
    repo: &mut R,
    args: &EditArgs,
    content: Option<String>,
    out: &mut W,
) -> Result<()>
where
    R: NoteRepository,
    W: Write,
{
    if args.title.is_none() && content.is_none() && args.tags.is_empty() && !args.clear_tags {
        bail!("nothing to change: pass --title, --content, --file, --tags or --clear-tags");
    }

    let note = require_note(repo, args.id)?;

    let title = args.title.as_deref().unwrap_or(&note.title);
    let content = content.as_deref().unwrap_or(&note.content);
    let tags = if args.clear_tags {
        Vec::new()
    } else if args.tags.is_empty() {
        note.tags.clone()
    } else {
        collect_tags(&args.tags)
    };

    repo.update(args.id, title, content, &tags)
        .with_context(|| format!("failed to update note #{}", args.id))?;
    writeln!(out, "Updated note #{}", args.id)?;
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, settings: &Settings) -> Result<()> {
    let mut store = open_store(settings)?;
    run_remove(&mut store, args, &mut std::io::stdout().lock())
}

pub(crate) fn run_remove<R: NoteRepository, W: Write>(
    repo: &mut R,
    args: &RemoveArgs,
    out: &mut W,
) -> Result<()> {
    let note = require_note(repo, args.id)?;
    repo.delete(args.id)
        .with_context(|| format!("failed to delete note #{}", args.id))?;
    writeln!(out, "Deleted note #{}: {}", note.id, note.title)?;
    Ok(())
}

pub fn handle_pin(args: &PinArgs, settings: &Settings) -> Result<()> {
    let mut store = open_store(settings)?;
    run_pin(&mut store, args, &mut std::io::stdout().lock())
}

pub(crate) fn run_pin<R: NoteRepository, W: Write>(
    repo: &mut R,
    args: &PinArgs,
    out: &mut W,
) -> Result<()> {
    require_note(repo, args.id)?;
    repo.toggle_pin(args.id)
        .with_context(|| format!("failed to toggle pin on note #{}", args.id))?;

    let note = require_note(repo, args.id)?;
    let verb = if note.pinned { "Pinned" } else { "Unpinned" };
    writeln!(out, "{verb} note #{}", note.id)?;
    Ok(())
}

pub fn handle_show(args: &ShowArgs, settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    run_show(&store, args, &mut std::io::stdout().lock())
}

pub(crate) fn run_show<R: NoteRepository, W: Write>(
    repo: &R,
    args: &ShowArgs,
    out: &mut W,
) -> Result<()> {
    let note = require_note(repo, args.id)?;

    if args.html {
        write!(out, "{}", markdown_to_html(&note.content))?;
        return Ok(());
    }

    match args.format.unwrap_or_default() {
        OutputFormat::Human => {
            writeln!(out, "# {}", note.title)?;
            writeln!(out)?;

            let pinned = if note.pinned { "  [pinned]" } else { "" };
            writeln!(
                out,
                "ID: {}  Created: {}  Updated: {}{}",
                note.id,
                format_time(&note.created_at),
                format_time(&note.updated_at),
                pinned
            )?;

            if !note.tags.is_empty() {
                writeln!(out, "Tags: {}", tag_list(&note.tags))?;
            }

            writeln!(out)?;

            if !note.content.is_empty() {
                writeln!(out, "{}", note.content)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(&note))?)?;
        }
    }

    Ok(())
}

//! Export and reindex command handlers.

use anyhow::{Context, Result};
use std::io::Write;

use super::open_store;
use crate::cli::ExportArgs;
use crate::cli::config::Settings;
use crate::export::{export_to_file, write_export};
use crate::store::NoteRepository;

pub fn handle_export(args: &ExportArgs, settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    run_export(&store, args, &mut std::io::stdout().lock())
}

/// Writes every note as JSON, to `--output` or to `out`.
pub(crate) fn run_export<R: NoteRepository, W: Write>(
    repo: &R,
    args: &ExportArgs,
    out: &mut W,
) -> Result<()> {
    let notes = repo.export_all().context("failed to read notes for export")?;
    let count = notes.len();

    match &args.output {
        Some(path) => {
            export_to_file(path, notes)
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            writeln!(out, "Exported {count} note(s) to {}", path.display())?;
        }
        None => {
            write_export(&mut *out, notes).context("failed to serialize export")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

pub fn handle_reindex(settings: &Settings) -> Result<()> {
    let mut store = open_store(settings)?;
    run_reindex(&mut store, &mut std::io::stdout().lock())
}

pub(crate) fn run_reindex<R: NoteRepository, W: Write>(repo: &mut R, out: &mut W) -> Result<()> {
    repo.rebuild_index()
        .context("failed to rebuild search index")?;
    writeln!(out, "Rebuilt search index")?;
    Ok(())
}

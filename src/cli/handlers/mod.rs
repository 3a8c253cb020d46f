//! Command handlers for the CLI.
//!
//! Each `handle_*` function opens the store named by the resolved
//! [`Settings`] and delegates to a `run_*` function that works against any
//! [`NoteRepository`] and writer, which is what the unit tests drive.

mod completions;
mod export;
mod list;
mod notes;
mod search;


use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use std::io::Read;
use std::path::Path;

use crate::cli::config::Settings;
use crate::domain::{Note, NoteId, Tag, normalize_tags};
use crate::store::{NoteRepository, SqliteStore};

// Re-export public items
pub use completions::handle_completions;
pub use export::{handle_export, handle_reindex};
pub use list::{handle_list, handle_tags};
pub use notes::{handle_edit, handle_new, handle_pin, handle_remove, handle_show};
pub use search::handle_search;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the note database named by the settings.
pub(crate) fn open_store(settings: &Settings) -> Result<SqliteStore> {
    SqliteStore::open(&settings.db_path)
        .with_context(|| format!("failed to open database at {}", settings.db_path.display()))
}

/// Fetches a note, turning a missing id into an error.
pub(crate) fn require_note<R: NoteRepository>(repo: &R, id: NoteId) -> Result<Note> {
    repo.get(id)
        .with_context(|| format!("failed to load note #{id}"))?
        .ok_or_else(|| anyhow!("note not found: #{id}"))
}

/// Resolves note content from `--content` or `--file` (`-` reads stdin).
pub(crate) fn read_content(content: Option<&str>, file: Option<&Path>) -> Result<Option<String>> {
    if let Some(content) = content {
        return Ok(Some(content.to_string()));
    }
    let Some(path) = file else {
        return Ok(None);
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read content from stdin")?;
        return Ok(Some(buf));
    }

    std::fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("failed to read content file: {}", path.display()))
}

/// Normalizes every `-t/--tags` value as one comma separated list.
pub(crate) fn collect_tags(raw: &[String]) -> Vec<Tag> {
    normalize_tags(&raw.join(","))
}

/// Joins tag names for display.
pub(crate) fn tag_list(tags: &[Tag]) -> String {
    tags.iter().map(Tag::as_str).collect::<Vec<_>>().join(", ")
}

pub(crate) fn format_time(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

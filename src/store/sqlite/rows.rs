//! Typed mapping between `notes` rows and domain structs.

use crate::domain::{Note, NoteId, Tag};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

/// Column list matching [`NoteRow::from_row`], qualified with the `n` alias.
pub(super) const NOTE_COLUMNS: &str =
    "n.id, n.title, n.content, n.pinned, n.created_at, n.updated_at";

/// A `notes` row before its timestamps are parsed and its tags attached.
pub(super) struct NoteRow {
    pub(super) id: NoteId,
    title: String,
    content: String,
    pinned: bool,
    created_at: String,
    updated_at: String,
}

impl NoteRow {
    /// Reads the columns listed in [`NOTE_COLUMNS`], in order.
    pub(super) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            pinned: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    pub(super) fn into_note(self, tags: Vec<Tag>) -> StoreResult<Note> {
        Ok(Note {
            id: self.id,
            created_at: parse_timestamp(&self.created_at, "created_at", self.id)?,
            updated_at: parse_timestamp(&self.updated_at, "updated_at", self.id)?,
            title: self.title,
            content: self.content,
            pinned: self.pinned,
            tags,
        })
    }
}

/// Formats a timestamp for storage: RFC 3339, whole seconds, `Z` suffix.
pub(super) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_timestamp(raw: &str, column: &str, id: NoteId) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            StoreError::InvalidRow(format!("note {id}: invalid {column} '{raw}': {e}"))
        })
}

//! NoteRepository trait and result types.

use crate::domain::{Note, NoteId, NoteSummary, Tag};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
///
/// A failed operation has already been rolled back by the time one of these
/// reaches the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred (constraint violation, I/O, lock contention).
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be mapped into its typed form.
    #[error("invalid row: {0}")]
    InvalidRow(String),

    /// An I/O error occurred while preparing the database location.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// TagWithCount Type
// ===========================================

/// A tag with the number of notes referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagWithCount {
    tag: Tag,
    count: u32,
}

impl TagWithCount {
    /// Creates a new TagWithCount.
    pub fn new(tag: Tag, count: u32) -> Self {
        Self { tag, count }
    }

    /// Returns the tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        self.tag.as_str()
    }

    /// Returns the count of notes with this tag (0 for unused tags).
    pub fn count(&self) -> u32 {
        self.count
    }
}

// ===========================================
// NoteRepository Trait
// ===========================================

/// Repository of notes, their tags, and the full-text search index.
///
/// Every operation runs in its own transaction: it either commits entirely
/// or leaves the store unchanged.
///
/// Mutations addressed at an ID that does not exist (`update`, `delete`,
/// `toggle_pin`) are silent no-ops. Callers that need "not found" semantics
/// check with [`get`](Self::get) first.
pub trait NoteRepository {
    /// Creates a note and returns its identifier.
    ///
    /// The title is trimmed and defaults to "Untitled" when blank. Both
    /// timestamps are set to the same current second. Missing tag rows are
    /// created.
    fn create(&mut self, title: &str, content: &str, tags: &[Tag]) -> StoreResult<NoteId>;

    /// Replaces a note's title, content, and full tag set, and re-stamps `updated_at`.
    fn update(&mut self, id: NoteId, title: &str, content: &str, tags: &[Tag])
    -> StoreResult<()>;

    /// Deletes a note together with its tag associations and index entry.
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;

    /// Flips the pinned flag and re-stamps `updated_at`.
    fn toggle_pin(&mut self, id: NoteId) -> StoreResult<()>;

    /// Fetches one note with its tags sorted alphabetically.
    fn get(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Lists notes pinned-first, then most recently updated.
    ///
    /// When `tag` is given only notes carrying that tag are returned; the
    /// filter is normalized the same way stored tags are.
    fn list(&self, tag: Option<&str>, limit: usize) -> StoreResult<Vec<NoteSummary>>;

    /// Full-text search; every whitespace-separated token must match.
    ///
    /// Results are ordered best match first. A blank query returns no
    /// results without touching the index.
    fn search(&self, query: &str, limit: usize) -> StoreResult<Vec<NoteSummary>>;

    /// Returns all tags with usage counts, most used first, then by name.
    fn list_tags(&self) -> StoreResult<Vec<TagWithCount>>;

    /// Returns every note with full content, most recently updated first.
    fn export_all(&self) -> StoreResult<Vec<Note>>;

    /// Rebuilds the search index from the notes table.
    fn rebuild_index(&mut self) -> StoreResult<()>;
}

//! Note and note summary types, plus the title and excerpt rules.

use super::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title stored when the supplied title is blank.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Excerpt length used by note listings.
pub const LIST_EXCERPT_LEN: usize = 160;

/// Excerpt length used by search results.
pub const SEARCH_EXCERPT_LEN: usize = 180;

/// Marker appended to a truncated excerpt.
pub const ELLIPSIS: char = '…';

/// A complete note as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Markdown source.
    pub content: String,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Associated tags, sorted alphabetically.
    pub tags: Vec<Tag>,
}

/// A condensed view of a note for listings and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
    pub excerpt: String,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<Tag>,
}

impl Note {
    /// Summarizes this note with an excerpt of at most `excerpt_len` characters.
    pub fn summarize(&self, excerpt_len: usize) -> NoteSummary {
        NoteSummary {
            id: self.id,
            title: self.title.clone(),
            excerpt: excerpt(&self.content, excerpt_len),
            pinned: self.pinned,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tags: self.tags.clone(),
        }
    }

    /// Returns the tag names joined the way they are typed in, e.g. `"demo, study"`.
    pub fn tags_text(&self) -> String {
        self.tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Trims a title, substituting [`DEFAULT_TITLE`] when nothing is left.
///
/// ```
/// use mintmemo::domain::normalize_title;
///
/// assert_eq!(normalize_title("  Hello "), "Hello");
/// assert_eq!(normalize_title("   "), "Untitled");
/// ```
pub fn normalize_title(title: &str) -> String {
    match title.trim() {
        "" => DEFAULT_TITLE.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Builds a one-line preview of note content.
///
/// The content is trimmed, line breaks become single spaces, and the result
/// is cut to `max_chars` characters with [`ELLIPSIS`] appended when anything
/// was cut.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let flattened = content
        .trim()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ");

    match flattened.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = flattened[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => flattened,
    }
}

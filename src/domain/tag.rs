//! Lowercase, length-bounded tag names and free-text tag parsing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum tag length, counted in characters.
pub const MAX_TAG_LEN: usize = 32;

/// Separators accepted between tags: ASCII comma and full-width comma.
const SEPARATORS: [char; 2] = [',', '，'];

/// A normalized tag name.
///
/// Tags are flat labels. They are normalized on construction, so `Study`,
/// ` study ` and `STUDY` all produce the same tag.
///
/// # Normalization
/// - Surrounding whitespace is trimmed
/// - Converted to lowercase
/// - Truncated to [`MAX_TAG_LEN`] characters
///
/// Normalization never fails; an input that is empty after trimming yields
/// no tag at all.
///
/// # Examples
///
/// ```
/// use mintmemo::domain::Tag;
///
/// let tag = Tag::new("  Rust ").unwrap();
/// assert_eq!(tag.as_str(), "rust");
/// assert!(Tag::new("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored normalized

impl Tag {
    /// Normalizes a single tag name, returning `None` when nothing remains.
    pub fn new(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let normalized = match lowered.char_indices().nth(MAX_TAG_LEN) {
            Some((cut, _)) => lowered[..cut].to_string(),
            None => lowered,
        };

        Some(Self(normalized))
    }

    /// Wraps a name read back from the store, where it was normalized on write.
    pub(crate) fn from_stored(name: String) -> Self {
        Self(name)
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses free-text tag input into an ordered list of distinct tags.
///
/// Tags are separated by `,` or `，`. Each token is normalized with
/// [`Tag::new`]; empty tokens are dropped and later duplicates are removed,
/// so the first occurrence decides the position.
///
/// ```
/// use mintmemo::domain::normalize_tags;
///
/// let tags = normalize_tags("Study, Demo, study");
/// let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
/// assert_eq!(names, ["study", "demo"]);
/// ```
pub fn normalize_tags(raw: &str) -> Vec<Tag> {
    let mut seen = HashSet::new();
    raw.split(SEPARATORS)
        .filter_map(Tag::new)
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).ok_or_else(|| serde::de::Error::custom("tag cannot be empty"))
    }
}

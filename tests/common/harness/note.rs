//! Builder for test notes with sensible defaults.

use mintmemo::domain::{Tag, normalize_tags};

/// Builder for creating test notes with sensible defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    body: String,
    tags: Vec<Tag>,
    pinned: bool,
}

impl TestNote {
    /// Creates a new test note with the given title and an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            tags: Vec::new(),
            pinned: false,
        }
    }

    /// Adds tags, written the way a user types them (`"a, b"`).
    pub fn tags(mut self, raw: &str) -> Self {
        let mut joined = self
            .tags
            .iter()
            .map(|t| t.as_str().to_string())
            .collect::<Vec<_>>();
        joined.push(raw.to_string());
        self.tags = normalize_tags(&joined.join(","));
        self
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Marks the note as pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_body(&self) -> &str {
        &self.body
    }

    pub fn get_tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Title");
        assert_eq!(note.get_title(), "Title");
        assert_eq!(note.get_body(), "");
        assert!(note.get_tags().is_empty());
        assert!(!note.is_pinned());
    }

    #[test]
    fn test_note_tags_accumulate_and_normalize() {
        let note = TestNote::new("T").tags("Rust, cli").tags("rust, notes");
        let names: Vec<&str> = note.get_tags().iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["rust", "cli", "notes"]);
    }
}

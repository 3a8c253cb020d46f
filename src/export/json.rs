//! JSON backup of every note.

use crate::domain::Note;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Top-level export document: `{"notes": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub notes: Vec<Note>,
}

/// Serializes notes as a pretty-printed export document.
pub fn write_export<W: Write>(writer: W, notes: Vec<Note>) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &ExportDocument { notes })
}

/// Writes an export document to `path` atomically.
///
/// The document is written to a temporary file in the same directory and
/// renamed into place, so an interrupted export never leaves a truncated
/// backup behind.
pub fn export_to_file(path: &Path, notes: Vec<Note>) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)?;
    write_export(&mut temp, notes)?;
    temp.write_all(b"\n")?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

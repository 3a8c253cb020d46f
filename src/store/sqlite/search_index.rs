//! Search index writes and FTS5 query construction.
//!
//! `notes_fts` holds its own copy of each note's title and content under
//! `rowid = notes.id`. Only the store's write transactions call into here,
//! always alongside the matching `notes` statement.

use crate::domain::NoteId;
use crate::store::StoreResult;
use rusqlite::{Connection, params};

/// Adds the index entry for a note.
pub(super) fn index_note(conn: &Connection, id: NoteId, title: &str, content: &str) -> StoreResult<()> {
    conn.prepare_cached("INSERT INTO notes_fts (rowid, title, content) VALUES (?1, ?2, ?3)")?
        .execute(params![id, title, content])?;
    Ok(())
}

/// Removes the index entry for a note, if any.
pub(super) fn unindex_note(conn: &Connection, id: NoteId) -> StoreResult<()> {
    conn.prepare_cached("DELETE FROM notes_fts WHERE rowid = ?1")?
        .execute([id])?;
    Ok(())
}

/// Replaces the index entry for a note with its new title and content.
pub(super) fn reindex_note(
    conn: &Connection,
    id: NoteId,
    title: &str,
    content: &str,
) -> StoreResult<()> {
    unindex_note(conn, id)?;
    index_note(conn, id, title, content)
}

/// Builds an FTS5 MATCH expression requiring every token of `query`.
///
/// Tokens are split on Unicode whitespace and each is quoted as an FTS5
/// string, so operators and punctuation in user input are matched literally
/// instead of being parsed as query syntax. Returns `None` for a blank query.
pub(super) fn match_expression(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|token| format!("\"{}\"", token.replace('"', "\"\"")))
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" AND "))
    }
}

//! Tag rows and note-tag associations.

use crate::domain::{NoteId, Tag};
use crate::store::StoreResult;
use rusqlite::{Connection, params};

/// Replaces the full tag set of a note.
///
/// Existing associations are deleted and the given tags re-associated; tag
/// rows are created on first use and never removed here.
pub(super) fn replace_note_tags(conn: &Connection, id: NoteId, tags: &[Tag]) -> StoreResult<()> {
    conn.execute("DELETE FROM note_tags WHERE note_id = ?1", [id])?;

    let mut ensure_tag = conn.prepare_cached("INSERT OR IGNORE INTO tags (name) VALUES (?1)")?;
    let mut link = conn.prepare_cached(
        "INSERT OR IGNORE INTO note_tags (note_id, tag_id)
         SELECT ?1, id FROM tags WHERE name = ?2",
    )?;

    for tag in tags {
        ensure_tag.execute([tag.as_str()])?;
        link.execute(params![id, tag.as_str()])?;
    }

    Ok(())
}

/// Returns a note's tags sorted by name.
pub(super) fn tags_for_note(conn: &Connection, id: NoteId) -> StoreResult<Vec<Tag>> {
    let mut stmt = conn.prepare_cached(
        "SELECT t.name
         FROM tags t
         JOIN note_tags nt ON nt.tag_id = t.id
         WHERE nt.note_id = ?1
         ORDER BY t.name",
    )?;

    let tags = stmt
        .query_map([id], |row| row.get::<_, String>(0))?
        .map(|name| name.map(Tag::from_stored))
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(tags)
}

//! NoteRepository trait implementation for SqliteStore.

use super::SqliteStore;
use super::rows::{NOTE_COLUMNS, NoteRow, format_timestamp};
use super::search_index::{index_note, match_expression, reindex_note, unindex_note};
use super::tags::{replace_note_tags, tags_for_note};
use crate::domain::{
    LIST_EXCERPT_LEN, Note, NoteId, NoteSummary, SEARCH_EXCERPT_LEN, Tag, normalize_title,
};
use crate::store::{NoteRepository, StoreResult, TagWithCount, rebuild_search_index};
use rusqlite::{Connection, OptionalExtension, Params, params};
use tracing::debug;

impl NoteRepository for SqliteStore {
    fn create(&mut self, title: &str, content: &str, tags: &[Tag]) -> StoreResult<NoteId> {
        let title = normalize_title(title);

        self.write(|tx, now| {
            let stamp = format_timestamp(now);
            tx.execute(
                "INSERT INTO notes (title, content, pinned, created_at, updated_at)
                 VALUES (?1, ?2, 0, ?3, ?3)",
                params![title, content, stamp],
            )?;
            let id = NoteId::new(tx.conn().last_insert_rowid());

            index_note(tx.conn(), id, &title, content)?;
            replace_note_tags(tx.conn(), id, tags)?;

            debug!(%id, tags = tags.len(), "note created");
            Ok(id)
        })
    }

    fn update(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        tags: &[Tag],
    ) -> StoreResult<()> {
        let title = normalize_title(title);

        self.write(|tx, now| {
            let changed = tx.execute(
                "UPDATE notes
                 SET title = ?1, content = ?2, updated_at = MAX(created_at, ?3)
                 WHERE id = ?4",
                params![title, content, format_timestamp(now), id],
            )?;
            if changed == 0 {
                debug!(%id, "update skipped, no such note");
                return Ok(());
            }

            reindex_note(tx.conn(), id, &title, content)?;
            replace_note_tags(tx.conn(), id, tags)?;

            debug!(%id, tags = tags.len(), "note updated");
            Ok(())
        })
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        self.write(|tx, _| {
            // note_tags rows go with the note via ON DELETE CASCADE
            let removed = tx.execute("DELETE FROM notes WHERE id = ?1", [id])?;
            unindex_note(tx.conn(), id)?;

            debug!(%id, removed, "note deleted");
            Ok(())
        })
    }

    fn toggle_pin(&mut self, id: NoteId) -> StoreResult<()> {
        self.write(|tx, now| {
            let changed = tx.execute(
                "UPDATE notes
                 SET pinned = CASE pinned WHEN 1 THEN 0 ELSE 1 END,
                     updated_at = MAX(created_at, ?1)
                 WHERE id = ?2",
                params![format_timestamp(now), id],
            )?;

            debug!(%id, changed, "pin toggled");
            Ok(())
        })
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.read(|tx| {
            let row = tx
                .conn()
                .query_row(
                    &format!("SELECT {NOTE_COLUMNS} FROM notes n WHERE n.id = ?1"),
                    [id],
                    NoteRow::from_row,
                )
                .optional()?;

            match row {
                Some(row) => {
                    let tags = tags_for_note(tx.conn(), row.id)?;
                    Ok(Some(row.into_note(tags)?))
                }
                None => Ok(None),
            }
        })
    }

    fn list(&self, tag: Option<&str>, limit: usize) -> StoreResult<Vec<NoteSummary>> {
        let limit = sql_limit(limit);
        let tag = tag.and_then(Tag::new);

        self.read(|tx| {
            let notes = match &tag {
                Some(tag) => load_notes(
                    tx.conn(),
                    &format!(
                        "SELECT {NOTE_COLUMNS}
                         FROM notes n
                         JOIN note_tags nt ON nt.note_id = n.id
                         JOIN tags t ON t.id = nt.tag_id
                         WHERE t.name = ?1
                         ORDER BY n.pinned DESC, n.updated_at DESC, n.id DESC
                         LIMIT ?2"
                    ),
                    params![tag.as_str(), limit],
                )?,
                None => load_notes(
                    tx.conn(),
                    &format!(
                        "SELECT {NOTE_COLUMNS}
                         FROM notes n
                         ORDER BY n.pinned DESC, n.updated_at DESC, n.id DESC
                         LIMIT ?1"
                    ),
                    [limit],
                )?,
            };

            Ok(notes
                .iter()
                .map(|note| note.summarize(LIST_EXCERPT_LEN))
                .collect())
        })
    }

    fn search(&self, query: &str, limit: usize) -> StoreResult<Vec<NoteSummary>> {
        let Some(expression) = match_expression(query) else {
            return Ok(Vec::new());
        };
        let limit = sql_limit(limit);

        // bm25 scores are negative; lower is a better match.
        // Column weights: title=1.0, content=0.6
        self.read(|tx| {
            let notes = load_notes(
                tx.conn(),
                &format!(
                    "SELECT {NOTE_COLUMNS}, bm25(notes_fts, 1.0, 0.6) AS score
                     FROM notes_fts
                     JOIN notes n ON n.id = notes_fts.rowid
                     WHERE notes_fts MATCH ?1
                     ORDER BY score, notes_fts.rowid
                     LIMIT ?2"
                ),
                params![expression, limit],
            )?;

            debug!(query = %expression, hits = notes.len(), "search executed");
            Ok(notes
                .iter()
                .map(|note| note.summarize(SEARCH_EXCERPT_LEN))
                .collect())
        })
    }

    fn list_tags(&self) -> StoreResult<Vec<TagWithCount>> {
        self.read(|tx| {
            let mut stmt = tx.conn().prepare(
                "SELECT t.name, COUNT(nt.note_id) AS count
                 FROM tags t
                 LEFT JOIN note_tags nt ON nt.tag_id = t.id
                 GROUP BY t.id
                 ORDER BY count DESC, t.name ASC",
            )?;

            let tags = stmt
                .query_map([], |row| {
                    let name: String = row.get(0)?;
                    let count: u32 = row.get(1)?;
                    Ok(TagWithCount::new(Tag::from_stored(name), count))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(tags)
        })
    }

    fn export_all(&self) -> StoreResult<Vec<Note>> {
        self.read(|tx| {
            load_notes(
                tx.conn(),
                &format!(
                    "SELECT {NOTE_COLUMNS}
                     FROM notes n
                     ORDER BY n.updated_at DESC, n.id DESC"
                ),
                [],
            )
        })
    }

    fn rebuild_index(&mut self) -> StoreResult<()> {
        self.write(|tx, _| Ok(rebuild_search_index(tx.conn())?))
    }
}

/// Runs a query selecting [`NOTE_COLUMNS`] first and loads each note with its tags.
fn load_notes(conn: &Connection, sql: &str, params: impl Params) -> StoreResult<Vec<Note>> {
    let rows = conn
        .prepare(sql)?
        .query_map(params, NoteRow::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.into_iter()
        .map(|row| {
            let tags = tags_for_note(conn, row.id)?;
            row.into_note(tags)
        })
        .collect()
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

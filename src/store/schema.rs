//! SQLite schema creation for the note store.

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

/// Version recorded in `schema_version` by [`ensure_schema`].
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema for the note store.
///
/// This function creates all required tables, indexes, and constraints.
/// It is idempotent - calling it on every startup is safe.
///
/// # Tables Created
/// - `notes` - Title, Markdown content, pin flag, timestamps
/// - `tags` - Globally unique lowercase tag names
/// - `note_tags` - Many-to-many junction for notes and tags
/// - `notes_fts` - FTS5 mirror of note title/content keyed by note id
/// - `schema_version` - Schema version tracking
///
/// The search index is maintained by the store's write transactions, not by
/// triggers. Trigger-synchronized indexes left by earlier layouts are
/// replaced and rebuilt.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            pinned INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS note_tags (
            note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (note_id, tag_id)
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_pinned_updated ON notes(pinned DESC, updated_at DESC);
         CREATE INDEX IF NOT EXISTS idx_note_tags_tag ON note_tags(tag_id);",
    )?;

    // Older layouts kept the index in sync with triggers over an
    // external-content table. Both would double-index alongside the store's
    // own writes.
    conn.execute_batch(
        "DROP TRIGGER IF EXISTS notes_ai;
         DROP TRIGGER IF EXISTS notes_ad;
         DROP TRIGGER IF EXISTS notes_au;",
    )?;

    let legacy_index = has_external_content_index(conn)?;
    if legacy_index {
        info!("replacing external-content search index");
        conn.execute_batch("DROP TABLE notes_fts;")?;
    }

    conn.execute_batch(
        "CREATE VIRTUAL TABLE IF NOT EXISTS notes_fts USING fts5(
            title,
            content,
            tokenize='unicode61'
        );",
    )?;

    if legacy_index {
        rebuild_search_index(conn)?;
    }

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    debug!(version = SCHEMA_VERSION, "schema ensured");
    Ok(())
}

/// Returns the current schema version.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}

/// Rebuilds the search index from the notes table.
///
/// Useful for recovering from index damage. Run it inside a transaction so
/// readers never see the index half-populated.
pub fn rebuild_search_index(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM notes_fts", [])?;
    let indexed = conn.execute(
        "INSERT INTO notes_fts (rowid, title, content) SELECT id, title, content FROM notes",
        [],
    )?;
    info!(indexed, "search index rebuilt");
    Ok(())
}

fn has_external_content_index(conn: &Connection) -> rusqlite::Result<bool> {
    let sql: Option<String> = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'notes_fts'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(sql.is_some_and(|sql| sql.replace(' ', "").contains("content='notes'")))
}

//! Connection management for SqliteStore.

use super::SqliteStore;
use super::transaction::{Transaction, TransactionMode};
use crate::store::clock::now_secs;
use crate::store::{Clock, StoreError, StoreResult, SystemClock, ensure_schema};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

impl SqliteStore {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory SQLite database with the note schema.
    ///
    /// This is useful for testing and throwaway stores that don't need persistence.
    pub fn open_in_memory() -> StoreResult<Self> {
        debug!("opening in-memory store");
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::initialize(conn)
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a SQLite database at the given path.
    ///
    /// Creates parent directories if they don't exist, switches the database
    /// to WAL journaling (one writer, many readers) and ensures the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        info!("opening store at {}", path.display());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;",
        )?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> StoreResult<Self> {
        let tx = Transaction::begin(&conn, TransactionMode::Write)?;
        ensure_schema(tx.conn())?;
        tx.commit()?;

        Ok(Self {
            conn,
            clock: Box::new(SystemClock),
        })
    }

    /// Replaces the clock used to stamp `created_at` / `updated_at`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ===========================================
    // Connection Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns a mutable reference to the underlying SQLite connection.
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a new write transaction.
    ///
    /// The transaction will automatically rollback on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        Transaction::begin(&self.conn, TransactionMode::Write)
    }

    /// Runs `f` inside a write transaction stamped with the current second.
    ///
    /// Commits when `f` returns `Ok`; any error rolls everything back before
    /// it is returned.
    pub(crate) fn write<T>(
        &mut self,
        f: impl FnOnce(&Transaction<'_>, DateTime<Utc>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let now = now_secs(self.clock.as_ref());
        let tx = Transaction::begin(&self.conn, TransactionMode::Write)?;
        let value = f(&tx, now)?;
        tx.commit()?;
        Ok(value)
    }

    /// Runs `f` inside a read transaction so multi-query reads see one snapshot.
    pub(crate) fn read<T>(
        &self,
        f: impl FnOnce(&Transaction<'_>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let tx = Transaction::begin(&self.conn, TransactionMode::Read)?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

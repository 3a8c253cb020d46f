//! SQLite-backed note store.

mod connection;
mod repo_impl;
mod rows;
mod search_index;
mod tags;
mod transaction;


use crate::store::Clock;
use rusqlite::Connection;

pub use transaction::{Transaction, TransactionMode};

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns one connection and the clock used to stamp writes. Each repository
/// operation runs in its own transaction on that connection; concurrent
/// callers open their own store on the same file and rely on WAL mode.
pub struct SqliteStore {
    pub(crate) conn: Connection,
    clock: Box<dyn Clock>,
}

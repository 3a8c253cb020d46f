//! Note storage: schema, repository trait, and the SQLite implementation.

mod clock;
mod repository;
mod schema;
pub mod sqlite;

pub use clock::{Clock, SystemClock};
pub use repository::{NoteRepository, StoreError, StoreResult, TagWithCount};
pub use schema::{SCHEMA_VERSION, ensure_schema, rebuild_search_index, schema_version};
pub use sqlite::{SqliteStore, Transaction, TransactionMode};

//! Isolated test environment with temp directory.

use super::{MemoCommand, TestNote};
use mintmemo::domain::NoteId;
use mintmemo::store::{NoteRepository, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database location.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Notes can be seeded directly through the library before the binary runs.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the database path passed via `--db`.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("mintmemo.db")
    }

    /// Returns the config file path exported as `MINTMEMO_CONFIG`.
    ///
    /// The file only exists after [`TestEnv::write_config`].
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Opens the environment's database through the library.
    pub fn open_store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open test database")
    }

    /// Adds a test note and returns its ID.
    pub fn add_note(&self, test_note: &TestNote) -> NoteId {
        let mut store = self.open_store();
        let id = store
            .create(test_note.get_title(), test_note.get_body(), test_note.get_tags())
            .expect("Failed to create test note");
        if test_note.is_pinned() {
            store.toggle_pin(id).expect("Failed to pin test note");
        }
        id
    }

    /// Creates a MemoCommand configured for this test environment.
    pub fn cmd(&self) -> MemoCommand {
        MemoCommand::new(&self.config_path()).db(&self.db_path())
    }

    /// Creates a MemoCommand without `--db`, for config resolution tests.
    pub fn bare_cmd(&self) -> MemoCommand {
        MemoCommand::new(&self.config_path())
    }

    /// Writes the config file read by the binary.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_is_stored() {
        let env = TestEnv::new();
        let id = env.add_note(&TestNote::new("Seeded").tags("a").pinned());

        let note = env.open_store().get(id).unwrap().unwrap();
        assert_eq!(note.title, "Seeded");
        assert!(note.pinned);
        assert_eq!(note.tags_text(), "a");
    }

    #[test]
    fn test_env_command_uses_db() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        assert_eq!(cmd.get_args()[0], "--db");
        assert_eq!(cmd.get_args()[1], env.db_path().to_string_lossy());
    }
}

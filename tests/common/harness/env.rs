//! Isolated test environment with temp directory.

use super::{RatenoteCommand, TestNote};
use ratenote::domain::NoteId;
use ratenote::store::{NoteRepository, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and config home.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands run from this environment never read the user's real config.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Root of the temporary directory
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

    /// Returns the root of the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the test database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("notes.db")
    }

    /// Returns the directory used as the config home for commands.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Writes `ratenote/config.toml` under the config home.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home().join("ratenote");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Opens the test database directly.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open test database")
    }

    /// Inserts a note directly through the store and returns its id.
    pub fn add_note(&self, note: &TestNote) -> NoteId {
        self.store()
            .create(&note.to_new_note())
            .expect("Failed to insert test note")
    }

    /// Creates a RatenoteCommand configured for this test environment.
    pub fn cmd(&self) -> RatenoteCommand {
        RatenoteCommand::new()
            .config_home(&self.config_home())
            .db(&self.db_path())
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
    use ratenote::domain::SortOrder;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_add_note_persists() {
        let env = TestEnv::new();
        let id = env.add_note(&TestNote::new("Seeded").rating(3));

        let notes = env.store().list_sorted(SortOrder::Descending).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id(), id);
        assert_eq!(notes[0].title(), Some("Seeded"));
    }

    #[test]
    fn test_env_write_config() {
        let env = TestEnv::new();
        let path = env.write_config("half_cut = true\n");
        assert!(path.ends_with("ratenote/config.toml"));
        assert!(path.exists());
    }
}

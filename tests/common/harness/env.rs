//! Isolated test environment with temp directory.

use super::JotCommand;
use jot::index::{INDEX_FILE_NAME, TagIndex};
use jot::infra::write_note;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding notes and the tag index.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path where the tag index is stored.
    pub fn index_path(&self) -> PathBuf {
        self.notes_dir.join(INDEX_FILE_NAME)
    }

    /// Adds a note file and records it in the tag index.
    ///
    /// Mirrors what `jot new` does: writes the header-only note file and
    /// appends its path under each tag. Returns the note path.
    pub fn add_note(&self, filename: &str, tags: &[&str]) -> PathBuf {
        let path = self.notes_dir.join(filename);
        let tags: Vec<String> = tags.iter().map(|s| s.to_string()).collect();
        write_note(&path, &tags).expect("Failed to write test note");

        let mut index = TagIndex::load(&self.index_path()).expect("Failed to load tag index");
        index.append(&path, &tags);
        index.save().expect("Failed to save tag index");

        path
    }

    /// Writes raw contents to the tag index file.
    ///
    /// Useful for seeding malformed or stale index states.
    pub fn write_index(&self, contents: &str) {
        std::fs::write(self.index_path(), contents).expect("Failed to write tag index");
    }

    /// Reads the tag index file as a string.
    pub fn read_index(&self) -> String {
        std::fs::read_to_string(self.index_path()).expect("Failed to read tag index")
    }

    /// Writes a file to the notes directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().dir(&self.notes_dir)
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
        assert!(env.notes_dir().exists());
        assert!(env.notes_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_creates_file_and_index_entry() {
        let env = TestEnv::new();
        let path = env.add_note("todo.txt", &["work"]);

        assert!(path.exists());
        assert!(env.index_path().exists());
        assert!(env.read_index().contains("work"));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }
}

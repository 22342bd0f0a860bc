//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jot::infra::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary base directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. It
/// holds a separate home directory (for the config file) and the jot base
/// directory passed via `--dir`.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home_dir: PathBuf,
    store: NoteStore,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home directory");
        let store = NoteStore::new(temp_dir.path().join("jot"));
        Self {
            _temp_dir: temp_dir,
            home_dir,
            store,
        }
    }

    /// Returns the jot base directory.
    pub fn base_dir(&self) -> &Path {
        self.store.base_dir()
    }

    /// Returns the notes directory.
    pub fn notes_dir(&self) -> PathBuf {
        self.store.notes_dir()
    }

    /// Returns the isolated home directory.
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Returns a store over this environment's base directory.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Adds a test note to the environment and returns its path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        self.store
            .save(&test_note.to_note())
            .expect("Failed to write test note")
    }

    /// Writes a file relative to the notes directory and returns its path.
    ///
    /// Useful for malformed notes and nested layouts.
    pub fn write_raw(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.notes_dir().join(rel);
        std::fs::create_dir_all(path.parent().expect("path has a parent"))
            .expect("Failed to create parent directory");
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a template into the templates directory.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.store.templates_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create templates directory");
        let path = dir.join(format!("{name}.md"));
        std::fs::write(&path, content).expect("Failed to write template");
        path
    }

    /// Writes `~/.jot/config.yaml` inside the isolated home directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.join(".jot");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().home(&self.home_dir).dir(self.base_dir())
    }

    /// Creates a JotCommand without `--dir`, relying on the config file.
    pub fn cmd_without_dir(&self) -> JotCommand {
        JotCommand::new().home(&self.home_dir)
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
    use jot::infra::read_note;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.base_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.base_dir().to_string_lossy());
    }

    #[test]
    fn test_env_add_note_parseable() {
        let env = TestEnv::new();
        let note = TestNote::new("# Test Content\n\nThis is a test.")
            .tag("integration")
            .context("testing");

        let path = env.add_note(&note);
        let parsed = read_note(&path).expect("Should parse the note");

        assert_eq!(parsed, note.to_note());
        assert!(path.starts_with(env.notes_dir()));
    }
}

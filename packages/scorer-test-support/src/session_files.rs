//! Scratch locations for session and rules files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use scorer_test_support::unique_str;
///
/// let a = unique_str("round");
/// let b = unique_str("round");
/// assert_ne!(a, b);
/// assert!(a.starts_with("round-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Temporary directory holding one test's session and rules files.
/// Everything is removed on drop.
pub struct SessionDir {
    dir: TempDir,
}

impl SessionDir {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::Builder::new().prefix("tongits-").tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Fresh, not-yet-existing path for a saved game.
    pub fn session_path(&self) -> PathBuf {
        self.dir.path().join(format!("{}.json", unique_str("session")))
    }

    /// Write `json` to a new rules file and return its path.
    pub fn write_rules(&self, json: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(format!("{}.json", unique_str("rules")));
        fs::write(&path, json)?;
        Ok(path)
    }
}

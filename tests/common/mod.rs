#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the crufty binary.
#[macro_export]
macro_rules! crufty {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("crufty"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file of `lines` newline-terminated lines.
    ///
    /// The trailing newline counts as one more line, so the file is
    /// reported with `lines + 1`.
    pub fn create_lines_file(&self, relative_path: &str, lines: usize) {
        self.create_file(relative_path, &"a\n".repeat(lines));
    }

    /// Creates a file with raw bytes, e.g. binary content that is not UTF-8.
    pub fn create_binary_file(&self, relative_path: &str, bytes: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, bytes).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Writes `.gitignore` at the fixture root.
    pub fn create_gitignore(&self, content: &str) {
        self.create_file(".gitignore", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

//! Filesystem abstraction for testability.
//!
//! The checker never touches `std::fs` directly. Every stat, listing and read
//! goes through [`FileSystem`] so tests can substitute an in-memory double.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// What a path points at, as far as the checker cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    /// Sockets, FIFOs, devices and anything else that is neither.
    Other,
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Stat a path, following symlinks.
    ///
    /// # Errors
    /// Returns an error if the path does not exist or cannot be inspected.
    fn stat(&self, path: &Path) -> std::io::Result<FileKind>;

    /// List every entry below a directory, recursively.
    ///
    /// Returned paths are relative to `path`. Both files and directories are
    /// listed; ordering is stable between calls.
    ///
    /// # Errors
    /// Returns an error if the directory or any subdirectory cannot be read.
    fn read_dir_recursive(&self, path: &Path) -> std::io::Result<Vec<PathBuf>>;

    /// Read file contents as text. Invalid UTF-8 is replaced with U+FFFD.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn stat(&self, path: &Path) -> std::io::Result<FileKind> {
        (**self).stat(path)
    }

    fn read_dir_recursive(&self, path: &Path) -> std::io::Result<Vec<PathBuf>> {
        (**self).read_dir_recursive(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        (**self).read_to_string(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        (**self).current_dir()
    }
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn stat(&self, path: &Path) -> std::io::Result<FileKind> {
        let metadata = std::fs::metadata(path)?;
        let kind = if metadata.is_file() {
            FileKind::File
        } else if metadata.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Other
        };
        Ok(kind)
    }

    fn read_dir_recursive(&self, path: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            if let Ok(relative) = entry.path().strip_prefix(path) {
                entries.push(relative.to_path_buf());
            }
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        // Canonical, so symlinked working directories (/tmp on macOS) compare
        // equal to canonical absolute inputs.
        dunce::canonicalize(std::env::current_dir()?)
    }
}

#[cfg(test)]
pub mod mock_fs;

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;

use std::collections::{BTreeMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{FileKind, FileSystem};
use crate::path_utils::normalize;

#[derive(Debug, Clone)]
enum MockEntry {
    File(String),
    Directory,
    Special,
}

/// In-memory filesystem rooted at a fake working directory.
///
/// Parent directories of added files are created implicitly. Every
/// `read_to_string` call is recorded so tests can assert what was read.
pub struct MockFileSystem {
    entries: BTreeMap<PathBuf, MockEntry>,
    stat_errors: HashSet<PathBuf>,
    read_errors: HashSet<PathBuf>,
    current_dir: PathBuf,
    reads: Mutex<Vec<PathBuf>>,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            stat_errors: HashSet::new(),
            read_errors: HashSet::new(),
            current_dir: PathBuf::new(),
            reads: Mutex::new(Vec::new()),
        }
        .with_current_dir("/project")
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the working directory, which always exists as a directory.
    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self.with_dir(".")
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let key = self.key(path.as_ref());
        self.add_parents(&key);
        self.entries.insert(key, MockEntry::File(content.to_string()));
        self
    }

    /// Adds a file made of `lines` copies of `"a\n"`.
    pub fn with_lines(self, path: impl AsRef<Path>, lines: usize) -> Self {
        self.with_file(path, &"a\n".repeat(lines))
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let key = self.key(path.as_ref());
        self.add_parents(&key);
        self.entries.insert(key, MockEntry::Directory);
        self
    }

    /// Adds an entry that is neither a file nor a directory (e.g. a FIFO).
    pub fn with_special(mut self, path: impl AsRef<Path>) -> Self {
        let key = self.key(path.as_ref());
        self.add_parents(&key);
        self.entries.insert(key, MockEntry::Special);
        self
    }

    /// Makes `stat` fail for the path even if an entry exists.
    pub fn with_stat_error(mut self, path: impl AsRef<Path>) -> Self {
        let key = self.key(path.as_ref());
        self.stat_errors.insert(key);
        self
    }

    /// Makes `read_to_string` fail for the path even if the file exists.
    pub fn with_read_error(mut self, path: impl AsRef<Path>) -> Self {
        let key = self.key(path.as_ref());
        self.read_errors.insert(key);
        self
    }

    /// Paths passed to `read_to_string`, in call order, as given by the caller.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }

    fn key(&self, path: &Path) -> PathBuf {
        normalize(&self.current_dir.join(path))
    }

    fn add_parents(&mut self, key: &Path) {
        let mut parent = key.parent();
        while let Some(dir) = parent {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.entries
                .entry(dir.to_path_buf())
                .or_insert(MockEntry::Directory);
            parent = dir.parent();
        }
    }
}

impl FileSystem for MockFileSystem {
    fn stat(&self, path: &Path) -> std::io::Result<FileKind> {
        let key = self.key(path);
        if self.stat_errors.contains(&key) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        match self.entries.get(&key) {
            Some(MockEntry::File(_)) => Ok(FileKind::File),
            Some(MockEntry::Directory) => Ok(FileKind::Directory),
            Some(MockEntry::Special) => Ok(FileKind::Other),
            None => Err(Error::new(ErrorKind::NotFound, "no such file or directory")),
        }
    }

    fn read_dir_recursive(&self, path: &Path) -> std::io::Result<Vec<PathBuf>> {
        if self.stat(path)? != FileKind::Directory {
            return Err(Error::other("not a directory"));
        }
        let key = self.key(path);
        Ok(self
            .entries
            .keys()
            .filter_map(|entry| entry.strip_prefix(&key).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        let key = self.key(path);
        if self.read_errors.contains(&key) {
            return Err(Error::new(ErrorKind::PermissionDenied, "read failed"));
        }
        match self.entries.get(&key) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(_) => Err(Error::other("is a directory")),
            None => Err(Error::new(ErrorKind::NotFound, "file not found")),
        }
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

use std::path::PathBuf;

use serde::Serialize;

/// A file whose line count exceeds the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// Path relative to the working directory.
    pub path: PathBuf,
    pub line_count: usize,
}

impl FileResult {
    #[must_use]
    pub const fn new(path: PathBuf, line_count: usize) -> Self {
        Self { path, line_count }
    }
}

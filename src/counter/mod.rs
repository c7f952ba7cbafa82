use std::path::Path;

use crate::filesystem::FileSystem;

/// Counts `\n`-delimited segments in a file.
///
/// This is not a newline count: a file without a trailing
/// newline still counts its last line, an empty file counts as 1 and a
/// trailing newline contributes one empty final segment.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCounter;

impl LineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn count(&self, content: &str) -> usize {
        content.split('\n').count()
    }

    /// Read `path` through `fs` and count its segments.
    ///
    /// Binary content never fails; only I/O errors do.
    ///
    /// # Errors
    /// Returns the read error if the file cannot be read.
    pub fn count_file<F: FileSystem>(&self, path: &Path, fs: &F) -> std::io::Result<usize> {
        let content = fs.read_to_string(path)?;
        Ok(self.count(&content))
    }
}

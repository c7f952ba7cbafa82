mod glob;
mod ignore_rules;

pub use glob::{GlobExpander, GlobsetExpander};
pub use ignore_rules::{GITIGNORE_FILE, IgnoreRuleSet};

use std::path::{Path, PathBuf};

use crate::error::{CruftyError, Result};
use crate::filesystem::{FileKind, FileSystem};

/// Input used when no patterns are given.
pub const DEFAULT_INPUT: &str = ".";

/// Turns user inputs (globs, files, directories) into a flat list of paths.
///
/// Each input is tried as a glob first. Only when the glob yields nothing is
/// the input stat'd directly: directories are listed recursively, regular
/// files are taken as-is and anything else is skipped.
pub struct PathResolver<'a, F: FileSystem, G: GlobExpander> {
    fs: &'a F,
    glob: &'a G,
}

impl<'a, F: FileSystem, G: GlobExpander> PathResolver<'a, F, G> {
    #[must_use]
    pub const fn new(fs: &'a F, glob: &'a G) -> Self {
        Self { fs, glob }
    }

    /// Resolve inputs in order, without ignore filtering or relativizing.
    ///
    /// Access failures are handed to `on_access_error`; returning `Ok` skips
    /// the input and continues, returning `Err` aborts the resolution.
    ///
    /// # Errors
    /// Returns whatever `on_access_error` returns for a failing input.
    pub fn resolve<H>(
        &self,
        inputs: &[String],
        mut on_access_error: H,
    ) -> Result<Vec<PathBuf>>
    where
        H: FnMut(CruftyError) -> Result<()>,
    {
        let default_inputs = [DEFAULT_INPUT.to_string()];
        let inputs = if inputs.is_empty() {
            &default_inputs[..]
        } else {
            inputs
        };

        let mut resolved = Vec::new();
        for input in inputs {
            match self.resolve_one(input) {
                Ok(paths) => resolved.extend(paths),
                Err(e) => on_access_error(e)?,
            }
        }

        tracing::debug!(
            inputs = inputs.len(),
            paths = resolved.len(),
            "inputs resolved"
        );
        Ok(resolved)
    }

    fn resolve_one(&self, input: &str) -> Result<Vec<PathBuf>> {
        let matches = self.glob.expand(input);
        if !matches.is_empty() {
            tracing::trace!(input, matches = matches.len(), "glob expanded");
            return Ok(matches);
        }

        let path = Path::new(input);
        let access_error = |source| CruftyError::PathAccess {
            path: path.to_path_buf(),
            source,
        };

        match self.fs.stat(path).map_err(access_error)? {
            FileKind::Directory => {
                let entries = self.fs.read_dir_recursive(path).map_err(access_error)?;
                Ok(entries.into_iter().map(|entry| path.join(entry)).collect())
            }
            FileKind::File => Ok(vec![path.to_path_buf()]),
            FileKind::Other => {
                tracing::trace!(input, "skipping special file");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
pub mod mock_glob;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::counter::LineCounter;
use crate::error::{CruftyError, Result};
use crate::filesystem::{FileKind, FileSystem, RealFileSystem};
use crate::output::{ErrorOutput, format_report};
use crate::path_utils::relative_to;
use crate::scanner::{GlobExpander, GlobsetExpander, IgnoreRuleSet, PathResolver};

use super::{FileResult, RunMode, RunOptions};

/// Finds files longer than a threshold.
///
/// The pipeline for one run:
/// 1. build the ignore rules (`.gitignore` + user patterns)
/// 2. resolve inputs into paths (glob first, then stat / recursive listing)
/// 3. relativize to the working directory and drop ignored paths
/// 4. stat and count each remaining regular file
/// 5. report according to [`RunMode`]
///
/// Filesystem and glob access are injected so the whole pipeline runs
/// against in-memory doubles in tests.
pub struct LengthChecker<F: FileSystem = RealFileSystem, G: GlobExpander = GlobsetExpander> {
    fs: F,
    glob: G,
    counter: LineCounter,
}

impl LengthChecker {
    /// Checker backed by the real filesystem.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capabilities(RealFileSystem, GlobsetExpander::new())
    }
}

impl Default for LengthChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem, G: GlobExpander> LengthChecker<F, G> {
    #[must_use]
    pub const fn with_capabilities(fs: F, glob: G) -> Self {
        Self {
            fs,
            glob,
            counter: LineCounter::new(),
        }
    }

    /// Run the check, writing reports to stdout and diagnostics to stderr.
    ///
    /// Returns the violating files in discovery order.
    ///
    /// # Errors
    /// Only when throwing (`throw_on_found` and not `silent`): the first path
    /// or file failure, or a [`CruftyError::ThresholdViolation`] whose message
    /// is the report.
    pub fn check(&self, inputs: &[String], options: &RunOptions) -> Result<Vec<FileResult>> {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        self.check_with_output(inputs, options, &mut stdout, &mut stderr)
    }

    /// [`check`](Self::check) with explicit output streams.
    ///
    /// # Errors
    /// Same as [`check`](Self::check).
    pub fn check_with_output<O: Write, E: Write>(
        &self,
        inputs: &[String],
        options: &RunOptions,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<Vec<FileResult>> {
        let mode = options.mode();
        let errors = ErrorOutput::new(options.color);
        let outcome = self.run(inputs, options, mode, stdout, stderr, &errors);
        mode.guard(outcome, stderr, &errors)
    }

    fn run<O: Write, E: Write>(
        &self,
        inputs: &[String],
        options: &RunOptions,
        mode: RunMode,
        stdout: &mut O,
        stderr: &mut E,
        errors: &ErrorOutput,
    ) -> Result<Vec<FileResult>> {
        let rules = IgnoreRuleSet::build(options.use_gitignore, &options.ignore, &self.fs)?;
        let cwd = self.fs.current_dir()?;

        let discovered = PathResolver::new(&self.fs, &self.glob)
            .resolve(inputs, |e| mode.recover(e, stderr, errors))?;
        let files = Self::drop_ignored(discovered, &cwd, &rules);

        let long_files =
            self.collect_long_files(&files, options.threshold, |e| mode.recover(e, stderr, errors))?;
        Self::report(long_files, options, mode, stdout)
    }

    fn drop_ignored(discovered: Vec<PathBuf>, cwd: &Path, rules: &IgnoreRuleSet) -> Vec<PathBuf> {
        let total = discovered.len();
        let files: Vec<PathBuf> = discovered
            .iter()
            .map(|path| relative_to(path, cwd))
            .filter(|path| !rules.ignores(path))
            .collect();
        tracing::debug!(
            kept = files.len(),
            ignored = total - files.len(),
            "ignore rules applied"
        );
        files
    }

    fn collect_long_files<H>(
        &self,
        files: &[PathBuf],
        threshold: usize,
        mut on_error: H,
    ) -> Result<Vec<FileResult>>
    where
        H: FnMut(CruftyError) -> Result<()>,
    {
        let mut long_files = Vec::new();
        for file in files {
            match self.measure(file) {
                Ok(Some(line_count)) if line_count > threshold => {
                    long_files.push(FileResult::new(file.clone(), line_count));
                }
                Ok(_) => {}
                Err(e) => on_error(e)?,
            }
        }
        Ok(long_files)
    }

    /// Line count of a regular file, `None` for anything else.
    fn measure(&self, file: &Path) -> Result<Option<usize>> {
        let processing_error = |source| CruftyError::FileProcessing {
            path: file.to_path_buf(),
            source,
        };

        if self.fs.stat(file).map_err(processing_error)? != FileKind::File {
            tracing::trace!(path = %file.display(), "not a regular file, skipping");
            return Ok(None);
        }

        let line_count = self
            .counter
            .count_file(file, &self.fs)
            .map_err(processing_error)?;
        tracing::trace!(path = %file.display(), line_count, "counted");
        Ok(Some(line_count))
    }

    fn report<O: Write>(
        long_files: Vec<FileResult>,
        options: &RunOptions,
        mode: RunMode,
        stdout: &mut O,
    ) -> Result<Vec<FileResult>> {
        if long_files.is_empty() {
            return Ok(long_files);
        }

        match mode {
            RunMode::Silent => Ok(long_files),
            RunMode::Throw => Err(CruftyError::ThresholdViolation {
                report: format_report(&long_files, options.threshold),
                files: long_files,
            }),
            RunMode::Warn => {
                let rendered = options
                    .format
                    .formatter(options.color)
                    .format(&long_files, options.threshold)?;
                writeln!(stdout, "{rendered}")?;
                Ok(long_files)
            }
        }
    }
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;

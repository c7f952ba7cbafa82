use crate::output::{ColorMode, OutputFormat};

use super::RunMode;

/// Default line threshold (exclusive).
pub const DEFAULT_THRESHOLD: usize = 100;

/// Options for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    /// Files with more lines than this are reported.
    pub threshold: usize,
    /// Raise on violations and failures instead of warning.
    pub throw_on_found: bool,
    /// Load `.gitignore` from the working directory.
    pub use_gitignore: bool,
    /// Never write or raise; only the return value reports violations.
    pub silent: bool,
    /// Comma-separated substrings to ignore, e.g. `.test.js,.min.`.
    pub ignore: String,
    pub color: ColorMode,
    /// Rendering of the warn-mode report.
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            throw_on_found: true,
            use_gitignore: true,
            silent: false,
            ignore: String::new(),
            color: ColorMode::Auto,
            format: OutputFormat::Text,
        }
    }
}

impl RunOptions {
    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_throw_on_found(mut self, throw_on_found: bool) -> Self {
        self.throw_on_found = throw_on_found;
        self
    }

    #[must_use]
    pub const fn with_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = use_gitignore;
        self
    }

    #[must_use]
    pub const fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    #[must_use]
    pub fn with_ignore(mut self, patterns: impl Into<String>) -> Self {
        self.ignore = patterns.into();
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The effective error/report policy. `silent` wins over `throw_on_found`.
    #[must_use]
    pub const fn mode(&self) -> RunMode {
        RunMode::from_flags(self.silent, self.throw_on_found)
    }
}

use std::path::{Component, Path};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{CruftyError, Result};
use crate::filesystem::FileSystem;

/// Name of the project ignore file, looked up in the working directory.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Gitignore-style exclusion rules for one run.
///
/// Combines the project `.gitignore` (optional, absence tolerated) with
/// user-supplied substring patterns. Matching is relative to the working
/// directory and never changes after construction.
#[derive(Debug)]
pub struct IgnoreRuleSet {
    matcher: Gitignore,
}

impl IgnoreRuleSet {
    /// Build the rule set.
    ///
    /// `extra_patterns_csv` is split on `,` without trimming; each piece `p`
    /// becomes the rule `**/*p*`, so `.test.js` ignores `src/a.test.js`.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined or a
    /// user pattern is not a valid glob. A missing or unreadable ignore file
    /// is not an error.
    pub fn build<F: FileSystem>(
        use_gitignore: bool,
        extra_patterns_csv: &str,
        fs: &F,
    ) -> Result<Self> {
        let root = fs.current_dir()?;
        let mut builder = GitignoreBuilder::new(&root);

        if use_gitignore {
            let ignore_file = root.join(GITIGNORE_FILE);
            match fs.read_to_string(&ignore_file) {
                Ok(content) => Self::add_ignore_file(&mut builder, &content),
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        "no {GITIGNORE_FILE} found, continuing with empty rules"
                    );
                }
            }
        }

        for pattern in Self::user_patterns(extra_patterns_csv) {
            builder
                .add_line(None, &pattern)
                .map_err(|source| CruftyError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }

        let matcher = builder.build().map_err(|source| CruftyError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source,
        })?;
        tracing::debug!(rules = matcher.num_ignores(), "ignore rules loaded");

        Ok(Self { matcher })
    }

    /// An empty rule set that ignores nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
        }
    }

    /// Whether a path relative to the working directory is ignored.
    ///
    /// A path is ignored if it, or any of its parent directories, matches.
    /// Absolute paths and paths escaping the root (`..`) are never ignored.
    #[must_use]
    pub fn ignores(&self, relative_path: &Path) -> bool {
        if relative_path.as_os_str().is_empty()
            || relative_path.has_root()
            || relative_path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(relative_path, false)
            .is_ignore()
    }

    fn add_ignore_file(builder: &mut GitignoreBuilder, content: &str) {
        for line in content.lines() {
            if let Err(e) = builder.add_line(None, line) {
                tracing::debug!(line, error = %e, "skipping invalid ignore line");
            }
        }
    }

    fn user_patterns(csv: &str) -> Vec<String> {
        if csv.is_empty() {
            return Vec::new();
        }
        csv.split(',').map(|p| format!("**/*{p}*")).collect()
    }
}

#[cfg(test)]
#[path = "ignore_rules_tests.rs"]
mod tests;

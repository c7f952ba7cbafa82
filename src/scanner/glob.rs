use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use walkdir::WalkDir;

/// Expands a shell-style glob pattern into concrete file paths.
pub trait GlobExpander {
    /// Return every regular file the pattern matches, dotfiles included.
    ///
    /// No match is an empty vector, not an error.
    fn expand(&self, pattern: &str) -> Vec<PathBuf>;
}

impl<T: GlobExpander + ?Sized> GlobExpander for &T {
    fn expand(&self, pattern: &str) -> Vec<PathBuf> {
        (**self).expand(pattern)
    }
}

/// Glob expansion against the real filesystem, built on `globset` + `walkdir`.
///
/// Only patterns with glob metacharacters expand. A literal path returns no
/// matches so callers stat it directly. `*` stays within one path component,
/// `**` crosses directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobsetExpander;

impl GlobsetExpander {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GlobExpander for GlobsetExpander {
    fn expand(&self, pattern: &str) -> Vec<PathBuf> {
        if !has_glob_meta(pattern) {
            return Vec::new();
        }

        let Ok(glob) = GlobBuilder::new(pattern).literal_separator(true).build() else {
            tracing::debug!(pattern, "not a valid glob, treating as a literal path");
            return Vec::new();
        };
        let matcher = glob.compile_matcher();

        let (base, implicit_base) = literal_base(pattern);
        let mut walker = WalkDir::new(&base).sort_by_file_name();
        if let Some(depth) = max_depth(pattern) {
            walker = walker.max_depth(depth);
        }

        walker
            .into_iter()
            .filter_map(std::result::Result::ok)
            // Follows symlinks, like `FileSystem::stat` does for literal inputs.
            .filter(|e| e.path().is_file())
            .map(|e| {
                let path = e.into_path();
                if implicit_base {
                    path.strip_prefix(".").map(Path::to_path_buf).unwrap_or(path)
                } else {
                    path
                }
            })
            .filter(|p| matcher.is_match(p))
            .collect()
    }
}

/// Whether a component contains characters `globset` treats specially.
fn has_glob_meta(text: &str) -> bool {
    text.contains(['*', '?', '[', '{'])
}

/// The leading run of literal components, used as the walk root.
///
/// Returns `(".", true)` when the pattern starts with a wildcard.
fn literal_base(pattern: &str) -> (PathBuf, bool) {
    let mut base = PathBuf::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if has_glob_meta(&text) {
            break;
        }
        base.push(component.as_os_str());
    }
    if base.as_os_str().is_empty() {
        (PathBuf::from("."), true)
    } else {
        (base, false)
    }
}

/// How deep the walk has to go below the literal base, or `None` for `**`.
fn max_depth(pattern: &str) -> Option<usize> {
    let components: Vec<_> = Path::new(pattern).components().collect();
    let first_glob = components
        .iter()
        .position(|c| has_glob_meta(&c.as_os_str().to_string_lossy()))?;
    let rest = &components[first_glob..];
    if rest.iter().any(|c| c.as_os_str().to_string_lossy().contains("**")) {
        None
    } else {
        Some(rest.len())
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;

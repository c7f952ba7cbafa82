use std::collections::HashMap;
use std::path::PathBuf;

use super::GlobExpander;

/// Glob double that only knows the patterns it was told about.
#[derive(Default)]
pub struct MockGlob {
    patterns: HashMap<String, Vec<PathBuf>>,
}

impl MockGlob {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: &str, matches: &[&str]) -> Self {
        self.patterns.insert(
            pattern.to_string(),
            matches.iter().map(PathBuf::from).collect(),
        );
        self
    }
}

impl GlobExpander for MockGlob {
    fn expand(&self, pattern: &str) -> Vec<PathBuf> {
        self.patterns.get(pattern).cloned().unwrap_or_default()
    }
}

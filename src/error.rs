use std::path::PathBuf;

use thiserror::Error;

use crate::checker::FileResult;

#[derive(Error, Debug)]
pub enum CruftyError {
    /// An input path could not be stat'd while resolving the file set.
    #[error("Error accessing path: {} {source}", path.display())]
    PathAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resolved file could not be stat'd or read while counting lines.
    #[error("Error processing file: {} {source}", path.display())]
    FileProcessing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more files exceed the threshold. The message is the plain report.
    #[error("{report}")]
    ThresholdViolation {
        report: String,
        files: Vec<FileResult>,
    },

    #[error("Invalid ignore pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CruftyError {
    /// Short category name used in diagnostics and tests.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathAccess { .. } => "PathAccess",
            Self::FileProcessing { .. } => "FileProcessing",
            Self::ThresholdViolation { .. } => "ThresholdViolation",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Cause that the message itself does not mention.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Violating files carried by a threshold violation, if any.
    #[must_use]
    pub fn violations(&self) -> Option<&[FileResult]> {
        match self {
            Self::ThresholdViolation { files, .. } => Some(files),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CruftyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

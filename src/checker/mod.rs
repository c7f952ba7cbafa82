mod length;
mod mode;
mod options;
mod result;

pub use length::LengthChecker;
pub use mode::RunMode;
pub use options::{DEFAULT_THRESHOLD, RunOptions};
pub use result::FileResult;

use crate::error::Result;

/// Check inputs against the real filesystem, writing to stdout/stderr.
///
/// Shorthand for `LengthChecker::new().check(inputs, options)`.
///
/// # Errors
/// See [`LengthChecker::check`].
pub fn check_file_lengths(inputs: &[String], options: &RunOptions) -> Result<Vec<FileResult>> {
    LengthChecker::new().check(inputs, options)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub mod checker;
pub mod cli;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use checker::{FileResult, LengthChecker, RunMode, RunOptions, check_file_lengths};
pub use error::{CruftyError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_THRESHOLD_EXCEEDED: i32 = 1;
/// Unrecoverable failures share the violation exit code.
pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

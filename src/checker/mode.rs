use std::io::Write;

use crate::error::{CruftyError, Result};
use crate::output::ErrorOutput;

use super::FileResult;

/// How a run reacts to failures and violations.
///
/// | event                  | `Throw`        | `Warn`                | `Silent`       |
/// |------------------------|----------------|-----------------------|----------------|
/// | path / file failure    | raise          | diagnostic, skip      | skip           |
/// | threshold exceeded     | raise report   | print report, return  | return         |
/// | unexpected failure     | raise          | diagnostic, empty     | empty          |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Throw,
    Warn,
    Silent,
}

impl RunMode {
    #[must_use]
    pub const fn from_flags(silent: bool, throw_on_found: bool) -> Self {
        if silent {
            Self::Silent
        } else if throw_on_found {
            Self::Throw
        } else {
            Self::Warn
        }
    }

    /// Apply the policy to a per-path failure. `Ok` means skip and continue.
    ///
    /// # Errors
    /// Returns `error` unchanged in `Throw` mode.
    pub fn recover<W: Write>(
        self,
        error: CruftyError,
        diagnostics: &mut W,
        errors: &ErrorOutput,
    ) -> Result<()> {
        match self {
            Self::Throw => Err(error),
            Self::Warn => {
                errors.write_error(diagnostics, &error.to_string(), error.detail().as_deref());
                Ok(())
            }
            Self::Silent => {
                tracing::trace!(error = %error, "suppressed");
                Ok(())
            }
        }
    }

    /// Top-level guard around a whole run.
    ///
    /// # Errors
    /// Only `Throw` mode lets an error through.
    pub fn guard<W: Write>(
        self,
        outcome: Result<Vec<FileResult>>,
        diagnostics: &mut W,
        errors: &ErrorOutput,
    ) -> Result<Vec<FileResult>> {
        match outcome {
            Ok(files) => Ok(files),
            Err(error) => self.recover(error, diagnostics, errors).map(|()| Vec::new()),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;

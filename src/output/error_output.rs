//! Diagnostic output formatting with color support.
//!
//! Format: `✖ {message}` followed by an optional `  × {detail}` line.

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a formatter for stderr with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        // Diagnostic write failures are ignored.
        if self.use_colors {
            let _ = writeln!(w, "{}{}✖{} {message}", ansi::BOLD, ansi::RED, ansi::RESET);
        } else {
            let _ = writeln!(w, "✖ {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;

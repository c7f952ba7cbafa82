use std::fmt::Write;
use std::io::IsTerminal;

use crate::checker::FileResult;
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

/// Render the plain-text violation report.
///
/// ```text
/// Files exceeding 100 lines:
///   • src/big.rs (151 lines)
/// ```
///
/// Files are listed in the order given.
#[must_use]
pub fn format_report(files: &[FileResult], threshold: usize) -> String {
    TextFormatter::with_colors(false).render(files, threshold)
}

/// Text report formatter with optional ANSI decoration.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Formatter for standard output, resolving `Auto` against stdout.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_colors(mode.use_colors(std::io::stdout().is_terminal()))
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn render(&self, files: &[FileResult], threshold: usize) -> String {
        let header_color = format!("{}{}", ansi::BOLD, ansi::YELLOW);
        let mut output = self.paint(&format!("Files exceeding {threshold} lines:"), &header_color);

        for file in files {
            let _ = write!(
                output,
                "\n  {} {} {}",
                self.paint("•", ansi::RED),
                self.paint(&file.path.display().to_string(), ansi::CYAN),
                self.paint(&format!("({} lines)", file.line_count), ansi::DIM),
            );
        }

        output
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, files: &[FileResult], threshold: usize) -> Result<String> {
        Ok(self.render(files, threshold))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

use clap::{Parser, ValueEnum};

use crate::checker::{DEFAULT_THRESHOLD, RunOptions};
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "crufty")]
#[command(author, version, about = "Find files that have grown past a line limit")]
#[command(long_about = "Report files whose line count exceeds a threshold.\n\n\
    Patterns may be globs, files or directories (scanned recursively); \
    with no patterns the current directory is scanned. Paths matched by \
    .gitignore or --ignore are skipped.\n\n\
    Exit codes:\n  \
    0 - No long files, or --warn was given\n  \
    1 - Long files found, or an error occurred")]
pub struct Cli {
    /// Globs, files or directories to check (default: current directory)
    pub patterns: Vec<String>,

    /// Report files with more lines than this
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: usize,

    /// Print the report and exit successfully instead of failing
    #[arg(short, long)]
    pub warn: bool,

    /// Do not read .gitignore from the current directory
    #[arg(long)]
    pub no_gitignore: bool,

    /// Print nothing; only the exit code reports long files
    #[arg(short, long)]
    pub silent: bool,

    /// Comma-separated substrings to ignore (e.g. .test.js,.min.)
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Options for the checker as requested on the command line.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions::default()
            .with_threshold(self.threshold)
            .with_throw_on_found(!self.warn)
            .with_gitignore(!self.no_gitignore)
            .with_silent(self.silent)
            .with_ignore(self.ignore.clone().unwrap_or_default())
            .with_color(self.color.into())
            .with_format(self.format)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

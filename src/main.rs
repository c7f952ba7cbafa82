use std::io::Write;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crufty::cli::Cli;
use crufty::output::{ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter};
use crufty::{
    CruftyError, EXIT_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED, FileResult, LengthChecker,
    RunMode, RunOptions,
};

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let options = cli.run_options();
    tracing::debug!(?options, patterns = ?cli.patterns, "starting check");
    let outcome = LengthChecker::new().check(&cli.patterns, &options);

    let exit_code = {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        finish(outcome, &options, &mut stdout, &mut stderr)
    };
    std::process::exit(exit_code);
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn setup_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "crufty=warn",
        1 => "crufty=debug",
        _ => "crufty=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Print whatever the checker raised and pick the exit code.
fn finish<O: Write, E: Write>(
    outcome: crufty::Result<Vec<FileResult>>,
    options: &RunOptions,
    stdout: &mut O,
    stderr: &mut E,
) -> i32 {
    match outcome {
        Ok(files) => {
            if files.is_empty() || options.mode() == RunMode::Warn {
                EXIT_SUCCESS
            } else {
                EXIT_THRESHOLD_EXCEEDED
            }
        }
        Err(e) => {
            report_error(&e, options, stdout, stderr);
            match e {
                CruftyError::ThresholdViolation { .. } => EXIT_THRESHOLD_EXCEEDED,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn report_error<O: Write, E: Write>(
    error: &CruftyError,
    options: &RunOptions,
    stdout: &mut O,
    stderr: &mut E,
) {
    let errors = ErrorOutput::new(options.color);

    if let (OutputFormat::Json, Some(files)) = (options.format, error.violations()) {
        match JsonFormatter.format(files, options.threshold) {
            Ok(json) => {
                if let Err(e) = writeln!(stdout, "{json}") {
                    errors.write_error(stderr, &e.to_string(), None);
                }
            }
            Err(e) => errors.write_error(stderr, &e.to_string(), None),
        }
        return;
    }

    errors.write_error(stderr, &error.to_string(), error.detail().as_deref());
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

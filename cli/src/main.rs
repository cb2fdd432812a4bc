//! `skillsjars` CLI entrypoint.
//!
//! Extracts skill bundles from SkillsJar dependencies declared in a project
//! manifest.

use camino::Utf8PathBuf;
use clap::Parser;
use skillsjars::{ExtractError, ExtractionSummary, Result};
use skillsjars_cli::app::{run, summary_line};
use skillsjars_cli::cli::Cli;
use std::io::{IsTerminal, Write};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    if let Err(err) = init_logging(cli.log_level()) {
        write_stderr_line(&mut stderr, format_args!("failed to install logger: {err}"));
    }

    let run_result = current_dir().and_then(|cwd| run(&cli, &cwd));
    let exit_code = exit_code_for_run_result(run_result, cli.quiet, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Install a stderr formatter; engine `log` records reach it through the
/// `tracing-log` bridge.
fn init_logging(level: LevelFilter) -> std::result::Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .finish()
        .try_init()
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::try_from(cwd).map_err(|e| ExtractError::Io(e.into_io_error()))
}

fn exit_code_for_run_result(
    result: Result<ExtractionSummary>,
    quiet: bool,
    stderr: &mut dyn Write,
) -> i32 {
    match result {
        Ok(summary) => {
            if !quiet {
                write_stderr_line(stderr, summary_line(&summary));
            }
            0
        }
        Err(err) => {
            write_stderr_line(stderr, format_args!("error: {err}"));
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

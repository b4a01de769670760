//! Confmerge: marker-based template merger for shell and vim config files.
//!
//! This is the main entry point for the `confmerge` CLI. It parses
//! arguments, runs the merge engine, renders the summary, and maps the
//! outcome to an exit code (0 success, 1 error, 2 fresh install).

mod cli;
pub mod classify;
pub mod dedup;
pub mod dialect;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod locate;
pub mod markers;
pub mod merge;
pub mod report;

use cli::Cli;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    match merge::merge(
        &cli.target,
        &cli.template,
        &cli.section,
        cli.dialect,
        cli.dry_run,
    ) {
        Ok(result) => {
            if cli.json {
                report::render_json(&result);
            } else {
                report::render(&result, use_color);
            }
            ExitCode::from(result.exit_code as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

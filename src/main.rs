//! Graphwalk - graph algorithms from the command line
//!
//! Loads graphs, grids, matrices and word lists from files and runs
//! traversal, connectivity, shortest-path and cycle checks over them.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::{Error as ClapError, ErrorKind};
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphwalkError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let json_requested = json_in_argv(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to clap even in JSON mode
        Err(err) if !json_requested || is_informational(&err) => err.exit(),
        Err(err) => {
            let error = parse_failure(&err);
            eprintln!("{}", error.to_json());
            return exit_with(&error);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let Err(error) = commands::dispatch::run(&cli, start) else {
        return ExitCode::from(GraphwalkExitCode::Success as u8);
    };
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {error}"),
        OutputFormat::Human => {}
    }
    exit_with(&error)
}

fn exit_with(error: &GraphwalkError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

fn is_informational(err: &ClapError) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Map a clap failure onto the error type the JSON envelope reports.
fn parse_failure(err: &ClapError) -> GraphwalkError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => GraphwalkError::UsageError(err.to_string()),
        _ => GraphwalkError::Other(err.to_string()),
    }
}

/// Whether raw arguments ask for `--format json`.
///
/// Checked before clap runs, since a parse failure leaves no `Cli` to read.
fn json_in_argv(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_json_in_argv() {
        assert!(json_in_argv(argv(&["--format", "json", "path"])));
        assert!(json_in_argv(argv(&["islands", "--format=json"])));
        assert!(!json_in_argv(argv(&["--format", "human"])));
        assert!(!json_in_argv(argv(&["json", "--format"])));
        assert!(!json_in_argv(argv(&[])));
    }
}

//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::error::Result;
use tracing::debug;

pub mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), cwd = %ctx.cwd.display(), "resolve_cwd");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::Config;
use graphwalk_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { cli, cwd, start }
    }

    /// Path of the config file in effect, if any
    pub fn config_source(&self) -> Result<Option<PathBuf>> {
        Config::locate(self.cli.config.as_deref(), &self.cwd)
    }

    /// Load the effective configuration
    pub fn config(&self) -> Result<Config> {
        Config::discover(self.cli.config.as_deref(), &self.cwd)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph traversal, connectivity and shortest paths from the command line.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}

//! `graphwalk config show|init`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::print_json;
use crate::cli::commands::ConfigCommands;
use crate::cli::OutputFormat;
use graphwalk_core::bail_usage;
use graphwalk_core::config::Config;
use graphwalk_core::error::Result;

pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Init { force, path } => init(ctx, *force, path.as_deref()),
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let source = ctx.config_source()?;
    let config = match &source {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "source": source.as_ref().map(|p| p.display().to_string()),
            "config": serde_json::to_value(&config)?,
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                match &source {
                    Some(path) => println!("# source: {}", path.display()),
                    None => println!("# source: built-in defaults"),
                }
            }
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn init(ctx: &CommandContext, force: bool, path: Option<&std::path::Path>) -> Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::user_config_path()?,
    };
    if target.exists() && !force {
        bail_usage!(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        ));
    }

    Config::default().save(&target)?;
    tracing::debug!(path = %target.display(), "config_written");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({ "path": target.display().to_string() })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("wrote {}", target.display());
            }
            Ok(())
        }
    }
}

//! `graphwalk components`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::load_graph;
use super::print_json;
use crate::cli::args::GraphArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::graph::find_connected_components;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(args, &config)?;
    let components = find_connected_components(&graph);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "count": components.len(),
            "components": components,
        })),
        OutputFormat::Human => {
            for (i, members) in components.iter().enumerate() {
                println!("{}: {}", i + 1, members.join(" "));
            }
            if !ctx.cli.quiet {
                println!("{} component(s)", components.len());
            }
            Ok(())
        }
    }
}

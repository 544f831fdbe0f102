//! `graphwalk reachable`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::load_graph;
use super::print_json;
use crate::cli::commands::EndpointArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::graph::has_path;

pub fn execute(ctx: &CommandContext, args: &EndpointArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(&args.graph, &config)?;
    let reachable = has_path(&graph, &args.from, &args.to);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "from": args.from,
            "to": args.to,
            "reachable": reachable,
        })),
        OutputFormat::Human => {
            let verb = if reachable { "reaches" } else { "does not reach" };
            println!("{} {verb} {}", args.from, args.to);
            Ok(())
        }
    }
}

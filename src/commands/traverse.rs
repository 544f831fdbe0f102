//! `graphwalk traverse`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::{load_graph, require_vertex};
use super::print_json;
use crate::cli::commands::TraverseArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::graph::traverse;

pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(&args.graph, &config)?;
    require_vertex(&graph, &args.start)?;

    let order = args.order.unwrap_or(config.traversal.order);
    let visited = traverse(&graph, &args.start, order);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "start": args.start,
            "order": order.to_string(),
            "visited": visited,
        })),
        OutputFormat::Human => {
            for vertex in &visited {
                println!("{vertex}");
            }
            if !ctx.cli.quiet {
                println!("({} visited, {order})", visited.len());
            }
            Ok(())
        }
    }
}

//! `graphwalk path`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::load_graph;
use super::print_json;
use crate::cli::commands::EndpointArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::graph::shortest_path_unweighted;

pub fn execute(ctx: &CommandContext, args: &EndpointArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(&args.graph, &config)?;
    let path = shortest_path_unweighted(&graph, &args.from, &args.to);
    let hops = path.len().checked_sub(1);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "from": args.from,
            "to": args.to,
            "path": path,
            "hops": hops,
        })),
        OutputFormat::Human => {
            match hops {
                Some(hops) => {
                    println!("{}", path.join(" -> "));
                    if !ctx.cli.quiet {
                        println!("({hops} hop(s))");
                    }
                }
                None => println!("no path from {} to {}", args.from, args.to),
            }
            Ok(())
        }
    }
}

//! `graphwalk cycle`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::load_graph;
use super::print_json;
use crate::cli::args::GraphArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{has_cycle, topological_order};

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let mut config = ctx.config()?;
    // Every undirected edge is a 2-cycle, so read edges as directed unless told otherwise
    config.graph.directed = true;
    let graph = load_graph(args, &config)?;
    let cyclic = has_cycle(&graph);
    let order = if cyclic {
        None
    } else {
        topological_order(&graph)
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "has_cycle": cyclic,
            "order": order,
        })),
        OutputFormat::Human => {
            match order {
                Some(order) => {
                    println!("acyclic");
                    if !ctx.cli.quiet {
                        println!("order: {}", order.join(" "));
                    }
                }
                None => println!("cycle detected"),
            }
            Ok(())
        }
    }
}

//! `graphwalk valid-tree`

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::print_json;
use crate::cli::commands::ValidTreeArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::Result;
use graphwalk_core::graph::valid_tree;

pub fn execute(ctx: &CommandContext, args: &ValidTreeArgs) -> Result<()> {
    let is_tree = valid_tree(args.nodes, &args.edge);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "nodes": args.nodes,
            "edges": args.edge.len(),
            "valid_tree": is_tree,
        })),
        OutputFormat::Human => {
            println!("{}", if is_tree { "valid tree" } else { "not a tree" });
            Ok(())
        }
    }
}

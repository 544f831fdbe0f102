//! `graphwalk clone-graph`
//!
//! Input is a JSON adjacency list in which node `i` (1-based) lists the
//! values of its neighbors, e.g. `[[2, 4], [1, 3], [2, 4], [1, 3]]`.

use serde_json::json;

use super::dispatch::command::CommandContext;
use super::input::{read_input, source_name};
use super::print_json;
use crate::cli::args::InputArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::problems::{build_node_graph, clone_graph, detach, node_graph_to_graph};

pub fn execute(ctx: &CommandContext, args: &InputArgs) -> Result<()> {
    let content = read_input(&args.input)?;
    let adjacency: Vec<Vec<usize>> = serde_json::from_str(&content)
        .map_err(|e| GraphwalkError::invalid_input(source_name(&args.input), e.to_string()))?;

    let copied: Vec<(i32, Vec<i32>)> = match build_node_graph(&adjacency) {
        Some(root) => {
            let copy = clone_graph(&root);
            let graph = node_graph_to_graph(&copy);
            detach(&root);
            detach(&copy);

            let mut values: Vec<i32> = graph.vertices().copied().collect();
            values.sort_unstable();
            values
                .into_iter()
                .map(|v| (v, graph.neighbors(&v).map(|(n, _)| *n).collect::<Vec<i32>>()))
                .collect()
        }
        None => Vec::new(),
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = copied
                .iter()
                .map(|(val, neighbors)| json!({ "val": val, "neighbors": neighbors }))
                .collect();
            print_json(&json!({ "count": copied.len(), "nodes": nodes }))
        }
        OutputFormat::Human => {
            for (val, neighbors) in &copied {
                let neighbors: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
                println!("{val}: {}", neighbors.join(" "));
            }
            if !ctx.cli.quiet {
                println!("({} node(s) copied)", copied.len());
            }
            Ok(())
        }
    }
}

//! `graphwalk dijkstra`

use serde_json::{json, Map, Value};

use super::dispatch::command::CommandContext;
use super::input::{load_graph, require_vertex};
use super::print_json;
use crate::cli::commands::DijkstraArgs;
use crate::cli::OutputFormat;
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::graph::{dijkstra, dijkstra_path, Graph, Weight};

/// Unreachable distances are infinite, which JSON cannot carry
fn distance_json(distance: Weight) -> Value {
    if distance.is_finite() {
        json!(distance)
    } else {
        Value::Null
    }
}

pub fn execute(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(&args.graph, &config)?;
    require_vertex(&graph, &args.from)?;

    match &args.to {
        Some(target) => single_target(ctx, &graph, &args.from, target),
        None => all_targets(ctx, &graph, &args.from),
    }
}

fn all_targets(ctx: &CommandContext, graph: &Graph<String>, source: &str) -> Result<()> {
    let paths = dijkstra(graph, &source.to_string())
        .ok_or_else(|| GraphwalkError::vertex_not_found(source))?;

    let rows: Vec<(&String, Weight)> = graph
        .vertices()
        .map(|v| (v, paths.distance(v).unwrap_or(Weight::INFINITY)))
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            let distances: Map<String, Value> = rows
                .iter()
                .map(|(v, d)| ((*v).clone(), distance_json(*d)))
                .collect();
            print_json(&json!({ "source": source, "distances": distances }))
        }
        OutputFormat::Human => {
            for (vertex, distance) in rows {
                if distance.is_finite() {
                    println!("{vertex}\t{distance}");
                } else {
                    println!("{vertex}\tunreachable");
                }
            }
            Ok(())
        }
    }
}

fn single_target(
    ctx: &CommandContext,
    graph: &Graph<String>,
    source: &str,
    target: &str,
) -> Result<()> {
    require_vertex(graph, target)?;
    let found = dijkstra_path(graph, &source.to_string(), &target.to_string());

    match ctx.cli.format {
        OutputFormat::Json => {
            let (distance, path) = match &found {
                Some((distance, path)) => (distance_json(*distance), path.clone()),
                None => (Value::Null, Vec::new()),
            };
            print_json(&json!({
                "source": source,
                "target": target,
                "distance": distance,
                "path": path,
            }))
        }
        OutputFormat::Human => {
            match found {
                Some((distance, path)) => {
                    println!("{}", path.join(" -> "));
                    if !ctx.cli.quiet {
                        println!("(distance {distance})");
                    }
                }
                None => println!("no path from {source} to {target}"),
            }
            Ok(())
        }
    }
}

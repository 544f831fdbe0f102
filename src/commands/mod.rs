//! CLI commands for graphwalk

pub mod circles;
pub mod clone_graph;
pub mod components;
pub mod config;
pub mod cycle;
pub mod dijkstra;
pub mod dispatch;
pub mod grid_path;
pub mod input;
pub mod islands;
pub mod ladder;
pub mod path;
pub mod reachable;
pub mod schedule;
pub mod traverse;
pub mod valid_tree;

use graphwalk_core::error::Result;

/// Pretty-print a JSON value to stdout
pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

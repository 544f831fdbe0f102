//! Reading command inputs from files or stdin

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use crate::cli::args::GraphArgs;
use graphwalk_core::config::Config;
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::graph::{Graph, GraphDocument};
use graphwalk_core::trace_time;

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Name used for an input in error messages
pub fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a whole input file, or stdin for `-`
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        return Ok(io::read_to_string(io::stdin())?);
    }
    Ok(fs::read_to_string(path)?)
}

/// Load a graph document and build it with the configured defaults.
///
/// `--directed`/`--undirected` win over the document, which wins over config.
pub fn load_graph(args: &GraphArgs, config: &Config) -> Result<Graph<String>> {
    let start = Instant::now();

    let mut document = if is_stdin(&args.graph) {
        let content = read_input(&args.graph)?;
        GraphDocument::from_json(&content)
            .map_err(|e| GraphwalkError::invalid_input("stdin", e.to_string()))?
    } else {
        GraphDocument::load(&args.graph)?
    };
    if let Some(directed) = args.direction_override() {
        document.directed = Some(directed);
    }

    let graph = document.into_graph(config.graph.directed, config.graph.default_weight);
    trace_time!(
        start,
        "load_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    Ok(graph)
}

/// Fail with a data error when `vertex` is not in the graph
pub fn require_vertex(graph: &Graph<String>, vertex: &str) -> Result<()> {
    if graph.contains(&vertex.to_string()) {
        Ok(())
    } else {
        Err(GraphwalkError::vertex_not_found(vertex))
    }
}

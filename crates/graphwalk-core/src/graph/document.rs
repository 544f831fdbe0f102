//! JSON graph documents
//!
//! ```json
//! { "directed": false, "vertices": ["solo"], "edges": [["a", "b"], ["b", "c", 2.5]] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphwalkError, Result};
use crate::graph::store::{EdgeSpec, Graph, Weight};

/// Serialized form of a graph with string vertex labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    /// Falls back to the caller's default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,

    /// Vertices to register even if no edge touches them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec<String>>,
}

impl GraphDocument {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| GraphwalkError::invalid_input(path.display(), e.to_string()))
    }

    /// Whether edges are directed, given the caller's default
    pub fn is_directed(&self, default_directed: bool) -> bool {
        self.directed.unwrap_or(default_directed)
    }

    /// Build the graph. Listed vertices come first, then edge endpoints.
    pub fn into_graph(self, default_directed: bool, default_weight: Weight) -> Graph<String> {
        let directed = self.is_directed(default_directed);
        let mut graph = Graph::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in self.edges {
            let (from, to, weight) = edge.into_parts(default_weight);
            graph.add_edge(from, to, weight, directed);
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed,
            "graph_loaded"
        );
        graph
    }
}

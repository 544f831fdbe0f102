use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::GraphwalkError;
use crate::graph::store::{Graph, Vertex, VertexId};

/// Visitation strategy for [`traverse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Recursive depth-first pre-order
    #[default]
    Dfs,
    /// Depth-first with an explicit stack; same order as `Dfs`
    DfsIterative,
    /// Breadth-first level order
    Bfs,
}

impl FromStr for TraversalOrder {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(TraversalOrder::Dfs),
            "dfs-iterative" | "dfs_iterative" => Ok(TraversalOrder::DfsIterative),
            "bfs" => Ok(TraversalOrder::Bfs),
            other => Err(GraphwalkError::UnknownOrder(other.to_string())),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Dfs => write!(f, "dfs"),
            TraversalOrder::DfsIterative => write!(f, "dfs-iterative"),
            TraversalOrder::Bfs => write!(f, "bfs"),
        }
    }
}

/// Visit everything reachable from `start` in the requested order.
pub fn traverse<V: Vertex>(graph: &Graph<V>, start: &V, order: TraversalOrder) -> Vec<V> {
    match order {
        TraversalOrder::Dfs => dfs(graph, start),
        TraversalOrder::DfsIterative => dfs_iterative(graph, start),
        TraversalOrder::Bfs => bfs(graph, start),
    }
}

/// Depth-first pre-order from `start`, following edges in stored order.
///
/// Recurses once per vertex on the current path, so a path of a few hundred
/// thousand vertices can exhaust the thread stack. [`dfs_iterative`] gives
/// the same order without that limit.
///
/// Returns an empty vector when `start` is not in the graph.
#[tracing::instrument(skip(graph, start), level = "debug", fields(vertices = graph.vertex_count()))]
pub fn dfs<V: Vertex>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let Some(start_id) = graph.id_of(start) else {
        return Vec::new();
    };

    let mut visited = vec![false; graph.id_bound()];
    let mut order = Vec::new();
    dfs_recurse(graph, start_id, &mut visited, &mut order);

    trace!(visited = order.len(), "dfs");
    graph.labels_of(order)
}

fn dfs_recurse<V: Vertex>(
    graph: &Graph<V>,
    id: VertexId,
    visited: &mut [bool],
    order: &mut Vec<VertexId>,
) {
    visited[id] = true;
    order.push(id);
    for edge in graph.edges_of(id) {
        if !visited[edge.target] {
            dfs_recurse(graph, edge.target, visited, order);
        }
    }
}

/// Depth-first pre-order using an explicit stack.
///
/// Neighbors are pushed in reverse so they pop in stored order, and a vertex
/// is marked when popped. The result matches [`dfs`] exactly.
#[tracing::instrument(skip(graph, start), level = "debug", fields(vertices = graph.vertex_count()))]
pub fn dfs_iterative<V: Vertex>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let Some(start_id) = graph.id_of(start) else {
        return Vec::new();
    };

    let mut visited = vec![false; graph.id_bound()];
    let mut order = Vec::new();
    dfs_visit(graph, start_id, &mut visited, &mut order);

    trace!(visited = order.len(), "dfs_iterative");
    graph.labels_of(order)
}

/// Stack-driven pre-order walk from `id`, appending newly reached slots.
///
/// Slots already marked in `visited` are skipped, which lets the
/// connectivity analyzer reuse one `visited` buffer across roots.
pub(crate) fn dfs_visit<V: Vertex>(
    graph: &Graph<V>,
    id: VertexId,
    visited: &mut [bool],
    order: &mut Vec<VertexId>,
) {
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        for edge in graph.edges_of(current).iter().rev() {
            if !visited[edge.target] {
                stack.push(edge.target);
            }
        }
    }
}

/// Breadth-first level order from `start`.
#[tracing::instrument(skip(graph, start), level = "debug", fields(vertices = graph.vertex_count()))]
pub fn bfs<V: Vertex>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let Some(start_id) = graph.id_of(start) else {
        return Vec::new();
    };

    let order: Vec<VertexId> = bfs_levels(graph, start_id)
        .into_iter()
        .map(|(id, _)| id)
        .collect();

    trace!(visited = order.len(), "bfs");
    graph.labels_of(order)
}

/// Hop count from `start` to every vertex it reaches.
pub fn bfs_depths<V: Vertex>(graph: &Graph<V>, start: &V) -> HashMap<V, usize> {
    let Some(start_id) = graph.id_of(start) else {
        return HashMap::new();
    };

    bfs_levels(graph, start_id)
        .into_iter()
        .filter_map(|(id, depth)| graph.label(id).map(|label| (label.clone(), depth)))
        .collect()
}

/// Level-order walk yielding `(vertex, depth)` in dequeue order.
fn bfs_levels<V: Vertex>(graph: &Graph<V>, start: VertexId) -> Vec<(VertexId, usize)> {
    let mut visited = vec![false; graph.id_bound()];
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        order.push((current, depth));
        for edge in graph.edges_of(current) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                queue.push_back((edge.target, depth + 1));
            }
        }
    }

    order
}

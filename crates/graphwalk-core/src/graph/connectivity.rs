//! Path existence and connected components

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::store::{Graph, Vertex};
use crate::graph::traversal::dfs_visit;

/// Whether `end` can be reached from `start` along stored edges.
///
/// `start == end` is trivially reachable. Otherwise a breadth-first search
/// stops as soon as `end` is discovered.
#[tracing::instrument(skip(graph, start, end), level = "debug")]
pub fn has_path<V: Vertex>(graph: &Graph<V>, start: &V, end: &V) -> bool {
    if start == end {
        return true;
    }
    let (Some(start_id), Some(end_id)) = (graph.id_of(start), graph.id_of(end)) else {
        return false;
    };

    let mut visited = vec![false; graph.id_bound()];
    let mut queue = VecDeque::from([start_id]);
    visited[start_id] = true;

    while let Some(current) = queue.pop_front() {
        for edge in graph.edges_of(current) {
            if edge.target == end_id {
                return true;
            }
            if !visited[edge.target] {
                visited[edge.target] = true;
                queue.push_back(edge.target);
            }
        }
    }

    false
}

/// Group vertices by reachability.
///
/// A depth-first search starts from each vertex not yet assigned (in
/// insertion order) and everything it reaches becomes one component. Every
/// vertex lands in exactly one group.
///
/// For a directed graph built without mirrored edges the groups follow
/// forward reachability only: a vertex reached later from an earlier
/// component's member is not merged back into it.
#[tracing::instrument(skip(graph), level = "debug", fields(vertices = graph.vertex_count()))]
pub fn find_connected_components<V: Vertex>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let mut visited = vec![false; graph.id_bound()];
    let mut components = Vec::new();

    for id in graph.vertex_ids() {
        if visited[id] {
            continue;
        }
        let mut members = Vec::new();
        dfs_visit(graph, id, &mut visited, &mut members);
        components.push(graph.labels_of(members));
    }

    debug!(components = components.len(), "find_connected_components");
    components
}

/// Number of groups [`find_connected_components`] would return.
pub fn count_connected_components<V: Vertex>(graph: &Graph<V>) -> usize {
    find_connected_components(graph).len()
}

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, VecDeque};

use tracing::{debug, trace};

use crate::graph::store::{Graph, Vertex, VertexId, Weight};

/// Min-heap entry for Dijkstra, ordered by tentative distance.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Distances and predecessors from one Dijkstra run.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    source: V,
    distances: HashMap<V, Weight>,
    parents: HashMap<V, V>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance to `vertex`; infinite when unreachable, `None` when unknown.
    pub fn distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    /// The full distance map, one entry per vertex in the graph.
    pub fn distances(&self) -> &HashMap<V, Weight> {
        &self.distances
    }

    pub fn into_distances(self) -> HashMap<V, Weight> {
        self.distances
    }

    /// Walk parent pointers back from `target`.
    ///
    /// Empty when `target` was not reached. The walk stops after one step per
    /// known vertex, so it always terminates.
    pub fn path_to(&self, target: &V) -> Vec<V> {
        match self.distances.get(target) {
            Some(d) if d.is_finite() => {}
            _ => return Vec::new(),
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while current != &self.source && path.len() <= self.distances.len() {
            let Some(parent) = self.parents.get(current) else {
                break;
            };
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Fewest-hop path from `start` to `end`, both included.
///
/// `start == end` gives `[start]`. An unreachable or absent endpoint gives
/// an empty path.
#[tracing::instrument(skip(graph, start, end), level = "debug")]
pub fn shortest_path_unweighted<V: Vertex>(graph: &Graph<V>, start: &V, end: &V) -> Vec<V> {
    if start == end {
        return vec![start.clone()];
    }
    let (Some(start_id), Some(end_id)) = (graph.id_of(start), graph.id_of(end)) else {
        return Vec::new();
    };

    let mut parents: Vec<Option<VertexId>> = vec![None; graph.id_bound()];
    let mut visited = vec![false; graph.id_bound()];
    let mut queue = VecDeque::from([start_id]);
    visited[start_id] = true;

    while let Some(current) = queue.pop_front() {
        if current == end_id {
            let path = reconstruct(&parents, start_id, end_id);
            trace!(hops = path.len() - 1, "shortest_path_unweighted");
            return graph.labels_of(path);
        }
        for edge in graph.edges_of(current) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                parents[edge.target] = Some(current);
                queue.push_back(edge.target);
            }
        }
    }

    Vec::new()
}

/// Follow parent links from `end` back to `start`, then reverse.
fn reconstruct(parents: &[Option<VertexId>], start: VertexId, end: VertexId) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match parents[current] {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Dijkstra distances from `start` to every vertex.
///
/// Unreached vertices map to `f64::INFINITY`. Negative weights are not
/// supported and give meaningless distances. An absent `start` yields an
/// empty map.
pub fn dijkstra_shortest_path<V: Vertex>(graph: &Graph<V>, start: &V) -> HashMap<V, Weight> {
    match dijkstra(graph, start) {
        Some(paths) => paths.into_distances(),
        None => HashMap::new(),
    }
}

/// Dijkstra from `start`, keeping the predecessor map for path queries.
///
/// Stale heap entries (left behind when a vertex was relaxed again) are
/// skipped once the vertex is finalized, and a finalized vertex is never
/// relaxed again. Parents therefore always form a tree rooted at `start`,
/// even when a negative weight makes the distances wrong. Among equal
/// distances the chosen predecessor depends on heap order and is not
/// specified.
#[tracing::instrument(skip(graph, start), level = "debug", fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<V: Vertex>(graph: &Graph<V>, start: &V) -> Option<ShortestPaths<V>> {
    let start_id = graph.id_of(start)?;

    let bound = graph.id_bound();
    let mut distance = vec![Weight::INFINITY; bound];
    let mut parent: Vec<Option<VertexId>> = vec![None; bound];
    let mut finalized = vec![false; bound];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    distance[start_id] = 0.0;
    heap.push(Reverse(HeapEntry {
        vertex: start_id,
        distance: 0.0,
    }));

    let mut pops = 0usize;
    while let Some(Reverse(HeapEntry { vertex: current, distance: current_distance })) = heap.pop() {
        pops += 1;
        if finalized[current] {
            continue;
        }
        finalized[current] = true;

        for edge in graph.edges_of(current) {
            if finalized[edge.target] {
                continue;
            }
            let candidate = current_distance + edge.weight;
            if candidate < distance[edge.target] {
                distance[edge.target] = candidate;
                parent[edge.target] = Some(current);
                heap.push(Reverse(HeapEntry {
                    vertex: edge.target,
                    distance: candidate,
                }));
            }
        }
    }

    let reached = finalized.iter().filter(|&&f| f).count();
    debug!(reached, heap_pops = pops, "dijkstra");

    let mut distances = HashMap::with_capacity(graph.vertex_count());
    let mut parents = HashMap::new();
    for id in graph.vertex_ids() {
        let Some(label) = graph.label(id) else {
            continue;
        };
        distances.insert(label.clone(), distance[id]);
        if let Some(p) = parent[id].and_then(|p| graph.label(p)) {
            parents.insert(label.clone(), p.clone());
        }
    }

    Some(ShortestPaths {
        source: start.clone(),
        distances,
        parents,
    })
}

/// Cheapest weighted path from `start` to `end` and its total weight.
///
/// `None` when either endpoint is absent or `end` is unreachable.
pub fn dijkstra_path<V: Vertex>(graph: &Graph<V>, start: &V, end: &V) -> Option<(Weight, Vec<V>)> {
    let paths = dijkstra(graph, start)?;
    let total = paths.distance(end).filter(|d| d.is_finite())?;
    Some((total, paths.path_to(end)))
}

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Dense slot index of a vertex inside a [`Graph`].
pub type VertexId = usize;

/// Edge weight. Unweighted edges carry `1.0`.
pub type Weight = f64;

/// Weight given to edges added without one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Anything usable as a vertex label.
pub trait Vertex: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Vertex for T {}

/// A directed edge in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// One edge of an input edge list: `(u, v)` or `(u, v, weight)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec<V> {
    Weighted(V, V, Weight),
    Unweighted(V, V),
}

impl<V> EdgeSpec<V> {
    /// Split into endpoints and weight, filling in `default_weight` when absent.
    pub fn into_parts(self, default_weight: Weight) -> (V, V, Weight) {
        match self {
            EdgeSpec::Weighted(u, v, w) => (u, v, w),
            EdgeSpec::Unweighted(u, v) => (u, v, default_weight),
        }
    }
}

impl<V> From<(V, V)> for EdgeSpec<V> {
    fn from((u, v): (V, V)) -> Self {
        EdgeSpec::Unweighted(u, v)
    }
}

impl<V> From<(V, V, Weight)> for EdgeSpec<V> {
    fn from((u, v, w): (V, V, Weight)) -> Self {
        EdgeSpec::Weighted(u, v, w)
    }
}

#[derive(Debug, Clone)]
struct Slot<V> {
    label: V,
    edges: Vec<Edge>,
}

/// In-memory adjacency-list graph.
///
/// Vertices live in an arena of slots addressed by [`VertexId`]; labels are
/// resolved through a hash index. Each slot keeps its outgoing edges in
/// insertion order. Removing a vertex leaves an empty slot behind so ids of
/// the remaining vertices stay stable.
///
/// Edges are directed. An undirected edge is stored as two directed ones.
/// Parallel edges are kept.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    slots: Vec<Option<Slot<V>>>,
    index: HashMap<V, VertexId>,
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
        }
    }

    /// Build a graph from an edge list.
    ///
    /// When `directed` is false every edge is mirrored.
    pub fn create<I, E>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec<V>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let (u, v, weight) = edge.into().into_parts(DEFAULT_WEIGHT);
            graph.add_edge(u, v, weight, directed);
        }
        graph
    }

    /// Register a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }
        let id = self.slots.len();
        self.slots.push(Some(Slot {
            label: vertex.clone(),
            edges: Vec::new(),
        }));
        self.index.insert(vertex, id);
        id
    }

    /// Append an edge, creating missing endpoints.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight, directed: bool) {
        let from_id = self.add_vertex(from);
        let to_id = self.add_vertex(to);
        self.push_edge(from_id, to_id, weight);
        if !directed {
            self.push_edge(to_id, from_id, weight);
        }
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        if let Some(Some(slot)) = self.slots.get_mut(from) {
            slot.edges.push(Edge { target: to, weight });
        }
    }

    /// Delete a vertex and every edge pointing at it.
    ///
    /// Returns false if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(id) = self.index.remove(vertex) else {
            return false;
        };
        self.slots[id] = None;
        for slot in self.slots.iter_mut().flatten() {
            slot.edges.retain(|e| e.target != id);
        }
        true
    }

    /// Delete every `from -> to` edge (and `to -> from` when undirected).
    ///
    /// All parallel copies go, not just the first. Returns how many entries
    /// were removed.
    pub fn remove_edge(&mut self, from: &V, to: &V, directed: bool) -> usize {
        let (Some(from_id), Some(to_id)) = (self.id_of(from), self.id_of(to)) else {
            return 0;
        };
        let mut removed = self.drop_edges(from_id, to_id);
        if !directed {
            removed += self.drop_edges(to_id, from_id);
        }
        removed
    }

    fn drop_edges(&mut self, from: VertexId, to: VertexId) -> usize {
        match self.slots.get_mut(from) {
            Some(Some(slot)) => {
                let before = slot.edges.len();
                slot.edges.retain(|e| e.target != to);
                before - slot.edges.len()
            }
            _ => 0,
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Resolve a label to its slot id.
    pub fn id_of(&self, vertex: &V) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    /// Resolve a slot id back to its label.
    pub fn label(&self, id: VertexId) -> Option<&V> {
        self.slots.get(id)?.as_ref().map(|s| &s.label)
    }

    /// Outgoing edges of a slot, in insertion order.
    pub fn edges_of(&self, id: VertexId) -> &[Edge] {
        match self.slots.get(id) {
            Some(Some(slot)) => slot.edges.as_slice(),
            _ => &[],
        }
    }

    /// Outgoing `(neighbor, weight)` pairs of a vertex, in insertion order.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, Weight)> + 'a {
        let edges = self.id_of(vertex).map(|id| self.edges_of(id)).unwrap_or(&[]);
        edges
            .iter()
            .filter_map(move |e| self.label(e.target).map(|label| (label, e.weight)))
    }

    /// Live vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| id))
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.slots.iter().flatten().map(|s| &s.label)
    }

    /// All edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> {
        self.slots.iter().flatten().flat_map(move |slot| {
            slot.edges.iter().filter_map(move |e| {
                self.label(e.target)
                    .map(|target| (&slot.label, target, e.weight))
            })
        })
    }

    /// Upper bound (exclusive) on vertex ids; sizes per-call visited sets.
    pub fn id_bound(&self) -> usize {
        self.slots.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of stored directed edges (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.slots.iter().flatten().map(|s| s.edges.len()).sum()
    }

    /// Map ids back to labels, skipping removed slots.
    pub(crate) fn labels_of(&self, ids: impl IntoIterator<Item = VertexId>) -> Vec<V> {
        ids.into_iter()
            .filter_map(|id| self.label(id).cloned())
            .collect()
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Cycle detection, topological ordering and tree validation
//!
//! Directed cycle checks run a depth-first search where every vertex moves
//! through three states: `Unvisited -> InProgress -> Done`. Reaching an
//! `InProgress` vertex means the edge points back into the current path,
//! which closes a cycle.

use tracing::debug;

use crate::graph::store::{Graph, Vertex, VertexId};
use crate::graph::traversal::dfs_visit;

/// Per-vertex state of the cycle-detection search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    /// On the current DFS path
    InProgress,
    /// Fully explored; no cycle runs through it
    Done,
}

/// Three-color DFS over slots `0..bound`, optionally recording post-order.
struct CycleSearch<'a, F> {
    successors: F,
    states: Vec<VisitState>,
    post_order: Option<&'a mut Vec<VertexId>>,
}

impl<'a, F, I> CycleSearch<'a, F>
where
    F: Fn(VertexId) -> I,
    I: IntoIterator<Item = VertexId>,
{
    fn new(bound: usize, successors: F, post_order: Option<&'a mut Vec<VertexId>>) -> Self {
        Self {
            successors,
            states: vec![VisitState::Unvisited; bound],
            post_order,
        }
    }

    /// Returns true as soon as a back edge is found.
    ///
    /// Each stack frame holds a vertex and the rest of its successors, so the
    /// depth of the search is bounded by the heap rather than the call stack.
    fn has_cycle_from(&mut self, root: VertexId) -> bool {
        self.states[root] = VisitState::InProgress;
        let mut stack = vec![(root, (self.successors)(root).into_iter())];

        while let Some((vertex, successors)) = stack.last_mut() {
            match successors.next() {
                Some(next) => match self.states[next] {
                    VisitState::InProgress => return true,
                    VisitState::Unvisited => {
                        self.states[next] = VisitState::InProgress;
                        stack.push((next, (self.successors)(next).into_iter()));
                    }
                    VisitState::Done => {}
                },
                None => {
                    let vertex = *vertex;
                    stack.pop();
                    self.states[vertex] = VisitState::Done;
                    if let Some(order) = self.post_order.as_deref_mut() {
                        order.push(vertex);
                    }
                }
            }
        }
        false
    }

    /// Run from every unvisited root in `roots`.
    fn any_cycle(&mut self, roots: impl IntoIterator<Item = VertexId>) -> bool {
        for root in roots {
            if self.states[root] == VisitState::Unvisited && self.has_cycle_from(root) {
                return true;
            }
        }
        false
    }
}

/// Adjacency of the course graph: `prereq -> course` for each `[course, prereq]`.
///
/// Pairs naming a course outside `0..num_courses` are ignored.
fn course_graph(num_courses: usize, prerequisites: &[[usize; 2]]) -> Vec<Vec<usize>> {
    let mut dependents = vec![Vec::new(); num_courses];
    for &[course, prereq] in prerequisites {
        if course < num_courses && prereq < num_courses {
            dependents[prereq].push(course);
        }
    }
    dependents
}

/// Whether all `num_courses` can be taken given `[course, prerequisite]` pairs.
///
/// Feasible exactly when the prerequisite graph has no directed cycle.
#[tracing::instrument(skip(prerequisites), level = "debug", fields(pairs = prerequisites.len()))]
pub fn course_schedule(num_courses: usize, prerequisites: &[[usize; 2]]) -> bool {
    let dependents = course_graph(num_courses, prerequisites);
    let mut search = CycleSearch::new(
        num_courses,
        |v: VertexId| dependents[v].iter().copied(),
        None,
    );
    let feasible = !search.any_cycle(0..num_courses);
    debug!(feasible, "course_schedule");
    feasible
}

/// An order in which all courses can be taken, or empty if none exists.
///
/// Built from the reversed DFS post-order of the prerequisite graph.
pub fn course_order(num_courses: usize, prerequisites: &[[usize; 2]]) -> Vec<usize> {
    let dependents = course_graph(num_courses, prerequisites);
    let mut post_order = Vec::with_capacity(num_courses);
    let cyclic = CycleSearch::new(
        num_courses,
        |v: VertexId| dependents[v].iter().copied(),
        Some(&mut post_order),
    )
    .any_cycle(0..num_courses);

    if cyclic {
        return Vec::new();
    }
    post_order.reverse();
    post_order
}

/// Whether a directed graph contains a cycle. Self-loops count.
#[tracing::instrument(skip(graph), level = "debug", fields(vertices = graph.vertex_count()))]
pub fn has_cycle<V: Vertex>(graph: &Graph<V>) -> bool {
    CycleSearch::new(
        graph.id_bound(),
        |v: VertexId| graph.edges_of(v).iter().map(|e| e.target),
        None,
    )
    .any_cycle(graph.vertex_ids())
}

/// Topological order of a directed graph, `None` if it has a cycle.
pub fn topological_order<V: Vertex>(graph: &Graph<V>) -> Option<Vec<V>> {
    let mut post_order = Vec::with_capacity(graph.vertex_count());
    let cyclic = CycleSearch::new(
        graph.id_bound(),
        |v: VertexId| graph.edges_of(v).iter().map(|e| e.target),
        Some(&mut post_order),
    )
    .any_cycle(graph.vertex_ids());

    if cyclic {
        return None;
    }
    post_order.reverse();
    Some(graph.labels_of(post_order))
}

/// Whether `edges` form a tree over vertices `0..n`.
///
/// A tree needs exactly `n - 1` edges and must be connected. The edge count
/// is checked first; only then does one traversal from vertex 0 count what
/// it reaches. `n == 0` is not a tree.
#[tracing::instrument(skip(edges), level = "debug", fields(edges = edges.len()))]
pub fn valid_tree(n: usize, edges: &[[usize; 2]]) -> bool {
    if n == 0 || edges.len() != n - 1 {
        return false;
    }
    if edges.iter().any(|&[u, v]| u >= n || v >= n) {
        return false;
    }

    let mut graph: Graph<usize> = Graph::with_capacity(n);
    for vertex in 0..n {
        graph.add_vertex(vertex);
    }
    for &[u, v] in edges {
        graph.add_edge(u, v, 1.0, false);
    }

    let mut visited = vec![false; graph.id_bound()];
    let mut reached = Vec::with_capacity(n);
    dfs_visit(&graph, 0, &mut visited, &mut reached);
    reached.len() == n
}

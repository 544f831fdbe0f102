//! Deep copies of pointer-linked node graphs.
//!
//! Nodes are shared `Rc<RefCell<GraphNode>>` handles whose neighbor lists
//! may point back at each other. Cyclic graphs form `Rc` cycles, so callers
//! that build them should [`detach`] the graph once it is no longer needed.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::graph::store::Graph;

/// Shared handle to a node
pub type NodeRef = Rc<RefCell<GraphNode>>;

type NodeKey = *const RefCell<GraphNode>;

pub struct GraphNode {
    pub val: i32,
    pub neighbors: Vec<NodeRef>,
}

impl GraphNode {
    pub fn new(val: i32) -> NodeRef {
        Rc::new(RefCell::new(GraphNode {
            val,
            neighbors: Vec::new(),
        }))
    }
}

// Derived Debug would recurse forever around a cycle
impl fmt::Debug for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neighbors: Vec<i32> = self.neighbors.iter().map(|n| n.borrow().val).collect();
        f.debug_struct("GraphNode")
            .field("val", &self.val)
            .field("neighbors", &neighbors)
            .finish()
    }
}

/// Link two nodes in both directions.
pub fn connect(a: &NodeRef, b: &NodeRef) {
    a.borrow_mut().neighbors.push(Rc::clone(b));
    if !Rc::ptr_eq(a, b) {
        b.borrow_mut().neighbors.push(Rc::clone(a));
    }
}

/// Build a node graph from an adjacency list and return node 1.
///
/// Nodes that link back to each other keep one another alive until
/// [`detach`] is called. Nodes that node 1 cannot reach are unlinked before
/// returning, so only the reachable part needs detaching.
///
/// Node `i` (0-based position in `adjacency`) gets value `i + 1`, and each
/// entry of `adjacency[i]` names a neighbor by that 1-based value. Entries
/// outside `1..=adjacency.len()` are ignored. Returns `None` for an empty
/// list.
pub fn build_node_graph(adjacency: &[Vec<usize>]) -> Option<NodeRef> {
    let nodes: Vec<NodeRef> = (1..=adjacency.len())
        .map(|val| GraphNode::new(val as i32))
        .collect();
    for (node, links) in nodes.iter().zip(adjacency) {
        let mut node = node.borrow_mut();
        for &val in links {
            if let Some(neighbor) = val.checked_sub(1).and_then(|i| nodes.get(i)) {
                node.neighbors.push(Rc::clone(neighbor));
            }
        }
    }

    let root = nodes.first().cloned()?;
    let kept: HashSet<NodeKey> = reachable(&root).iter().map(Rc::as_ptr).collect();
    for node in &nodes {
        if !kept.contains(&Rc::as_ptr(node)) {
            node.borrow_mut().neighbors.clear();
        }
    }
    Some(root)
}

/// Every node reachable from `root`, each once, in depth-first order.
pub fn reachable(root: &NodeRef) -> Vec<NodeRef> {
    let mut seen: HashSet<NodeKey> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Rc::clone(root)];
    while let Some(node) = stack.pop() {
        if !seen.insert(Rc::as_ptr(&node)) {
            continue;
        }
        stack.extend(node.borrow().neighbors.iter().rev().map(Rc::clone));
        order.push(node);
    }
    order
}

/// Deep-copy the graph reachable from `root`.
///
/// The copy has the same shape and values but shares no node with the
/// original. A map from original node identity to its copy makes sure each
/// node is copied once, which is what lets the walk terminate on cycles.
///
/// Neighbor links are strong, so a cyclic copy is never freed on its own:
/// call [`detach`] on the returned root once it is no longer needed.
#[tracing::instrument(skip(root), level = "debug")]
pub fn clone_graph(root: &NodeRef) -> NodeRef {
    let copy = GraphNode::new(root.borrow().val);
    let mut copies: HashMap<NodeKey, NodeRef> = HashMap::new();
    copies.insert(Rc::as_ptr(root), Rc::clone(&copy));

    // Every node on the stack already has an (empty) copy in `copies`
    let mut stack = vec![Rc::clone(root)];
    while let Some(node) = stack.pop() {
        let Some(node_copy) = copies.get(&Rc::as_ptr(&node)).cloned() else {
            continue;
        };
        let neighbors: Vec<NodeRef> = node.borrow().neighbors.clone();
        for neighbor in neighbors {
            let neighbor_copy = match copies.get(&Rc::as_ptr(&neighbor)) {
                Some(existing) => Rc::clone(existing),
                None => {
                    let fresh = GraphNode::new(neighbor.borrow().val);
                    copies.insert(Rc::as_ptr(&neighbor), Rc::clone(&fresh));
                    stack.push(neighbor);
                    fresh
                }
            };
            node_copy.borrow_mut().neighbors.push(neighbor_copy);
        }
    }

    debug!(nodes = copies.len(), "clone_graph");
    copy
}

/// Convert a node graph into an adjacency-list [`Graph`] keyed by value.
///
/// Each neighbor link becomes one directed edge, so a graph built with
/// [`connect`] comes out with both directions. Nodes sharing a value merge.
pub fn node_graph_to_graph(root: &NodeRef) -> Graph<i32> {
    let mut graph = Graph::new();
    for node in reachable(root) {
        let node = node.borrow();
        graph.add_vertex(node.val);
        for neighbor in &node.neighbors {
            graph.add_edge(node.val, neighbor.borrow().val, 1.0, true);
        }
    }
    graph
}

/// Clear every neighbor list reachable from `root`, dropping the `Rc`
/// cycles so the nodes can be freed.
///
/// Nodes are released one at a time, so this is also how to drop a long
/// chain without a nested drop per link.
pub fn detach(root: &NodeRef) {
    for node in reachable(root) {
        node.borrow_mut().neighbors.clear();
    }
}

//! Adjacency-list graph and the algorithms that read it
//!
//! - `store`: the graph itself and its mutation operations
//! - `traversal`: DFS (recursive and iterative) and BFS
//! - `connectivity`: path existence and connected components
//! - `shortest_path`: BFS shortest paths and Dijkstra
//! - `ordering`: cycle detection, topological order, tree validation
//! - `document`: JSON input documents

pub mod connectivity;
pub mod document;
pub mod ordering;
pub mod shortest_path;
pub mod store;
pub mod traversal;

pub use connectivity::{count_connected_components, find_connected_components, has_path};
pub use document::GraphDocument;
pub use ordering::{
    course_order, course_schedule, has_cycle, topological_order, valid_tree, VisitState,
};
pub use shortest_path::{
    dijkstra, dijkstra_path, dijkstra_shortest_path, shortest_path_unweighted, ShortestPaths,
};
pub use store::{Edge, EdgeSpec, Graph, Vertex, VertexId, Weight, DEFAULT_WEIGHT};
pub use traversal::{bfs, bfs_depths, dfs, dfs_iterative, traverse, TraversalOrder};

//! Main CLI commands enum

use clap::Subcommand;

pub mod graph;
pub mod meta;
pub mod problems;

use crate::cli::args::{GraphArgs, InputArgs};
pub use graph::*;
pub use meta::*;
pub use problems::*;

/// Top-level graphwalk commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Visit every vertex reachable from a start vertex
    Traverse(TraverseArgs),

    /// Check whether one vertex can reach another
    Reachable(EndpointArgs),

    /// Group vertices into connected components
    Components(GraphArgs),

    /// Fewest-hop path between two vertices
    Path(EndpointArgs),

    /// Weighted shortest distances from a source, or one shortest path
    Dijkstra(DijkstraArgs),

    /// Detect a directed cycle, or print a topological order
    Cycle(GraphArgs),

    /// Check whether courses with prerequisites can all be taken
    Schedule(ScheduleArgs),

    /// Check whether an edge list forms a tree
    ValidTree(ValidTreeArgs),

    /// Count islands of 1s in a grid file
    Islands(InputArgs),

    /// Shortest word ladder between two words
    Ladder(LadderArgs),

    /// Count friend circles in an acquaintance matrix
    Circles(InputArgs),

    /// Shortest path through a grid with obstacles
    GridPath(GridPathArgs),

    /// Deep-copy a node graph given as an adjacency list
    CloneGraph(InputArgs),

    /// Show or create configuration
    Config(ConfigArgs),
}

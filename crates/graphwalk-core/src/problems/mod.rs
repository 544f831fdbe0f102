//! Classic graph problems on grids, word lists, matrices and node graphs

pub mod clone;
pub mod friend_circles;
pub mod grid;
pub mod grid_path;
pub mod islands;
pub mod word_ladder;

pub use clone::{
    build_node_graph, clone_graph, connect, detach, node_graph_to_graph, GraphNode, NodeRef,
};
pub use friend_circles::{find_circle_num, parse_friend_matrix};
pub use grid::{neighbors4, parse_cell, parse_land_grid, parse_obstacle_grid, Cell};
pub use grid_path::shortest_grid_path;
pub use islands::number_of_islands;
pub use word_ladder::{
    word_ladder, word_ladder_path, word_ladder_path_with_alphabet, word_ladder_with_alphabet,
    DEFAULT_ALPHABET,
};

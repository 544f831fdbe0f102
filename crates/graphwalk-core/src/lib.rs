//! Graphwalk Core Library
//!
//! Graph storage, traversal, connectivity, shortest paths and cycle checks,
//! plus classic problems solved on top of them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod problems;

mod config;
mod graph;
mod problems;

//! Shortest paths through a grid with blocked cells.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::grid::{neighbors4, Cell};

fn is_open(grid: &[Vec<bool>], (row, col): Cell) -> bool {
    grid.get(row).and_then(|r| r.get(col)) == Some(&false)
}

/// Cells of a shortest 4-directional path from `start` to `end`, both
/// included. `true` in `grid` marks a blocked cell.
///
/// Empty when either endpoint is blocked or outside the grid, or when no
/// path exists. `[start]` when the endpoints coincide.
#[tracing::instrument(skip(grid), level = "debug", fields(rows = grid.len()))]
pub fn shortest_grid_path(grid: &[Vec<bool>], start: Cell, end: Cell) -> Vec<Cell> {
    if !is_open(grid, start) || !is_open(grid, end) {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let rows = grid.len();
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut parents: HashMap<Cell, Cell> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        for next in neighbors4(rows, cols, cell) {
            if next == start || parents.contains_key(&next) || !is_open(grid, next) {
                continue;
            }
            parents.insert(next, cell);
            if next == end {
                debug!(explored = parents.len(), "grid_path_found");
                return trace_back(&parents, start, end);
            }
            queue.push_back(next);
        }
    }

    debug!(explored = parents.len(), "grid_path_not_found");
    Vec::new()
}

fn trace_back(parents: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

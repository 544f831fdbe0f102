//! Counting islands of `1`s in a grid of `1`/`0` cells.

use tracing::debug;

use super::grid::{neighbors4, Cell, LAND, WATER};

/// Number of 4-connected land regions in `grid`.
///
/// Each island is flooded depth-first the moment its first cell is seen, and
/// flooded cells are overwritten with `0`, so the grid comes back all water.
/// Rows may differ in length; cells past the end of a row count as water.
#[tracing::instrument(skip(grid), level = "debug", fields(rows = grid.len()))]
pub fn number_of_islands(grid: &mut [Vec<char>]) -> usize {
    let mut islands = 0;
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            if grid[row][col] == LAND {
                islands += 1;
                sink(grid, (row, col));
            }
        }
    }
    debug!(islands, "number_of_islands");
    islands
}

/// Flood-fill from `start`, turning every reachable land cell into water.
fn sink(grid: &mut [Vec<char>], start: Cell) {
    let rows = grid.len();
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    grid[start.0][start.1] = WATER;
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        for (r, c) in neighbors4(rows, cols, cell) {
            if let Some(square) = grid[r].get_mut(c) {
                if *square == LAND {
                    *square = WATER;
                    stack.push((r, c));
                }
            }
        }
    }
}

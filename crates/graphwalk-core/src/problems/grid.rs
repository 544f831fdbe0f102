//! Grids viewed as implicit graphs: every cell is a vertex joined to its
//! four orthogonal neighbors.

use crate::bail_invalid;
use crate::error::{GraphwalkError, Result};

/// `(row, column)` position in a grid
pub type Cell = (usize, usize);

/// Land marker for island grids
pub const LAND: char = '1';

/// Water marker for island grids
pub const WATER: char = '0';

const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// In-bounds up/down/left/right neighbors of `cell` in a `rows x cols` grid.
pub fn neighbors4(rows: usize, cols: usize, (row, col): Cell) -> impl Iterator<Item = Cell> {
    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

/// Parse `"row,col"` into a cell.
pub fn parse_cell(s: &str) -> Result<Cell> {
    let Some((row, col)) = s.split_once(',') else {
        bail_invalid!("cell (expected row,col)", s);
    };
    match (row.trim().parse(), col.trim().parse()) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => bail_invalid!("cell (expected row,col)", s),
    }
}

fn grid_rows(text: &str) -> impl Iterator<Item = (usize, Vec<char>)> + '_ {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>()))
        .filter(|(_, row)| !row.is_empty())
}

/// Parse an island map: one row per line, `1` for land and `0` for water.
pub fn parse_land_grid(text: &str, source_name: &str) -> Result<Vec<Vec<char>>> {
    grid_rows(text)
        .map(|(line, row)| {
            match row.iter().find(|&&c| c != LAND && c != WATER) {
                Some(bad) => Err(GraphwalkError::invalid_input(
                    source_name,
                    format!("line {line}: unexpected '{bad}' (expected 1 or 0)"),
                )),
                None => Ok(row),
            }
        })
        .collect()
}

/// Parse an obstacle map: `.` (or `0`) open, `#` (or `1`) blocked.
///
/// Returns `true` for blocked cells.
pub fn parse_obstacle_grid(text: &str, source_name: &str) -> Result<Vec<Vec<bool>>> {
    grid_rows(text)
        .map(|(line, row)| {
            row.into_iter()
                .map(|c| match c {
                    '.' | '0' => Ok(false),
                    '#' | '1' => Ok(true),
                    other => Err(GraphwalkError::invalid_input(
                        source_name,
                        format!("line {line}: unexpected '{other}' (expected . or #)"),
                    )),
                })
                .collect::<Result<Vec<bool>>>()
        })
        .collect()
}

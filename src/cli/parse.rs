use graphwalk_core::bail_invalid;
use graphwalk_core::error::Result;
use graphwalk_core::problems::{self, Cell};

/// Parse a grid cell written as `row,col`
pub fn parse_cell(s: &str) -> std::result::Result<Cell, String> {
    problems::parse_cell(s).map_err(|e| e.to_string())
}

/// Parse an index pair written as `a,b`
pub fn parse_pair(s: &str) -> std::result::Result<[usize; 2], String> {
    index_pair(s).map_err(|e| e.to_string())
}

fn index_pair(s: &str) -> Result<[usize; 2]> {
    let Some((a, b)) = s.split_once(',') else {
        bail_invalid!("pair (expected a,b)", s);
    };
    match (a.trim().parse(), b.trim().parse()) {
        (Ok(a), Ok(b)) => Ok([a, b]),
        _ => bail_invalid!("pair (expected a,b)", s),
    }
}

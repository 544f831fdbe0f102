//! Friend circles: connected components of a symmetric adjacency matrix.

use serde::Deserialize;
use tracing::debug;

use crate::error::{GraphwalkError, Result};

/// Number of friend circles in `matrix`, where `matrix[i][j]` means person
/// `i` knows person `j`.
///
/// Each unvisited person starts a new circle, and a stack-driven search marks
/// everyone reachable from them. Missing entries in short rows count as
/// `false`.
#[tracing::instrument(skip(matrix), level = "debug", fields(people = matrix.len()))]
pub fn find_circle_num(matrix: &[Vec<bool>]) -> usize {
    let mut visited = vec![false; matrix.len()];
    let mut circles = 0;
    for person in 0..matrix.len() {
        if !visited[person] {
            circles += 1;
            visit(matrix, person, &mut visited);
        }
    }
    debug!(circles, "find_circle_num");
    circles
}

fn visit(matrix: &[Vec<bool>], person: usize, visited: &mut [bool]) {
    visited[person] = true;
    let mut stack = vec![person];
    while let Some(current) = stack.pop() {
        for (other, &knows) in matrix[current].iter().enumerate().take(visited.len()) {
            if knows && !visited[other] {
                visited[other] = true;
                stack.push(other);
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Acquaintance {
    Flag(bool),
    Number(u8),
}

/// Parse a JSON matrix whose entries are `0`/`1` or `true`/`false`.
pub fn parse_friend_matrix(content: &str, source_name: &str) -> Result<Vec<Vec<bool>>> {
    let rows: Vec<Vec<Acquaintance>> = serde_json::from_str(content)
        .map_err(|e| GraphwalkError::invalid_input(source_name, e.to_string()))?;
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter()
                .map(|cell| match cell {
                    Acquaintance::Flag(b) => Ok(b),
                    Acquaintance::Number(0) => Ok(false),
                    Acquaintance::Number(1) => Ok(true),
                    Acquaintance::Number(n) => Err(GraphwalkError::invalid_input(
                        source_name,
                        format!("row {i}: entry {n} is not 0 or 1"),
                    )),
                })
                .collect::<Result<Vec<bool>>>()
        })
        .collect()
}

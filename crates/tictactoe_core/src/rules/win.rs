//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Marker};
use tracing::instrument;

/// The eight winning lines in row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Every line is examined; the first line whose three cells hold the same
/// marker decides the result.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Returns the lines passing through `index`.
///
/// Empty for an index outside the board.
#[instrument]
pub fn lines_through(index: usize) -> Vec<[usize; 3]> {
    LINES
        .iter()
        .copied()
        .filter(|line| line.contains(&index))
        .collect()
}

fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Marker> {
    match board.cells_at([a, b, c]) {
        [Cell::Occupied(m1), Cell::Occupied(m2), Cell::Occupied(m3)] if m1 == m2 && m2 == m3 => {
            Some(m1)
        }
        _ => None,
    }
}

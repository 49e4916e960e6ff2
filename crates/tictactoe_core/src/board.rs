//! The 3x3 board: cell storage, move validation and terminal-state evaluation.

use crate::rules;
use crate::types::{Cell, GameStatus, Marker};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order. [`Board::place`] is the only
/// operation that writes a marker, and an occupied cell only returns to
/// empty through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff `index` is on the board and its cell is empty.
    #[instrument(skip(self))]
    pub fn can_place(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `marker` at `index`.
    ///
    /// Returns false without touching the board when the index is out of
    /// range or the cell is occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        if !self.can_place(index) {
            trace!("Placement refused");
            return false;
        }
        self.cells[index] = Cell::Occupied(marker);
        debug!("Marker placed");
        true
    }

    /// Evaluates the board.
    ///
    /// `Won` if any line holds three identical markers, otherwise `Tie` when
    /// the board is full and `InProgress` when it is not.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(self) {
            GameStatus::Won(winner)
        } else if rules::is_full(self) {
            GameStatus::Tie
        } else {
            GameStatus::InProgress
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
        debug!("Board cleared");
    }

    /// Returns the cell at `index` for rendering.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`. Use [`Board::get`] for a
    /// checked lookup.
    pub fn symbol_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Returns the cell at `index`, or `None` when off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the cells that are still empty.
    #[instrument(skip(self))]
    pub fn open_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }

    pub(crate) fn cells_at(&self, [a, b, c]: [usize; 3]) -> [Cell; 3] {
        [self.cells[a], self.cells[b], self.cells[c]]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}|{}|{}",
                chunk[0].symbol(),
                chunk[1].symbol(),
                chunk[2].symbol()
            )?;
        }
        Ok(())
    }
}

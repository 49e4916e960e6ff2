//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker placed by a player.
///
/// `X` is always held by the first player and moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// First player's marker.
    X,
    /// Second player's marker.
    O,
}

impl Marker {
    /// Returns the other marker.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker placed yet.
    #[default]
    Empty,
    /// Cell holds a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns true if no marker has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Occupied(marker) => Some(marker),
            Cell::Empty => None,
        }
    }

    /// Character used for text rendering; blank for an empty cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Occupied(Marker::X) => 'X',
            Cell::Occupied(Marker::O) => 'O',
            Cell::Empty => ' ',
        }
    }
}

/// Status of a board or match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed and at least one cell open.
    #[default]
    InProgress,
    /// The marker completed a line.
    Won(Marker),
    /// Board full with no completed line.
    Tie,
}

impl GameStatus {
    /// Returns true for `Won` and `Tie`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning marker if there is one.
    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::Won(marker) => Some(marker),
            GameStatus::InProgress | GameStatus::Tie => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(marker) => write!(f, "{} wins", marker),
            GameStatus::Tie => write!(f, "tie"),
        }
    }
}

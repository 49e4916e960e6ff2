//! Outcomes of a move attempt.
//!
//! An invalid click is an expected, recoverable outcome, so it is a value
//! here rather than an error.

use crate::types::GameStatus;
use serde::{Deserialize, Serialize};

/// Why a move attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The index is not in `0..9`.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),
    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

/// Result of [`Match::attempt_move`](crate::Match::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// The marker was placed; carries the match status after the move.
    Accepted(GameStatus),
}

impl MoveOutcome {
    /// Returns true if the marker was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// Status after an accepted move.
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            MoveOutcome::Accepted(status) => Some(*status),
            MoveOutcome::Rejected(_) => None,
        }
    }
}

//! Error types.

use crate::types::GameStatus;
use derive_more::{Display, Error};
use tracing::instrument;

/// Contract violations raised by [`Match`](crate::Match).
///
/// Invalid moves are not errors; see [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// A move was attempted after the match ended.
    #[display("Match is over ({}); reset before playing again", status)]
    MatchOver {
        /// Terminal status the match is in.
        status: GameStatus,
    },
    /// A board or turn invariant failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

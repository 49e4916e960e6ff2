//! Invariants that hold for every reachable match state.
//!
//! [`Match::attempt_move`](crate::Match::attempt_move) checks them after each
//! accepted move in debug builds.

use crate::board::Board;
use crate::game::Match;
use crate::types::{GameStatus, Marker};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X moves first, so X has placed as many markers as O or one more.
pub struct BalancedMarkers;

impl Invariant<Match> for BalancedMarkers {
    fn holds(game: &Match) -> bool {
        let x = game.board().count(Marker::X);
        let o = game.board().count(Marker::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Marker balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// The turn holder places the next legal marker, or made the last move once
/// the match is over.
pub struct TurnMatchesBoard;

impl Invariant<Match> for TurnMatchesBoard {
    fn holds(game: &Match) -> bool {
        let x = game.board().count(Marker::X);
        let o = game.board().count(Marker::O);
        let expected = match game.status() {
            GameStatus::InProgress if x == o => Marker::X,
            GameStatus::InProgress => Marker::O,
            GameStatus::Won(_) | GameStatus::Tie if x > o => Marker::X,
            GameStatus::Won(_) | GameStatus::Tie => Marker::O,
        };
        let winner_holds_turn = game
            .status()
            .winner()
            .is_none_or(|winner| winner == game.current_turn().marker());
        expected == game.current_turn().marker() && winner_holds_turn
    }

    fn description() -> &'static str {
        "Turn holder's marker matches the board"
    }
}

/// The recorded status is what the board evaluates to.
pub struct StatusMatchesBoard;

impl Invariant<Match> for StatusMatchesBoard {
    fn holds(game: &Match) -> bool {
        game.status() == game.board().evaluate()
    }

    fn description() -> &'static str {
        "Match status agrees with board evaluation"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (BalancedMarkers, TurnMatchesBoard, StatusMatchesBoard);

/// Returns true if every occupied cell of `before` is unchanged in `after`.
pub fn board_is_monotonic(before: &Board, after: &Board) -> bool {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .all(|(old, new)| old.is_empty() || old == new)
}

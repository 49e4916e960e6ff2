//! Match sequencing: turns, results and scores over a single board.

use crate::action::{MoveOutcome, Rejection};
use crate::board::{Board, CELL_COUNT};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::player::{Player, PlayerSlot};
use crate::types::GameStatus;
use crate::view::MatchView;
use tracing::{debug, info, instrument, warn};

/// Two players taking turns on one board.
///
/// Player 1 always holds X and moves first. Once the status is terminal the
/// match refuses moves until [`Match::reset`]. Scores survive resets; only
/// [`Match::start_over`] replaces the players.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    player1: Player,
    player2: Player,
    turn: PlayerSlot,
    status: GameStatus,
}

impl Match {
    /// Starts a match between two named players on an empty board.
    #[instrument(skip(player1, player2))]
    pub fn start(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        let game = Self {
            board: Board::new(),
            player1: Player::new(player1, PlayerSlot::Player1.marker()),
            player2: Player::new(player2, PlayerSlot::Player2.marker()),
            turn: PlayerSlot::Player1,
            status: GameStatus::InProgress,
        };
        info!(
            player1 = %game.player1.name(),
            player2 = %game.player2.name(),
            "Match started"
        );
        game
    }

    /// Starts a match with the names from `config`.
    #[instrument(skip(config))]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::start(config.player1_name().as_str(), config.player2_name().as_str())
    }

    /// Returns true if `index` is on the board and empty.
    ///
    /// Does not consult the match status; a finished match still reports
    /// its open cells.
    #[instrument(skip(self))]
    pub fn can_place(&self, index: usize) -> bool {
        self.board.can_place(index)
    }

    /// Places the turn holder's marker at `index`.
    ///
    /// An out-of-range or occupied index is rejected with no state change.
    /// An accepted move records a win for the turn holder, ends the match in
    /// a tie, or passes the turn to the other player.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchOver`] if the match already ended, and
    /// [`MatchError::InvariantViolation`] in debug builds if the move left the
    /// match in an inconsistent state.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome, MatchError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move attempted on finished match");
            return Err(MatchError::MatchOver {
                status: self.status,
            });
        }

        if index >= CELL_COUNT {
            debug!("Move rejected: off the board");
            return Ok(MoveOutcome::Rejected(Rejection::OutOfRange(index)));
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let marker = self.current_turn().marker();
        if !self.board.place(index, marker) {
            debug!("Move rejected: cell occupied");
            return Ok(MoveOutcome::Rejected(Rejection::Occupied(index)));
        }

        let status = self.board.evaluate();
        match status {
            GameStatus::Won(winner) => {
                let score = self.player_mut(self.turn).record_win();
                info!(%winner, score, "Match won");
            }
            GameStatus::Tie => info!("Match tied"),
            GameStatus::InProgress => {
                self.turn = self.turn.other();
                debug!(next = %self.turn, "Turn passed");
            }
        }
        self.status = status;

        #[cfg(debug_assertions)]
        self.check_invariants(&before)?;

        Ok(MoveOutcome::Accepted(status))
    }

    /// Player who places the next marker, or the winner once the match is won.
    pub fn current_turn(&self) -> &Player {
        self.player(self.turn)
    }

    /// Seat of the turn holder.
    pub fn current_slot(&self) -> PlayerSlot {
        self.turn
    }

    /// Clears the board and hands the first move back to player 1.
    ///
    /// Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        self.turn = PlayerSlot::Player1;
        info!(
            player1_score = self.player1.score(),
            player2_score = self.player2.score(),
            "Match reset"
        );
    }

    /// Replaces both players with fresh ones named from `config` and clears
    /// the board. Scores return to zero.
    #[instrument(skip(self, config))]
    pub fn start_over(&mut self, config: &MatchConfig) {
        *self = Self::from_config(config);
        info!("Session started over");
    }

    /// Changes a player's display name.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, slot: PlayerSlot, name: impl Into<String>) {
        self.player_mut(slot).rename(name);
    }

    /// Player in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        match slot {
            PlayerSlot::Player1 => &self.player1,
            PlayerSlot::Player2 => &self.player2,
        }
    }

    /// The board, read-only.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current match status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Snapshot for a presentation layer.
    #[instrument(skip(self))]
    pub fn view(&self) -> MatchView {
        MatchView::from(self)
    }

    fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        match slot {
            PlayerSlot::Player1 => &mut self.player1,
            PlayerSlot::Player2 => &mut self.player2,
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self, before: &Board) -> Result<(), MatchError> {
        use crate::invariants::{InvariantSet, MatchInvariants, board_is_monotonic};

        if !board_is_monotonic(before, &self.board) {
            warn!("Occupied cell changed during move");
            return Err(MatchError::InvariantViolation(
                "Occupied cells never change".to_string(),
            ));
        }
        MatchInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MatchError::InvariantViolation(descriptions)
        })
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Marker};

    #[test]
    fn test_start_assigns_markers() {
        let game = Match::start("Ada", "Grace");
        assert_eq!(game.player(PlayerSlot::Player1).marker(), Marker::X);
        assert_eq!(game.player(PlayerSlot::Player2).marker(), Marker::O);
        assert_eq!(game.current_slot(), PlayerSlot::Player1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_accepted_move_passes_turn() {
        let mut game = Match::start("Ada", "Grace");
        let outcome = game.attempt_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Accepted(GameStatus::InProgress));
        assert_eq!(game.board().symbol_at(4), Cell::Occupied(Marker::X));
        assert_eq!(game.current_turn().name(), "Grace");
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Match::start("Ada", "Grace");
        game.attempt_move(4).unwrap();
        let outcome = game.attempt_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Occupied(4)));
        assert_eq!(game.current_slot(), PlayerSlot::Player2);
    }

    #[test]
    fn test_move_after_win_is_contract_violation() {
        let mut game = Match::start("Ada", "Grace");
        for index in [0, 3, 1, 4, 2] {
            game.attempt_move(index).unwrap();
        }
        assert_eq!(
            game.attempt_move(8),
            Err(MatchError::MatchOver {
                status: GameStatus::Won(Marker::X)
            })
        );
    }

    #[test]
    fn test_start_over_clears_scores() {
        let mut game = Match::start("Ada", "Grace");
        for index in [0, 3, 1, 4, 2] {
            game.attempt_move(index).unwrap();
        }
        game.start_over(&MatchConfig::default());
        assert_eq!(game.player(PlayerSlot::Player1).score(), 0);
        assert_eq!(game.player(PlayerSlot::Player1).name(), "Player 1");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().open_cells().len() == CELL_COUNT);
    }
}

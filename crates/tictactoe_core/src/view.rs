//! Read-only snapshots for a presentation layer.
//!
//! The engine never drives a display. A front-end polls [`Match::view`]
//! after each event and redraws from the snapshot.

use crate::board::CELL_COUNT;
use crate::game::Match;
use crate::player::{Player, PlayerSlot};
use crate::types::{Cell, GameStatus, Marker};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Name, marker and score of one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerView {
    /// Seat the player occupies.
    slot: PlayerSlot,
    /// Display name.
    name: String,
    /// Marker the player places.
    marker: Marker,
    /// Matches won this session.
    score: u32,
}

impl PlayerView {
    fn new(slot: PlayerSlot, player: &Player) -> Self {
        Self {
            slot,
            name: player.name().to_string(),
            marker: player.marker(),
            score: player.score(),
        }
    }
}

/// Everything needed to draw a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchView {
    /// Cells in row-major order.
    cells: [Cell; CELL_COUNT],
    /// Both players, player 1 first.
    players: [PlayerView; 2],
    /// Seat of the turn holder (the winner once the match is won).
    turn: PlayerSlot,
    /// Match status.
    status: GameStatus,
}

impl MatchView {
    /// View of the turn holder.
    pub fn turn_holder(&self) -> &PlayerView {
        match self.turn {
            PlayerSlot::Player1 => &self.players[0],
            PlayerSlot::Player2 => &self.players[1],
        }
    }

    /// Result banner: "{name} wins!", "It's a tie!", or empty while in progress.
    #[instrument(skip(self))]
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Won(_) => format!("{} wins!", self.turn_holder().name),
            GameStatus::Tie => "It's a tie!".to_string(),
            GameStatus::InProgress => String::new(),
        }
    }

    /// Serializes the snapshot as JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Match> for MatchView {
    fn from(game: &Match) -> Self {
        Self {
            cells: *game.board().cells(),
            players: [
                PlayerView::new(PlayerSlot::Player1, game.player(PlayerSlot::Player1)),
                PlayerView::new(PlayerSlot::Player2, game.player(PlayerSlot::Player2)),
            ],
            turn: game.current_slot(),
            status: game.status(),
        }
    }
}

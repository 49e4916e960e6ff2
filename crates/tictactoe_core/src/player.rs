//! Players: display name, fixed marker and win counter.

use crate::types::Marker;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Which of the two seats in a match a player occupies.
///
/// Parses from the identifiers a front-end uses for the two player panels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerSlot {
    /// First seat, always plays X.
    Player1,
    /// Second seat, always plays O.
    Player2,
}

impl PlayerSlot {
    /// Marker assigned to this seat.
    pub fn marker(self) -> Marker {
        match self {
            PlayerSlot::Player1 => Marker::X,
            PlayerSlot::Player2 => Marker::O,
        }
    }

    /// Seat holding `marker`.
    pub fn for_marker(marker: Marker) -> Self {
        match marker {
            Marker::X => PlayerSlot::Player1,
            Marker::O => PlayerSlot::Player2,
        }
    }

    /// The other seat.
    pub fn other(self) -> Self {
        Self::for_marker(self.marker().opponent())
    }
}

/// A participant in a match.
///
/// The marker is fixed at creation. The score only grows, one step per win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
    score: u32,
}

impl Player {
    /// Creates a player with no wins.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            score: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Number of matches won.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Changes the display name. Marker and score are untouched.
    #[instrument(skip(self, name), fields(marker = %self.marker))]
    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        info!(old = %self.name, new = %name, "Player renamed");
        self.name = name;
    }

    /// Records a win and returns the new score.
    #[instrument(skip(self), fields(name = %self.name, marker = %self.marker))]
    pub fn record_win(&mut self) -> u32 {
        self.score = self.score.saturating_add(1);
        info!(score = self.score, "Win recorded");
        self.score
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) won {} games.",
            self.name, self.marker, self.score
        )
    }
}

//! Two-player tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Board**: sole owner of the nine cells; validates placements and
//!   evaluates win/tie.
//! - **Match**: two players, the turn holder and the match status; turns a
//!   board evaluation into scores.
//! - **View**: read-only snapshots a front-end polls to redraw.
//!
//! The engine performs no I/O apart from optional config loading and never
//! drives a display.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Marker, Match, MoveOutcome};
//!
//! # fn main() -> Result<(), tictactoe_core::MatchError> {
//! let mut game = Match::start("Ada", "Grace");
//! for index in [0, 3, 1, 4] {
//!     game.attempt_move(index)?;
//! }
//! let outcome = game.attempt_move(2)?;
//! assert_eq!(outcome, MoveOutcome::Accepted(GameStatus::Won(Marker::X)));
//! assert_eq!(game.current_turn().score(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod action;
mod board;
mod config;
mod error;
mod game;
pub mod invariants;
mod player;
pub mod rules;
mod shared;
mod types;
mod view;

// Crate-level exports - Core types
pub use types::{Cell, GameStatus, Marker};

// Crate-level exports - Board
pub use board::{Board, CELL_COUNT};

// Crate-level exports - Players and match
pub use action::{MoveOutcome, Rejection};
pub use game::Match;
pub use player::{Player, PlayerSlot};
pub use shared::SharedMatch;

// Crate-level exports - Presentation snapshots
pub use view::{MatchView, PlayerView};

// Crate-level exports - Configuration and errors
pub use config::MatchConfig;
pub use error::{ConfigError, MatchError};

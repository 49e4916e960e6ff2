//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a [`Board`](crate::Board). Rules are kept
//! apart from board storage so the board's single mutating entry point
//! stays small.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, lines_through};

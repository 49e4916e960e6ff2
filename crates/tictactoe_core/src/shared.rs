//! Mutex-guarded match handle for callers that share one match across threads.

use crate::action::MoveOutcome;
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::game::Match;
use crate::player::PlayerSlot;
use crate::view::MatchView;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Cloneable handle to a single match.
///
/// Every operation holds the lock for its whole read-modify-write, so
/// concurrent `attempt_move` calls are applied one at a time.
#[derive(Debug, Clone)]
pub struct SharedMatch {
    inner: Arc<Mutex<Match>>,
}

impl SharedMatch {
    /// Wraps a match.
    #[instrument(skip(game))]
    pub fn new(game: Match) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// See [`Match::can_place`].
    #[instrument(skip(self))]
    pub fn can_place(&self, index: usize) -> bool {
        self.lock().can_place(index)
    }

    /// See [`Match::attempt_move`].
    #[instrument(skip(self))]
    pub fn attempt_move(&self, index: usize) -> Result<MoveOutcome, MatchError> {
        self.lock().attempt_move(index)
    }

    /// See [`Match::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// See [`Match::start_over`].
    #[instrument(skip(self, config))]
    pub fn start_over(&self, config: &MatchConfig) {
        self.lock().start_over(config);
    }

    /// See [`Match::rename_player`].
    #[instrument(skip(self, name))]
    pub fn rename_player(&self, slot: PlayerSlot, name: impl Into<String>) {
        self.lock().rename_player(slot, name);
    }

    /// Snapshot taken under the lock.
    #[instrument(skip(self))]
    pub fn view(&self) -> MatchView {
        self.lock().view()
    }

    // Operations either complete or leave the match untouched, so state
    // behind a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Match> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Match lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl From<Match> for SharedMatch {
    fn from(game: Match) -> Self {
        Self::new(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_moves_fill_board_once() {
        let shared = SharedMatch::new(Match::start("Ada", "Grace"));
        let handles: Vec<_> = (0..9)
            .map(|index| {
                let shared = shared.clone();
                thread::spawn(move || shared.attempt_move(index))
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|result| matches!(result, Ok(outcome) if outcome.is_accepted()))
            .count();

        let view = shared.view();
        let placed = view.cells().iter().filter(|cell| !cell.is_empty()).count();
        assert_eq!(accepted, placed);
        // Nine distinct cells: either someone completed a line or the board filled.
        assert!(view.status().is_terminal());
    }

    #[test]
    fn test_rename_through_handle() {
        let shared = SharedMatch::from(Match::start("Ada", "Grace"));
        shared.rename_player(PlayerSlot::Player2, "Hopper");
        assert_eq!(shared.view().players()[1].name(), "Hopper");
    }
}

//! Property tests for board placement and match turn order.

use proptest::prelude::*;
use tictactoe_core::{Board, CELL_COUNT, GameStatus, Marker, Match, MatchError, MoveOutcome};

fn arb_marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

/// A board reached by placing arbitrary markers at arbitrary indices.
fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0..CELL_COUNT, arb_marker()), 0..12).prop_map(|placements| {
        let mut board = Board::new();
        for (index, marker) in placements {
            board.place(index, marker);
        }
        board
    })
}

proptest! {
    #[test]
    fn replacing_an_occupied_cell_fails(
        mut board in arb_board(),
        index in 0..CELL_COUNT,
        first in arb_marker(),
        second in arb_marker(),
    ) {
        if board.can_place(index) {
            prop_assert!(board.place(index, first));
        }
        let before = board.clone();
        prop_assert!(!board.place(index, second));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_placement_never_mutates(
        mut board in arb_board(),
        index in CELL_COUNT..usize::MAX,
        marker in arb_marker(),
    ) {
        let before = board.clone();
        prop_assert!(!board.can_place(index));
        prop_assert!(!board.place(index, marker));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn reset_always_reopens_board(mut board in arb_board()) {
        board.reset();
        prop_assert_eq!(board.evaluate(), GameStatus::InProgress);
        for index in 0..CELL_COUNT {
            prop_assert!(board.can_place(index));
        }
    }

    #[test]
    fn turn_alternates_until_terminal(moves in prop::collection::vec(0..CELL_COUNT + 2, 0..30)) {
        let mut game = Match::start("Ada", "Grace");
        for index in moves {
            let before = game.current_slot();
            let scores = (game.player(before).score(), game.player(before.other()).score());
            match game.attempt_move(index) {
                Ok(MoveOutcome::Accepted(GameStatus::InProgress)) => {
                    prop_assert_ne!(game.current_slot(), before);
                }
                Ok(MoveOutcome::Accepted(GameStatus::Won(winner))) => {
                    prop_assert_eq!(game.current_slot(), before);
                    prop_assert_eq!(winner, game.current_turn().marker());
                    prop_assert_eq!(game.current_turn().score(), scores.0 + 1);
                }
                Ok(MoveOutcome::Accepted(GameStatus::Tie)) => {
                    prop_assert_eq!(game.current_slot(), before);
                    prop_assert_eq!(game.player(before).score(), scores.0);
                }
                Ok(MoveOutcome::Rejected(_)) => {
                    prop_assert_eq!(game.current_slot(), before);
                }
                Err(MatchError::MatchOver { status }) => {
                    prop_assert!(status.is_terminal());
                    prop_assert_eq!(game.current_slot(), before);
                }
                Err(MatchError::InvariantViolation(description)) => {
                    prop_assert!(false, "invariant violated: {}", description);
                }
            }
            prop_assert_eq!(game.player(before.other()).score(), scores.1);
        }
    }
}

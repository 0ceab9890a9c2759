//! Worked positions for the board, rules and search engine

use oxo::{
    Error,
    search::{best_action, search},
    tictactoe::{Action, Board, Cell, Player, is_terminal, utility, winner},
};

/// X at (0,0) and (0,1), O at (1,1): O must block at (0,2)
#[test]
fn test_forced_block() {
    let board = Board::new()
        .apply(Action::new(0, 0))
        .and_then(|b| b.apply(Action::new(1, 1)))
        .and_then(|b| b.apply(Action::new(0, 1)))
        .unwrap();

    assert_eq!(board.player_to_move(), Some(Player::O));
    assert_eq!(best_action(&board), Some(Action::new(0, 2)));
}

/// X,O,X / O,X,O / O,X,O: full, no line, a draw
#[test]
fn test_full_board_without_line_is_draw() {
    use Cell::{O, X};
    let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);

    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board).unwrap(), 0);
    assert_eq!(best_action(&board), None);
}

/// Top row of X, everything else empty
#[test]
fn test_completed_row_is_terminal() {
    use Cell::{Empty, X};
    let board = Board::from_cells([X, X, X, Empty, Empty, Empty, Empty, Empty, Empty]);

    assert_eq!(winner(&board), Some(Player::X));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board).unwrap(), 1);
    assert_eq!(best_action(&board), None);
}

#[test]
fn test_illegal_actions_are_rejected() {
    let board = Board::new().apply(Action::new(1, 1)).unwrap();

    let occupied = board.apply(Action::new(1, 1)).unwrap_err();
    assert!(occupied.is_illegal_action());

    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(3, 3)] {
        let err = board.apply(action).unwrap_err();
        assert!(
            matches!(err, Error::IllegalAction { .. }),
            "{action} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_utility_requires_terminal_board() {
    let board = Board::from_string("X...O....").unwrap();
    assert!(matches!(utility(&board), Err(Error::NotTerminal { .. })));
}

#[test]
fn test_apply_leaves_original_untouched() {
    let board = Board::from_string("X...O....").unwrap();
    let snapshot = board.encode();
    let next = board.apply(Action::new(2, 2)).unwrap();

    assert_eq!(board.encode(), snapshot);
    assert_eq!(next.get(Action::new(2, 2)), Some(Cell::X));
    assert_eq!(board.get(Action::new(2, 2)), Some(Cell::Empty));
}

#[test]
fn test_players_alternate_from_x() {
    let mut board = Board::new();
    let mut expected = Player::X;
    for action in [
        Action::new(0, 0),
        Action::new(1, 1),
        Action::new(2, 2),
        Action::new(0, 2),
    ] {
        assert_eq!(board.player_to_move(), Some(expected));
        assert_eq!(board.legal_actions().len(), 9 - board.occupied_count());
        board = board.apply(action).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_take_the_win_over_the_block() {
    // O to move: blocking X at (0,2) draws at best, completing the middle row wins
    let board = Board::from_string("XX./OO./X..").unwrap();
    let report = search(&board);
    assert_eq!(report.action, Some(Action::new(1, 2)));
    assert_eq!(report.value, -1);
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::from_string("X........").unwrap();
    let first = search(&board);
    for _ in 0..3 {
        assert_eq!(search(&board), first);
    }
}

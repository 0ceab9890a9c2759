//! Terminal detection and scoring

use serde::{Deserialize, Serialize};

use super::{Board, Player, lines::LineAnalyzer};

/// Utility of a board won by X
pub const X_WIN: i32 = 1;
/// Utility of a board won by O
pub const O_WIN: i32 = -1;
/// Utility of a drawn board
pub const DRAW: i32 = 0;

/// Status of a game, derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl Board {
    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(self.cells())
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Score of a finished game from X's point of view: +1, -1 or 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`](crate::Error::NotTerminal) when the game
    /// is still in progress.
    pub fn utility(&self) -> Result<i32, crate::Error> {
        self.terminal_utility()
            .ok_or_else(|| crate::Error::NotTerminal {
                board: self.encode(),
            })
    }

    /// `Some(utility)` for terminal boards, `None` otherwise
    pub(crate) fn terminal_utility(&self) -> Option<i32> {
        match self.winner() {
            Some(Player::X) => Some(X_WIN),
            Some(Player::O) => Some(O_WIN),
            None if self.is_full() => Some(DRAW),
            None => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

/// See [`Board::winner`]
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// See [`Board::is_terminal`]
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// See [`Board::utility`]
pub fn utility(board: &Board) -> Result<i32, crate::Error> {
    board.utility()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Action, Cell};

    fn play(actions: &[(usize, usize)]) -> Board {
        actions.iter().fold(Board::new(), |board, &(row, col)| {
            board.apply(Action::new(row, col)).unwrap()
        })
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.utility().unwrap(), X_WIN);
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_win_detection_vertical() {
        // O takes the middle column
        let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 1)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility().unwrap(), O_WIN);
    }

    #[test]
    fn test_draw_detection() {
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility().unwrap(), DRAW);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_utility_requires_terminal_board() {
        let board = play(&[(1, 1)]);
        assert!(!board.is_terminal());
        assert_eq!(board.outcome(), Outcome::InProgress);
        let err = board.utility().unwrap_err();
        assert!(matches!(err, crate::Error::NotTerminal { .. }));
        assert!(err.to_string().contains("....X...."));
    }

    #[test]
    fn test_winner_with_empty_cells_is_terminal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;
        let board = Board::from_cells(cells);
        assert!(board.is_terminal());
        assert_eq!(board.utility().unwrap(), O_WIN);
        assert!(!board.legal_actions().is_empty());
    }

    #[test]
    fn test_outcome_is_over() {
        assert!(Outcome::Win(Player::O).is_over());
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::InProgress.is_over());
    }
}

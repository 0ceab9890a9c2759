//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{
    Action, BOARD_SIZE, Board, CELL_COUNT, Cell, Player, apply, initial_board, legal_actions,
    player_to_move,
};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{Outcome, is_terminal, utility, winner};

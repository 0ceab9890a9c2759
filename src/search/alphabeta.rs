//! Minimax search with alpha-beta pruning
//!
//! Values are always from X's point of view: X maximizes, O minimizes. The
//! search is exhaustive (every line is followed to a terminal board), so the
//! returned value is the exact game-theoretic value; pruning only skips
//! subtrees that cannot change it.
//!
//! # Example
//!
//! ```
//! use oxo::search::{best_action, search};
//! use oxo::tictactoe::{Action, Board};
//!
//! // X threatens the top row; O must block
//! let board = Board::from_string("XX..O....").unwrap();
//! assert_eq!(best_action(&board), Some(Action::new(0, 2)));
//!
//! let report = search(&Board::new());
//! assert_eq!(report.value, 0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Action, Board, Player};

/// Lower bound for alpha-beta windows
pub const NEG_INFINITY: i32 = i32::MIN;
/// Upper bound for alpha-beta windows
pub const POS_INFINITY: i32 = i32::MAX;

/// Work done by one search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, root included
    pub nodes: u64,
    /// Terminal boards scored
    pub leaves: u64,
    /// Alpha and beta cutoffs taken
    pub cutoffs: u64,
}

/// Result of searching a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen action, `None` when the board is terminal
    pub action: Option<Action>,
    /// Guaranteed outcome under optimal play: +1 X wins, -1 O wins, 0 draw
    pub value: i32,
    pub stats: SearchStats,
}

/// Search `board` and return the best action for the side to move.
///
/// Among equally valued actions the first in row-major order is chosen. The
/// root shares one alpha-beta window across its children: after each
/// candidate the mover's bound is tightened to the best value so far.
pub fn search(board: &Board) -> SearchReport {
    let mut stats = SearchStats::default();

    let report = if let Some(value) = board.terminal_utility() {
        stats.nodes = 1;
        stats.leaves = 1;
        SearchReport {
            action: None,
            value,
            stats,
        }
    } else {
        let maximizing = board.player_to_move() == Some(Player::X);
        search_root(board, maximizing, &mut stats)
    };

    debug!(
        "searched {}: best {} value {} ({} nodes, {} leaves, {} cutoffs)",
        board.encode(),
        report
            .action
            .map_or_else(|| "-".to_string(), |action| action.to_string()),
        report.value,
        report.stats.nodes,
        report.stats.leaves,
        report.stats.cutoffs
    );

    report
}

fn search_root(board: &Board, maximizing: bool, stats: &mut SearchStats) -> SearchReport {
    stats.nodes += 1;

    let mut alpha = NEG_INFINITY;
    let mut beta = POS_INFINITY;
    let mut best_value = if maximizing { NEG_INFINITY } else { POS_INFINITY };
    let mut best_action = None;

    for (action, child) in board.children() {
        if maximizing {
            let value = min_value(&child, alpha, beta, stats);
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }
            alpha = alpha.max(best_value);
        } else {
            let value = max_value(&child, alpha, beta, stats);
            if value < best_value {
                best_value = value;
                best_action = Some(action);
            }
            beta = beta.min(best_value);
        }
    }

    SearchReport {
        action: best_action,
        value: best_value,
        stats: *stats,
    }
}

/// Best action for the side to move, `None` on a terminal board
pub fn best_action(board: &Board) -> Option<Action> {
    search(board).action
}

/// Value of `board` with X to move, within the window `(alpha, beta)`.
///
/// Returns as soon as a child reaches `beta`, since the minimizing parent
/// already has a cheaper alternative.
pub fn max_value(board: &Board, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(utility) = board.terminal_utility() {
        stats.leaves += 1;
        return utility;
    }

    let mut v = NEG_INFINITY;
    for (_, child) in board.children() {
        v = v.max(min_value(&child, alpha, beta, stats));
        if v >= beta {
            stats.cutoffs += 1;
            return v;
        }
        alpha = alpha.max(v);
    }
    v
}

/// Value of `board` with O to move, within the window `(alpha, beta)`.
///
/// Returns as soon as a child drops to `alpha`, since the maximizing parent
/// already has a better alternative.
pub fn min_value(board: &Board, alpha: i32, mut beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(utility) = board.terminal_utility() {
        stats.leaves += 1;
        return utility;
    }

    let mut v = POS_INFINITY;
    for (_, child) in board.children() {
        v = v.min(max_value(&child, alpha, beta, stats));
        if v <= alpha {
            stats.cutoffs += 1;
            return v;
        }
        beta = beta.min(v);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::rules::DRAW;

    #[test]
    fn test_terminal_board_has_no_action() {
        let board = Board::from_string("XXXOO....").unwrap();
        let report = search(&board);
        assert_eq!(report.action, None);
        assert_eq!(report.value, 1);
        assert_eq!(report.stats.nodes, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move with two open lines; (0, 2) completes the top row
        let board = Board::from_string("XX.OO....").unwrap();
        let report = search(&board);
        assert_eq!(report.action, Some(Action::new(0, 2)));
        assert_eq!(report.value, 1);
    }

    #[test]
    fn test_o_blocks_forced_line() {
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.player_to_move(), Some(Player::O));
        assert_eq!(best_action(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_win_over_block() {
        // O to move: O can win on the middle row instead of blocking X
        // XX.
        // OO.
        // X..
        let board = Board::from_string("XX.OO.X..").unwrap();
        let report = search(&board);
        assert_eq!(report.action, Some(Action::new(1, 2)));
        assert_eq!(report.value, -1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let report = search(&Board::new());
        assert_eq!(report.value, DRAW);
        assert!(report.action.is_some());
        assert!(report.stats.cutoffs > 0);
    }

    #[test]
    fn test_lost_position_still_returns_an_action() {
        // O to move, X has two open lines (row 0 and column 0)
        // XX.
        // XO.
        // .O.
        let board = Board::from_string("XX./XO./.O.").unwrap();
        assert_eq!(board.player_to_move(), Some(Player::O));
        let report = search(&board);
        assert_eq!(report.value, 1);
        // All moves lose; the first legal one is kept
        assert_eq!(report.action, Some(Action::new(0, 2)));
    }

    #[test]
    fn test_value_functions_score_terminal_boards() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut stats = SearchStats::default();
        assert_eq!(max_value(&board, NEG_INFINITY, POS_INFINITY, &mut stats), 1);
        assert_eq!(min_value(&board, NEG_INFINITY, POS_INFINITY, &mut stats), 1);
        assert_eq!(stats.leaves, 2);
    }
}

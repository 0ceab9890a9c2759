//! Exhaustive position analysis
//!
//! Unlike [`search`](super::search), which commits to one action, these
//! helpers report the exact value of every action so callers can see all
//! equally good choices.

use super::alphabeta::{NEG_INFINITY, POS_INFINITY, SearchStats, max_value, min_value};
use crate::tictactoe::{Action, Board, Player};

/// Plain minimax value of `board` with no pruning.
///
/// Visits the entire game tree below `board`. Kept as a reference to check
/// the pruned search against.
pub fn minimax_value(board: &Board) -> i32 {
    if let Some(utility) = board.terminal_utility() {
        return utility;
    }

    let values = board.children().map(|(_, child)| minimax_value(&child));
    if board.player_to_move() == Some(Player::X) {
        values.max().unwrap_or_default()
    } else {
        values.min().unwrap_or_default()
    }
}

/// Every legal action with its exact value, in row-major order.
///
/// Each child is searched with a full window, so values are exact rather than
/// bounds. Empty for terminal boards.
pub fn action_values(board: &Board) -> Vec<(Action, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let maximizing = board.player_to_move() == Some(Player::X);
    let mut stats = SearchStats::default();
    board
        .children()
        .map(|(action, child)| {
            let value = if maximizing {
                min_value(&child, NEG_INFINITY, POS_INFINITY, &mut stats)
            } else {
                max_value(&child, NEG_INFINITY, POS_INFINITY, &mut stats)
            };
            (action, value)
        })
        .collect()
}

/// All actions reaching the mover's best value, in row-major order
pub fn optimal_actions(board: &Board) -> Vec<Action> {
    let values = action_values(board);
    let best = if board.player_to_move() == Some(Player::X) {
        values.iter().map(|&(_, value)| value).max()
    } else {
        values.iter().map(|&(_, value)| value).min()
    };

    match best {
        Some(best) => values
            .into_iter()
            .filter(|&(_, value)| value == best)
            .map(|(action, _)| action)
            .collect(),
        None => Vec::new(),
    }
}

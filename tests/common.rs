//! Common test utilities for the oxo test suite.
//!
//! This module enumerates the reachable game tree so search results can be
//! checked against exhaustive references.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use oxo::tictactoe::Board;

/// Every board reachable from the empty board by legal play, stopping at
/// terminal boards.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([Board::new()]);
    let mut boards = Vec::new();

    while let Some(board) = queue.pop_front() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for action in board.legal_actions() {
            let next = board.apply(action).expect("legal action applies");
            queue.push_back(next);
        }
    }
    boards
}

/// Number of nodes an unpruned search visits below (and including) `board`.
pub fn full_tree_nodes(board: &Board) -> u64 {
    if board.is_terminal() {
        return 1;
    }
    1 + board
        .legal_actions()
        .into_iter()
        .map(|action| full_tree_nodes(&board.apply(action).expect("legal action applies")))
        .sum::<u64>()
}

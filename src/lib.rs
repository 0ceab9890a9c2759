//! Perfect-play tic-tac-toe
//!
//! This crate provides:
//! - An immutable board model with legal-move generation and transitions
//! - Rules: winner detection, terminal test and utility (+1 / 0 / -1 for X)
//! - Minimax search with alpha-beta pruning, plus an unpruned reference solver
//! - Agents, a match runner and observers for playing engines against each other
//! - The `oxo` command-line driver

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchReport, SearchStats, best_action, search};
pub use tictactoe::{Action, Board, Outcome, Player};

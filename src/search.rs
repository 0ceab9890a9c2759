//! Adversarial search over the tic-tac-toe game tree

pub mod alphabeta;
pub mod analysis;

pub use alphabeta::{
    NEG_INFINITY, POS_INFINITY, SearchReport, SearchStats, best_action, max_value, min_value,
    search,
};
pub use analysis::{action_values, minimax_value, optimal_actions};

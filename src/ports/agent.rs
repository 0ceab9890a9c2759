//! Agent port - abstraction over anything that picks moves
//!
//! The minimax engine, baselines and the interactive human player all sit
//! behind this trait so the match runner can pit any two against each other.

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Something that chooses an action for the side to move.
///
/// # Examples
///
/// ```no_run
/// use oxo::{
///     ports::Agent,
///     tictactoe::{Action, Board},
/// };
///
/// struct FirstCell;
///
/// impl Agent for FirstCell {
///     fn select_action(&mut self, board: &Board) -> oxo::Result<Action> {
///         board
///             .legal_actions()
///             .first()
///             .copied()
///             .ok_or(oxo::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-cell"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Select an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal action exists (terminal board) or the
    /// agent cannot produce one (e.g. its input stream closed).
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Get the agent's name, used in logs and reports.
    fn name(&self) -> &str;

    /// Seed the agent's random number generator.
    ///
    /// Match runners call this with a deterministic seed for reproducible
    /// results. Deterministic agents ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

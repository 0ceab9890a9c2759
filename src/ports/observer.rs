//! Observer port - abstraction for watching matches
//!
//! Observers receive match events without the runner knowing what they do
//! with them (progress bars, tallies, transcripts).

use crate::{
    Result,
    tictactoe::{Action, Board, Outcome},
};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(game_num, board, action)` - For each move, before it is applied
///    - `on_game_end(game_num, outcome)`
/// 3. `on_match_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use oxo::{ports::Observer, tictactoe::Outcome};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(&mut self, _game_num: usize, outcome: Outcome) -> oxo::Result<()> {
///         if outcome == Outcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first game.
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move, with the board the action is played on.
    fn on_move(&mut self, _game_num: usize, _board: &Board, _action: Action) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends with its final outcome.
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}

//! Observer implementations for matches

use indicatif::{ProgressBar, ProgressStyle};
use log::trace;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Action, Board, Outcome, Player},
};

/// Progress bar with a running W/D/L tally for one side
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    perspective: Player,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a progress observer counting results for `perspective`
    pub fn new(perspective: Player) -> Self {
        Self {
            progress_bar: None,
            perspective,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(player) if player == self.perspective => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            _ => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Records every game as a list of actions, for export or replay
#[derive(Debug, Default)]
pub struct TranscriptObserver {
    games: Vec<Vec<Action>>,
}

impl TranscriptObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[Vec<Action>] {
        &self.games
    }
}

impl Observer for TranscriptObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.games.push(Vec::new());
        Ok(())
    }

    fn on_move(&mut self, game_num: usize, board: &Board, action: Action) -> Result<()> {
        trace!("game {game_num}: {} plays {action}", board.encode());
        if let Some(moves) = self.games.last_mut() {
            moves.push(action);
        }
        Ok(())
    }
}

//! Match runner: plays a series of games between two agents

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Board, Outcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed for the agents
    pub seed: Option<u64>,

    /// Side played by the evaluated agent (X always opens)
    pub agent_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            agent_player: Player::X,
        }
    }
}

impl MatchConfig {
    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the side the evaluated agent plays.
    pub fn with_agent_player(mut self, player: Player) -> Self {
        self.agent_player = player;
        self
    }

    /// Load a configuration from a JSON file; missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(Error::io(format!("open config '{}'", path.display())))?;
        let config: MatchConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(Error::io(format!("create config '{}'", path.display())))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a match, from the evaluated agent's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MatchResult {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(Error::io(format!("create results '{}'", path.display())))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(Error::io(format!("open results '{}'", path.display())))?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays `config.games` games between an agent and an opponent
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the match
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        self.config.validate()?;
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        for game_num in 0..self.config.games {
            let outcome = self.play_game(game_num, agent, opponent)?;
            match outcome {
                Outcome::Win(winner) if winner == self.config.agent_player => wins += 1,
                Outcome::Win(_) => losses += 1,
                _ => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::new(self.config.games, wins, draws, losses);
        info!(
            "{} vs {}: {} games, {} wins, {} draws, {} losses",
            agent.name(),
            opponent.name(),
            result.total_games,
            result.wins,
            result.draws,
            result.losses
        );
        Ok(result)
    }

    /// Play a single game from the empty board
    pub fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<Outcome> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut board = Board::new();
        while let Some(mover) = board.player_to_move()
            && !board.is_terminal()
        {
            let current: &mut dyn Agent = if mover == self.config.agent_player {
                &mut *agent
            } else {
                &mut *opponent
            };

            let action = current.select_action(&board)?;
            for observer in &mut self.observers {
                observer.on_move(game_num, &board, action)?;
            }
            board = board.apply(action)?;
        }

        let outcome = board.outcome();
        debug!("game {game_num} finished {outcome:?}:\n{board}");
        Ok(outcome)
    }
}

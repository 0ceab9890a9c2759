//! Match command - minimax engine against an opponent

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    cli::{
        commands::parse_player_token,
        config::CommonConfig,
        output::{format_number, format_rate, print_kv, print_section},
    },
    pipeline::{
        DefensiveAgent, MatchConfig, MatchResult, MatchRunner, MinimaxAgent, ProgressObserver,
        RandomAgent,
    },
    ports::Agent,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// Wins when it can, blocks when it must, random otherwise
    Defensive,
    /// Another perfect player
    Minimax,
}

impl OpponentKind {
    pub fn build(self) -> Box<dyn Agent> {
        match self {
            OpponentKind::Random => Box::new(RandomAgent::new("Random".to_string())),
            OpponentKind::Defensive => Box::new(DefensiveAgent::new("Defensive".to_string())),
            OpponentKind::Minimax => Box::new(MinimaxAgent::new("Minimax (opponent)".to_string())),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play the minimax engine against an opponent")]
pub struct MatchArgs {
    /// Opponent to play against
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: OpponentKind,

    /// Number of games (overrides the config file)
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which side the engine plays (`x` or `o`; X always moves first)
    #[arg(long)]
    pub agent_player: Option<String>,

    /// Load match settings from a JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl MatchArgs {
    /// Resolve the match configuration: file values first, then flags.
    pub fn resolve(&self) -> Result<(MatchConfig, CommonConfig)> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)
                .with_context(|| format!("load match config '{}'", path.display()))?,
            None => MatchConfig::default(),
        };

        if let Some(games) = self.games {
            config = config.with_games(games);
        }
        if let Some(value) = &self.agent_player {
            config = config.with_agent_player(parse_player_token(value, "--agent-player")?);
        }

        let common = CommonConfig {
            seed: self.seed,
            progress: !self.no_progress,
            ..CommonConfig::default()
        };
        let config = common.apply_to(config);
        config.validate()?;
        Ok((config, common))
    }
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let (config, common) = args.resolve()?;

    let mut agent = MinimaxAgent::new("Minimax".to_string());
    let mut opponent = args.opponent.build();

    print_section("Match Configuration");
    print_kv("Opponent", opponent.name());
    print_kv("Engine plays", &config.agent_player.to_string());
    print_kv("Games", &format_number(config.games as u64));
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut runner = MatchRunner::new(config.clone());
    if common.progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new(config.agent_player)));
    }
    let result = runner.run(&mut agent, opponent.as_mut())?;

    print_results(&result);

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("export results to '{}'", path.display()))?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}

fn print_results(result: &MatchResult) {
    print_section("Match Results");
    print_kv("Total games", &format_number(result.total_games as u64));
    print_kv(
        "Wins",
        &format!("{} ({})", result.wins, format_rate(result.win_rate)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, format_rate(result.draw_rate)),
    );
    print_kv(
        "Losses",
        &format!("{} ({})", result.losses, format_rate(result.loss_rate)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    fn args() -> MatchArgs {
        MatchArgs {
            opponent: OpponentKind::Random,
            games: None,
            seed: None,
            agent_player: None,
            config: None,
            export: None,
            no_progress: true,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.json");
        MatchConfig::default()
            .with_games(7)
            .with_seed(3)
            .with_agent_player(Player::O)
            .save(&path)
            .unwrap();

        let mut args = args();
        args.config = Some(path);
        args.seed = Some(11);
        let (config, common) = args.resolve().unwrap();

        assert_eq!(config.games, 7);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.agent_player, Player::O);
        assert!(!common.progress);
    }

    #[test]
    fn test_rejects_bad_agent_player() {
        let mut args = args();
        args.agent_player = Some("y".to_string());
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_opponents_build_with_names() {
        assert_eq!(OpponentKind::Random.build().name(), "Random");
        assert_eq!(OpponentKind::Defensive.build().name(), "Defensive");
    }
}

//! oxo CLI - perfect-play tic-tac-toe
//!
//! This CLI provides a unified interface for:
//! - Playing against the minimax engine
//! - Solving positions (best action, exact value, search statistics)
//! - Running matches between the engine and baseline opponents

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oxo::cli::config::CommonConfig;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe solver using minimax with alpha-beta pruning", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Find the best action and exact value of a position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play the engine against an opponent for many games
    Match(oxo::cli::commands::matches::MatchArgs),
}

fn init_logging(common: &CommonConfig) {
    let log_level = common.log_filter();
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&CommonConfig {
        verbose: cli.verbose,
        ..CommonConfig::default()
    });

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Match(args) => oxo::cli::commands::matches::execute(args),
    }
}

//! Solve command - best action and exact value for a position

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    cli::output::{
        describe_value, format_action, print_kv, print_section, print_stats, render_board,
    },
    search::{SearchStats, action_values, optimal_actions, search},
    tictactoe::{Action, Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position with alpha-beta search")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order, e.g. "XX..O...." (default: empty)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// List every legal action with its exact value
    #[arg(long)]
    pub all: bool,

    /// Export the solution to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
    pub optimal: bool,
}

/// Everything `solve` reports about one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub board: String,
    pub player_to_move: Option<Player>,
    pub terminal: bool,
    pub best_action: Option<Action>,
    pub value: i32,
    pub stats: SearchStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionValue>,
}

impl Solution {
    pub fn compute(board: &Board, all: bool) -> Self {
        let report = search(board);
        let actions = if all {
            let optimal = optimal_actions(board);
            action_values(board)
                .into_iter()
                .map(|(action, value)| ActionValue {
                    action,
                    value,
                    optimal: optimal.contains(&action),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            board: board.encode(),
            player_to_move: board.player_to_move(),
            terminal: board.is_terminal(),
            best_action: report.action,
            value: report.value,
            stats: report.stats,
            actions,
        }
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = match &args.board {
        Some(text) => Board::from_string(text).with_context(|| format!("parse board '{text}'"))?,
        None => Board::new(),
    };

    let solution = Solution::compute(&board, args.all);

    print_section("Position");
    print!("{}", render_board(&board));
    if solution.terminal {
        print_kv("Status", "terminal");
    } else {
        print_kv(
            "To move",
            &solution
                .player_to_move
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
        );
    }
    print_kv("Best action", &format_action(solution.best_action));
    print_kv(
        "Value",
        &format!("{} ({})", solution.value, describe_value(solution.value)),
    );

    print_section("Search");
    print_stats(&solution.stats);

    if args.all && !solution.actions.is_empty() {
        print_section("Actions");
        for entry in &solution.actions {
            let marker = if entry.optimal { "*" } else { " " };
            println!(
                "  {marker} {:8} {:>2}  {}",
                entry.action.to_string(),
                entry.value,
                describe_value(entry.value)
            );
        }
    }

    if let Some(path) = &args.export {
        export_solution(&solution, path)?;
        println!("\n✓ Solution exported to: {}", path.display());
    }

    Ok(())
}

/// Write a solution as pretty JSON
pub fn export_solution(solution: &Solution, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create export file '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, solution)?;
    Ok(())
}

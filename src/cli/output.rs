//! Output formatting for CLI

use crate::{
    search::SearchStats,
    tictactoe::{Action, Board},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: impl Into<u64>) -> String {
    let n: u64 = n.into();
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a rate as a percentage with one decimal
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Render a board with row and column indices
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for (row, line) in board.cells().chunks(3).enumerate() {
        let marks: Vec<String> = line.iter().map(|cell| cell.to_char().to_string()).collect();
        out.push_str(&format!("  {row} {}\n", marks.join(" ")));
    }
    out
}

/// Describe a minimax value from X's perspective
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

pub fn format_action(action: Option<Action>) -> String {
    action.map_or_else(|| "-".to_string(), |a| a.to_string())
}

pub fn print_stats(stats: &SearchStats) {
    print_kv("Nodes", &format_number(stats.nodes));
    print_kv("Leaves", &format_number(stats.leaves));
    print_kv("Cutoffs", &format_number(stats.cutoffs));
}

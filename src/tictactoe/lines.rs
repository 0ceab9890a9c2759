//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Action, Cell, Player, board::CELL_COUNT};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first completed line in [`WINNING_LINES`] order.
    ///
    /// On impossible boards with lines for both players, the earlier line
    /// wins; a legal board never has more than one owner.
    pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let owner = cells[a].to_player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some(owner)
        })
    }

    /// Find all actions that would immediately complete a line for the player
    pub fn winning_actions(cells: &[Cell; CELL_COUNT], player: Player) -> BTreeSet<Action> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .map(Action::from_index)
            .collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[Cell; CELL_COUNT],
        player: Player,
        line: &[usize; 3],
    ) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

//! High-level game management

use serde::{Deserialize, Serialize};

use super::{Action, Board, Outcome, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A game played from the empty board, with its move history
///
/// Serialized as its move list only; deserializing replays the moves and
/// rejects any that the rules would not have allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameRecord", try_from = "GameRecord")]
pub struct Game {
    moves: Vec<Move>,
    board: Board,
}

#[derive(Serialize, Deserialize)]
struct GameRecord {
    moves: Vec<Move>,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        GameRecord { moves: game.moves }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = crate::Error;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut game = Game::new();
        for (index, m) in record.moves.into_iter().enumerate() {
            let invalid = |message: String| crate::Error::InvalidGameRecord { index, message };
            if game.board.player_to_move() != Some(m.player) {
                return Err(invalid(format!("{} is not the player to move", m.player)));
            }
            game.play(m.action).map_err(|err| invalid(err.to_string()))?;
        }
        Ok(game)
    }
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Play an action for whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once the board is
    /// terminal, or the board's `IllegalAction` error for a bad action. A
    /// rejected action leaves the game unchanged.
    pub fn play(&mut self, action: Action) -> Result<Outcome, crate::Error> {
        if self.board.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        let player = self
            .board
            .player_to_move()
            .ok_or(crate::Error::GameOver)?;

        self.board = self.board.apply(action)?;
        self.moves.push(Move { action, player });

        Ok(self.board.outcome())
    }

    /// Current board
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Every board of the game, starting with the empty one
    pub fn history(&self) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        boards.push(board);
        for idx in self.moves.iter().filter_map(|m| m.action.index()) {
            board = board.successor(idx);
            boards.push(board);
        }
        boards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_moves() {
        let mut game = Game::new();
        assert_eq!(game.play(Action::new(1, 1)).unwrap(), Outcome::InProgress);
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.moves()[0].player, Player::X);
        assert_eq!(game.moves()[1].player, Player::O);
        assert_eq!(game.board().encode(), "O...X....");
    }

    #[test]
    fn test_rejected_action_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        assert!(game.play(Action::new(0, 0)).is_err());
        assert!(game.play(Action::new(0, 5)).is_err());
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.board().player_to_move(), Some(Player::O));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.play(Action::new(row, col)).unwrap();
        }
        assert_eq!(
            game.play(Action::new(0, 2)).unwrap(),
            Outcome::Win(Player::X)
        );
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_history_replays_game() {
        let mut game = Game::new();
        game.play(Action::new(2, 2)).unwrap();
        game.play(Action::new(0, 1)).unwrap();
        let history = game.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], Board::new());
        assert_eq!(history[2], game.board());
    }

    #[test]
    fn test_serde_replays_moves() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 2)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let loaded: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, game);
        assert_eq!(loaded.board().encode(), "..O.X....");
    }

    #[test]
    fn test_serde_rejects_impossible_records() {
        // O cannot open
        let wrong_player = r#"{"moves":[{"action":{"row":0,"col":0},"player":"O"}]}"#;
        assert!(serde_json::from_str::<Game>(wrong_player).is_err());

        // Same cell twice
        let occupied = r#"{"moves":[
            {"action":{"row":0,"col":0},"player":"X"},
            {"action":{"row":0,"col":0},"player":"O"}]}"#;
        assert!(serde_json::from_str::<Game>(occupied).is_err());

        let off_board = r#"{"moves":[{"action":{"row":3,"col":0},"player":"X"}]}"#;
        assert!(serde_json::from_str::<Game>(off_board).is_err());
    }
}

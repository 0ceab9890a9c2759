//! Built-in agents: the minimax engine and baselines to play it against

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    search::best_action,
    tictactoe::{Action, Board, LineAnalyzer},
};

fn no_legal_actions(board: &Board) -> Error {
    Error::NoLegalActions {
        board: board.encode(),
    }
}

/// Perfect player backed by alpha-beta search
pub struct MinimaxAgent {
    name: String,
}

impl MinimaxAgent {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        best_action(board).ok_or_else(|| no_legal_actions(board))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random legal actions (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(no_legal_actions(board));
        }
        let actions = board.legal_actions();
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// One-ply tactical baseline
///
/// This agent will:
/// 1. Complete its own line if it can
/// 2. Otherwise block a line the opponent could complete next move
/// 3. Otherwise play randomly
pub struct DefensiveAgent {
    inner: RandomAgent,
}

impl DefensiveAgent {
    pub fn new(name: String) -> Self {
        Self {
            inner: RandomAgent::new(name),
        }
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            inner: RandomAgent::with_seed(name, seed),
        }
    }

    fn tactical_action(board: &Board) -> Option<Action> {
        let mover = board.player_to_move()?;
        let cells = board.cells();
        let own = LineAnalyzer::winning_actions(cells, mover);
        if let Some(&action) = own.first() {
            return Some(action);
        }
        LineAnalyzer::winning_actions(cells, mover.opponent())
            .first()
            .copied()
    }
}

impl Agent for DefensiveAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(no_legal_actions(board));
        }
        match Self::tactical_action(board) {
            Some(action) => Ok(action),
            None => self.inner.select_action(board),
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.inner.set_rng_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_agent_blocks() {
        let mut agent = MinimaxAgent::new("Minimax".to_string());
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(agent.select_action(&board).unwrap(), Action::new(0, 2));
    }

    #[test]
    fn test_agents_refuse_terminal_boards() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut minimax = MinimaxAgent::new("Minimax".to_string());
        let mut random = RandomAgent::with_seed("Random".to_string(), 7);
        let mut defensive = DefensiveAgent::with_seed("Defensive".to_string(), 7);
        assert!(matches!(
            minimax.select_action(&board),
            Err(Error::NoLegalActions { .. })
        ));
        assert!(random.select_action(&board).is_err());
        assert!(defensive.select_action(&board).is_err());
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed("A".to_string(), 42);
        let mut b = RandomAgent::new("B".to_string());
        b.set_rng_seed(42).unwrap();
        for _ in 0..10 {
            let action = a.select_action(&board).unwrap();
            assert_eq!(action, b.select_action(&board).unwrap());
            assert!(board.legal_actions().contains(&action));
        }
    }

    #[test]
    fn test_defensive_agent_prefers_win_then_block() {
        let mut agent = DefensiveAgent::with_seed("Defensive".to_string(), 1);

        // X to move can win at (0, 2) or block O at (1, 2); winning comes first
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(agent.select_action(&board).unwrap(), Action::new(0, 2));

        // O to move, no win of its own: block the top row
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(agent.select_action(&board).unwrap(), Action::new(0, 2));
    }
}

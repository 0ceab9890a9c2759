//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::IllegalActionReason;

/// Side length of the grid
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the grid
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always opens and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// A (row, column) coordinate naming the cell to mark.
///
/// Ordering is row-major, which is also the order [`Board::legal_actions`]
/// yields actions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Action for a row-major cell index (0-8)
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Row-major cell index, or `None` when either coordinate is off the grid
    pub fn index(self) -> Option<usize> {
        (self.row < BOARD_SIZE && self.col < BOARD_SIZE).then(|| self.row * BOARD_SIZE + self.col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Accepts "1 2", "1,2" and "(1, 2)". Range is not checked here; that is
    /// the board's job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidActionInput {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(invalid());
        };
        let row = row.parse().map_err(|_| invalid())?;
        let col = col.parse().map_err(|_| invalid())?;
        Ok(Action { row, col })
    }
}

/// A 3x3 grid of marks.
///
/// The player to move is derived from the marks alone, so two boards with the
/// same cells are the same position regardless of how they were reached. The
/// type is `Copy` (9 bytes) and every transition returns a fresh value, which
/// keeps sibling branches of a search independent of one another.
///
/// Serializes as its [`encode`](Board::encode)d string and deserializes
/// through [`from_string`](Board::from_string), so piece counts are checked
/// on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw cells without any consistency checks.
    ///
    /// Useful for positions that cannot arise in play (e.g. two winners);
    /// every query on `Board` stays well-defined for them.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if the count is not 9 or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; CELL_COUNT], crate::Error> {
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; CELL_COUNT]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 cell characters; whitespace and `/`
    /// row separators are ignored, so `"XO./.X./..O"` and `"XO. .X. ..O"` are
    /// both accepted.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board has other than 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are not reachable with X moving first
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }

    /// The raw cells, row-major
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at the given coordinate, or `None` when off the grid
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|idx| self.cells[idx])
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// The player whose turn it is, derived from the number of marks.
    ///
    /// X moves on an even count, O on an odd one; a full board has no mover.
    pub fn player_to_move(&self) -> Option<Player> {
        match self.occupied_count() {
            CELL_COUNT => None,
            n if n.is_multiple_of(2) => Some(Player::X),
            _ => Some(Player::O),
        }
    }

    /// Every empty cell as an action, in row-major order.
    ///
    /// Empty for a full board. A board that already has a winner still
    /// reports its empty cells; callers decide whether the game is over.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Place the mover's mark on `action` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalAction`](crate::Error::IllegalAction) if either
    /// coordinate is outside `0..=2` or the cell is occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        let illegal = |reason| crate::Error::IllegalAction {
            row: action.row,
            col: action.col,
            reason,
        };

        let idx = action
            .index()
            .ok_or_else(|| illegal(IllegalActionReason::OutOfBounds))?;
        if self.cells[idx] != Cell::Empty {
            return Err(illegal(IllegalActionReason::Occupied));
        }

        Ok(self.successor(idx))
    }

    /// Transition for an index already known to be empty.
    ///
    /// An empty cell implies a non-full board, so the mover always exists and
    /// is read straight from the parity of the mark count.
    pub(crate) fn successor(&self, idx: usize) -> Board {
        debug_assert_eq!(self.cells[idx], Cell::Empty, "successor on occupied cell");
        let mark = if self.occupied_count().is_multiple_of(2) {
            Cell::X
        } else {
            Cell::O
        };
        let mut next = *self;
        next.cells[idx] = mark;
        next
    }

    /// Each legal action paired with the board it leads to, in the same
    /// row-major order as [`Board::legal_actions`].
    pub(crate) fn children(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (Action::from_index(i), self.successor(i)))
    }

    /// Get a compact string representation (row-major, `.` for empty)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.encode()
    }
}

impl TryFrom<String> for Board {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::from_string(&s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The empty starting board
pub fn initial_board() -> Board {
    Board::new()
}

/// See [`Board::player_to_move`]
pub fn player_to_move(board: &Board) -> Option<Player> {
    board.player_to_move()
}

/// See [`Board::legal_actions`]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    board.legal_actions()
}

/// See [`Board::apply`]
pub fn apply(board: &Board, action: Action) -> Result<Board, crate::Error> {
    board.apply(action)
}

//! Core domain types for tic-tac-toe.

use crate::position::Move;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell carrying a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the owner of the mark, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character symbol used by board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Player::X) => 'X',
            Cell::Marked(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every transition produces a fresh
/// snapshot, so a board handed to the engine is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Builds a board from rows of cells.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell targeted by a move, or `None` if the move is off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if the cell targeted by a move is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// The move must be on the board; callers validate first.
    pub(crate) fn with_cell(mut self, mv: Move, cell: Cell) -> Self {
        self.cells[mv.row][mv.col] = cell;
        self
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over every cell in row-major order with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL
            .into_iter()
            .map(move |mv| (mv, self.cells[mv.row][mv.col]))
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(mv, _)| mv)
    }

    /// Counts the marks placed by a player.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.mark() == Some(player))
            .count()
    }

    /// Counts all filled cells.
    pub fn filled(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }
}

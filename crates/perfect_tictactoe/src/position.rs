//! Moves: (row, column) coordinates on the board.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A move on the tic-tac-toe board: the cell at `(row, col)` to mark.
///
/// Coordinates are not range-checked on construction. Off-board moves
/// are representable so that [`apply_move`](crate::apply_move) can reject
/// them with [`InvalidMove`](crate::InvalidMove).
///
/// Moves order row-major, which is also the order in which the engine
/// enumerates and evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0 (top) to 2 (bottom).
    pub row: usize,
    /// Column index, 0 (left) to 2 (right).
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 on-board moves, row-major.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// The centre cell.
    pub const CENTER: Move = Move::new(1, 1);

    /// The four corner cells.
    pub const CORNERS: [Move; 4] = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(2, 0),
        Move::new(2, 2),
    ];

    /// Checks whether both coordinates are in `0..3`.
    pub fn in_bounds(self) -> bool {
        self.row < Board::SIZE && self.col < Board::SIZE
    }

    /// Row-major index (0-8) for on-board moves.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * Board::SIZE + self.col)
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for on-board moves.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "top-left",
            (0, 1) => "top-center",
            (0, 2) => "top-right",
            (1, 0) => "middle-left",
            (1, 1) => "center",
            (1, 2) => "middle-right",
            (2, 0) => "bottom-left",
            (2, 1) => "bottom-center",
            (2, 2) => "bottom-right",
            _ => "off-board",
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), Some(i));
            assert_eq!(Move::from_index(i), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_off_board_moves() {
        assert!(!Move::new(3, 0).in_bounds());
        assert!(!Move::new(0, 3).in_bounds());
        assert_eq!(Move::new(5, 5).index(), None);
        assert_eq!(Move::new(3, 1).label(), "off-board");
    }

    #[test]
    fn test_row_major_order() {
        let mut sorted = Move::ALL;
        sorted.sort();
        assert_eq!(sorted, Move::ALL);
        assert!(Move::new(0, 2) < Move::new(1, 0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Move::CENTER.label(), "center");
        assert_eq!(Move::new(2, 0).label(), "bottom-left");
        assert_eq!(Move::new(1, 2).to_string(), "(1, 2)");
    }
}

//! Error types for the engine.

use crate::position::Move;
use derive_more::{Display, Error};

/// A move that cannot be applied to the board.
///
/// This is the only failure the engine reports. Callers driving a game
/// loop should catch it at the input boundary and ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// A coordinate lies outside `0..3`.
    #[display("Invalid move: ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already carries a mark.
    #[display("Invalid move: square ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl InvalidMove {
    /// Returns the rejected move.
    pub fn attempted(&self) -> Move {
        match *self {
            InvalidMove::OutOfBounds { row, col } | InvalidMove::Occupied { row, col } => {
                Move::new(row, col)
            }
        }
    }
}

/// A board string that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The string does not describe exactly nine cells.
    #[display("board must have 9 cells, got {got} in '{input}'")]
    WrongCellCount {
        /// Number of cells found.
        got: usize,
        /// The rejected input.
        input: String,
    },

    /// A character is neither a mark, an empty marker nor a separator.
    #[display("invalid character '{character}' at cell {position} in '{input}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index (0-8) at which it appeared.
        position: usize,
        /// The rejected input.
        input: String,
    },

    /// Mark counts cannot arise from X-first alternating play.
    #[display("invalid mark counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidMarkCounts {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },
}

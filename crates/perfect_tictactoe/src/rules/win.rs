//! Win detection logic for tic-tac-toe.

use crate::position::Move;
use crate::types::{Board, Cell, Player};
use strum::IntoEnumIterator;

/// The eight winning lines, scanned in this order.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Checks whether `player` owns all three cells of any line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.get(mv).and_then(Cell::mark) == Some(player)))
}

/// Returns the winner of the board, if there is one.
///
/// X is checked before O. Legal play never gives both players a line;
/// on a board where both do, X is reported because of that scan order.
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_line(board, player))
}

//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().next().is_none()
}

/// Checks if the game ended without a winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    const X: Cell = Cell::Marked(Player::X);
    const O: Cell = Cell::Marked(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_cells([[X, O, X], [O, X, X], [O, X, E]]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the main diagonal.
        let board = Board::from_cells([[X, O, X], [O, X, O], [O, X, X]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

//! Board queries and transitions.
//!
//! Turn order is derived from the board itself: X moves first and the
//! players alternate, so the mark counts always tell whose turn it is.

use crate::error::InvalidMove;
use crate::position::Move;
use crate::types::{Board, Cell, Player};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Returns the starting board: every cell empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// Equal mark counts (including the empty board) mean X moves;
/// otherwise the player with fewer marks does.
pub fn current_player(board: &Board) -> Player {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);
    if x_count > o_count {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty cell as a legal move.
///
/// The set iterates row-major. Search keeps the first of several equally
/// good moves, so this order decides ties; callers should not depend on
/// which optimal move that is.
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    board.empty_cells().collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidMove::OutOfBounds`] if either coordinate is outside
/// `0..3`, or [`InvalidMove::Occupied`] if the cell is already marked.
#[instrument(level = "trace", skip(board), fields(row = mv.row, col = mv.col))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    let Move { row, col } = mv;
    match board.get(mv) {
        None => {
            debug!("Rejected off-board move");
            Err(InvalidMove::OutOfBounds { row, col })
        }
        Some(Cell::Marked(owner)) => {
            debug!(?owner, "Rejected move onto occupied square");
            Err(InvalidMove::Occupied { row, col })
        }
        Some(Cell::Empty) => {
            let player = current_player(board);
            Ok(board.with_cell(mv, Cell::Marked(player)))
        }
    }
}

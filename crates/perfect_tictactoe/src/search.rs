//! Exhaustive minimax search.
//!
//! The 3x3 game tree is small enough to search completely on every call:
//! no pruning, no transposition table. Values are always from X's point of
//! view (1 = X wins, 0 = draw, -1 = O wins).

use crate::engine::{current_player, legal_moves};
use crate::position::Move;
use crate::rules::{is_terminal, utility};
use crate::types::{Board, Cell, Player};
use tracing::{debug, instrument};

/// Game-theoretic value of `board` under optimal play by both sides.
///
/// `mover` is the player whose move produced `board`. After X moves, O
/// picks the reply that minimises the value; after O moves, X maximises.
/// On boards reached through [`apply_move`](crate::apply_move) the mover is always the
/// opponent of [`current_player`].
pub fn minimax_value(board: &Board, mover: Player) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }

    let replies = successors(board).map(|child| minimax_value(&child, mover.opponent()));
    let value = match mover {
        Player::X => replies.min(),
        Player::O => replies.max(),
    };
    // A non-terminal board always has at least one reply.
    value.unwrap_or_else(|| utility(board))
}

/// Boards reachable in one move, in row-major move order.
fn successors(board: &Board) -> impl Iterator<Item = Board> + '_ {
    let mark = Cell::Marked(current_player(board));
    board
        .empty_cells()
        .map(move |mv| board.with_cell(mv, mark))
}

/// Value of `board` for the player about to move, under optimal play.
///
/// Terminal boards score their [`utility`].
pub fn position_value(board: &Board) -> i32 {
    if is_terminal(board) {
        utility(board)
    } else {
        minimax_value(board, current_player(board).opponent())
    }
}

/// Every legal move paired with the minimax value of the board it leads to.
///
/// Moves come in row-major order. Terminal boards have no moves.
#[instrument(skip(board))]
pub fn move_values(board: &Board) -> Vec<(Move, i32)> {
    if is_terminal(board) {
        return Vec::new();
    }

    let player = current_player(board);
    let mark = Cell::Marked(player);
    legal_moves(board)
        .into_iter()
        .map(|mv| {
            let value = minimax_value(&board.with_cell(mv, mark), player);
            debug!(%mv, value, "Evaluated move");
            (mv, value)
        })
        .collect()
}

/// Returns true if `candidate` is strictly better than `incumbent` for `player`.
fn improves(player: Player, candidate: i32, incumbent: i32) -> bool {
    match player {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Returns the optimal move for the player to move, or `None` if the game is over.
///
/// X maximises and O minimises the value. When several moves share the
/// best value the first one in row-major order is kept; callers should
/// only rely on the move being optimal.
#[instrument(skip(board), fields(player = ?current_player(board)))]
pub fn best_move(board: &Board) -> Option<Move> {
    let player = current_player(board);
    let mut best: Option<(Move, i32)> = None;

    for (mv, value) in move_values(board) {
        match best {
            Some((_, incumbent)) if !improves(player, value, incumbent) => {}
            _ => best = Some((mv, value)),
        }
    }

    match best {
        Some((mv, value)) => {
            debug!(%mv, value, "Selected move");
            Some(mv)
        }
        None => {
            debug!("Board is terminal, no move to make");
            None
        }
    }
}

/// All moves achieving the best value for the player to move.
///
/// [`best_move`] always returns one of these.
#[instrument(skip(board))]
pub fn optimal_moves(board: &Board) -> Vec<Move> {
    let values = move_values(board);
    let target = match current_player(board) {
        Player::X => values.iter().map(|&(_, v)| v).max(),
        Player::O => values.iter().map(|&(_, v)| v).min(),
    };

    match target {
        Some(target) => values
            .into_iter()
            .filter(|&(_, v)| v == target)
            .map(|(mv, _)| mv)
            .collect(),
        None => Vec::new(),
    }
}

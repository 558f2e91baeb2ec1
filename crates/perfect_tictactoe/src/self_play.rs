//! Engine-versus-engine games.

use crate::engine::apply_move;
use crate::error::InvalidMove;
use crate::position::Move;
use crate::rules::{Outcome, outcome};
use crate::search::best_move;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A finished game: where it started, the moves played and how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    start: Board,
    /// Moves in the order they were played.
    moves: Vec<Move>,
    /// Board after the last move.
    final_board: Board,
    /// Result of the game.
    outcome: Outcome,
}

impl GameRecord {
    /// Replays the recorded moves from the starting board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if a recorded move does not apply.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self) -> Result<Board, InvalidMove> {
        self.moves
            .iter()
            .try_fold(self.start, |board, &mv| apply_move(&board, mv))
    }

    /// Every position of the game, from the start to the final board.
    pub fn positions(&self) -> Result<Vec<Board>, InvalidMove> {
        let mut positions = Vec::with_capacity(self.moves.len() + 1);
        positions.push(self.start);
        let mut board = self.start;
        for &mv in &self.moves {
            board = apply_move(&board, mv)?;
            positions.push(board);
        }
        Ok(positions)
    }
}

/// Plays the engine against itself from `start` until the game ends.
///
/// Both sides always play [`best_move`]. A terminal starting board yields
/// a record with no moves.
///
/// # Errors
///
/// Propagates [`InvalidMove`] from [`apply_move`]; the engine only picks
/// legal moves, so this does not happen on boards reached by play.
#[instrument(skip(start), fields(start = %start.to_compact()))]
pub fn self_play(start: &Board) -> Result<GameRecord, InvalidMove> {
    let mut board = *start;
    let mut moves = Vec::new();

    while let Some(mv) = best_move(&board) {
        board = apply_move(&board, mv)?;
        moves.push(mv);
    }

    let outcome = outcome(&board);
    info!(moves = moves.len(), %outcome, "Self-play finished");

    Ok(GameRecord {
        start: *start,
        moves,
        final_board: board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    const X: Cell = Cell::Marked(Player::X);
    const O: Cell = Cell::Marked(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_terminal_start_has_no_moves() {
        let start = Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]);
        let record = self_play(&start).unwrap();
        assert!(record.moves().is_empty());
        assert_eq!(record.final_board(), &start);
        assert_eq!(record.outcome(), &Outcome::Won(Player::X));
    }

    #[test]
    fn test_winning_side_converts() {
        // X to move with an open row.
        let start = Board::from_cells([[X, X, E], [O, O, E], [E, E, E]]);
        let record = self_play(&start).unwrap();
        assert_eq!(record.moves(), &vec![Move::new(0, 2)]);
        assert_eq!(record.outcome(), &Outcome::Won(Player::X));
    }

    #[test]
    fn test_replay_reproduces_final_board() {
        let start = Board::from_cells([[X, E, E], [E, O, E], [E, E, E]]);
        let record = self_play(&start).unwrap();
        assert_eq!(record.replay().unwrap(), *record.final_board());

        let positions = record.positions().unwrap();
        assert_eq!(positions.len(), record.moves().len() + 1);
        assert_eq!(positions.first(), Some(&start));
        assert_eq!(positions.last(), Some(record.final_board()));
    }
}

//! Perfect-play tic-tac-toe.
//!
//! A small, pure decision engine: given a board it works out whose turn it
//! is, which moves are legal, whether the game is over, and which move is
//! optimal assuming both sides play perfectly.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`] and [`Move`]. Boards are
//!   `Copy` snapshots; applying a move returns a new board.
//! - **Engine**: turn inference and move application
//!   ([`current_player`], [`legal_moves`], [`apply_move`]).
//! - **Rules**: [`winner`], [`is_terminal`], [`utility`], [`outcome`].
//! - **Search**: exhaustive minimax ([`best_move`], [`minimax_value`]).
//! - **Self-play** and **notation** for drivers and tests.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Player, best_move, current_player, initial_state};
//!
//! let board = initial_state();
//! assert_eq!(current_player(&board), Player::X);
//!
//! let board: Board = "XX.OO....".parse()?;
//! assert_eq!(best_move(&board).map(|mv| (mv.row, mv.col)), Some((0, 2)));
//! # Ok::<(), perfect_tictactoe::ParseBoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod notation;
mod position;
mod rules;
mod search;
mod self_play;
mod types;

// Crate-level exports - Domain types
pub use position::Move;
pub use types::{Board, Cell, Player};

// Crate-level exports - Errors
pub use error::{InvalidMove, ParseBoardError};

// Crate-level exports - Engine queries
pub use engine::{apply_move, current_player, initial_state, legal_moves};

// Crate-level exports - Rules
pub use rules::{LINES, Outcome, has_line, is_draw, is_full, is_terminal, outcome, utility, winner};

// Crate-level exports - Search
pub use search::{best_move, minimax_value, move_values, optimal_moves, position_value};

// Crate-level exports - Self-play
pub use self_play::{GameRecord, self_play};

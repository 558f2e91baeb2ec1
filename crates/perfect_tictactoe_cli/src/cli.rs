//! Command-line interface for the perfect_tictactoe driver.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use perfect_tictactoe::Board;
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - exhaustive minimax engine
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board in compact notation, e.g. "X...O...."
        board: Board,
    },

    /// Print the minimax value of every legal move
    Analyze {
        /// Board in compact notation, e.g. "X...O...."
        board: Board,
    },

    /// Play the engine against itself until the game ends
    SelfPlay {
        /// Starting board in compact notation (defaults to the empty board)
        #[arg(long)]
        board: Option<Board>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from(["perfect_tictactoe", "best-move", "X...O...."]).unwrap();
        match cli.command {
            Command::BestMove { board } => assert_eq!(board.to_compact(), "X...O...."),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_parse_self_play_with_format() {
        let cli = Cli::try_parse_from(["perfect_tictactoe", "self-play", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::SelfPlay { board: None }));
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["perfect_tictactoe", "analyze", "XXX"]).is_err());
    }
}

//! Command-line driver for the perfect_tictactoe engine.
//!
//! The driver is non-interactive: each command takes a board, asks the
//! engine about it and prints the answer as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Commands
pub use commands::{
    AnalysisReport, BestMoveReport, MoveAnalysis, analysis_report, best_move_report, run,
};

// Crate-level exports - Configuration
pub use config::{CliConfig, ConfigError, OutputFormat};

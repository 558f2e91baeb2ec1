//! Command implementations: query the engine, then print the result.

use crate::cli::Command;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use perfect_tictactoe::{
    Board, GameRecord, Move, Outcome, Player, best_move, current_player, initial_state,
    move_values, optimal_moves, outcome, position_value, self_play,
};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// Result of the `best-move` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Board in compact notation.
    pub board: String,
    /// Player to move.
    pub to_move: Player,
    /// Status of the board.
    pub outcome: Outcome,
    /// Engine's move, absent on finished boards.
    pub best_move: Option<Move>,
    /// Value of the board under optimal play (X's point of view).
    pub value: i32,
}

/// One row of the `analyze` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveAnalysis {
    /// The move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Minimax value after playing it.
    pub value: i32,
    /// Whether it is among the best moves.
    pub optimal: bool,
}

/// Result of the `analyze` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Board in compact notation.
    pub board: String,
    /// Player to move.
    pub to_move: Player,
    /// Value of the board under optimal play.
    pub value: i32,
    /// Every legal move, row-major.
    pub moves: Vec<MoveAnalysis>,
}

/// Builds the `best-move` report for a board.
#[instrument(skip(board))]
pub fn best_move_report(board: &Board) -> BestMoveReport {
    BestMoveReport {
        board: board.to_compact(),
        to_move: current_player(board),
        outcome: outcome(board),
        best_move: best_move(board),
        value: position_value(board),
    }
}

/// Builds the `analyze` report for a board.
#[instrument(skip(board))]
pub fn analysis_report(board: &Board) -> AnalysisReport {
    let optimal = optimal_moves(board);
    let moves = move_values(board)
        .into_iter()
        .map(|(mv, value)| MoveAnalysis {
            mv,
            value,
            optimal: optimal.contains(&mv),
        })
        .collect();

    AnalysisReport {
        board: board.to_compact(),
        to_move: current_player(board),
        value: position_value(board),
        moves,
    }
}

fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

impl BestMoveReport {
    fn write_text(&self, out: &mut impl Write, board: &Board) -> Result<()> {
        writeln!(out, "{}", board)?;
        writeln!(out)?;
        match self.best_move {
            Some(mv) => {
                writeln!(out, "{} to move: play {} {}", self.to_move, mv, mv.label())?;
                writeln!(out, "Expected result: {}", describe_value(self.value))?;
            }
            None => writeln!(out, "Game over: {}", self.outcome)?,
        }
        Ok(())
    }
}

impl AnalysisReport {
    fn write_text(&self, out: &mut impl Write, board: &Board) -> Result<()> {
        writeln!(out, "{}", board)?;
        writeln!(out)?;
        if self.moves.is_empty() {
            writeln!(out, "Game over: {}", outcome(board))?;
            return Ok(());
        }
        writeln!(
            out,
            "{} to move, value {} ({})",
            self.to_move,
            self.value,
            describe_value(self.value)
        )?;
        for row in &self.moves {
            let marker = if row.optimal { "*" } else { " " };
            writeln!(
                out,
                "{} {} {:<13} {:>2} ({})",
                marker,
                row.mv,
                row.mv.label(),
                row.value,
                describe_value(row.value)
            )?;
        }
        Ok(())
    }
}

fn write_record_text(out: &mut impl Write, record: &GameRecord) -> Result<()> {
    let positions = record
        .positions()
        .context("Self-play produced an unreplayable game")?;
    writeln!(out, "{}", record.start())?;
    for (mv, board) in record.moves().iter().zip(positions.iter().skip(1)) {
        writeln!(out)?;
        writeln!(out, "{} {}", mv, mv.label())?;
        writeln!(out, "{}", board)?;
    }
    writeln!(out)?;
    writeln!(out, "Result: {}", record.outcome())?;
    Ok(())
}

/// Runs a command, writing its result to `out`.
#[instrument(skip(out))]
pub fn run(command: &Command, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match command {
        Command::BestMove { board } => {
            let report = best_move_report(board);
            info!(best_move = ?report.best_move, "Best move computed");
            match format {
                OutputFormat::Text => report.write_text(out, board),
                OutputFormat::Json => write_json(out, &report),
            }
        }
        Command::Analyze { board } => {
            let report = analysis_report(board);
            match format {
                OutputFormat::Text => report.write_text(out, board),
                OutputFormat::Json => write_json(out, &report),
            }
        }
        Command::SelfPlay { board } => {
            let start = board.unwrap_or_else(initial_state);
            let record = self_play(&start).context("Self-play failed")?;
            match format {
                OutputFormat::Text => write_record_text(out, &record),
                OutputFormat::Json => write_json(out, &record),
            }
        }
    }
}

//! Engine-versus-engine and engine-versus-everything games.

use perfect_tictactoe::{
    Board, Move, Outcome, Player, apply_move, best_move, current_player, initial_state,
    is_terminal, legal_moves, self_play, winner,
};

#[test]
fn test_self_play_from_empty_board_draws() {
    let record = self_play(&initial_state()).unwrap();
    assert_eq!(record.outcome(), &Outcome::Draw);
    assert_eq!(record.moves().len(), 9);
    assert_eq!(record.replay().unwrap(), *record.final_board());
}

#[test]
fn test_self_play_after_each_opening_draws() {
    for mv in Move::ALL {
        let start = apply_move(&initial_state(), mv).unwrap();
        let record = self_play(&start).unwrap();
        assert_eq!(record.outcome(), &Outcome::Draw, "opening {}", mv);
    }
}

#[test]
fn test_self_play_is_deterministic() {
    let start: Board = "X...O....".parse().unwrap();
    assert_eq!(self_play(&start).unwrap(), self_play(&start).unwrap());
}

#[test]
fn test_record_serializes() {
    let start: Board = "XX.OO....".parse().unwrap();
    let record = self_play(&start).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["outcome"], serde_json::json!({ "Won": "X" }));
    let back: perfect_tictactoe::GameRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

/// Plays `engine` with `best_move` against every possible opponent line.
/// Returns the number of finished games, panicking if the engine ever loses.
fn explore(board: Board, engine: Player) -> usize {
    if is_terminal(&board) {
        assert_ne!(
            winner(&board),
            Some(engine.opponent()),
            "engine lost on {}",
            board.to_compact()
        );
        return 1;
    }

    if current_player(&board) == engine {
        let mv = best_move(&board).expect("non-terminal board has a move");
        explore(apply_move(&board, mv).unwrap(), engine)
    } else {
        legal_moves(&board)
            .into_iter()
            .map(|mv| explore(apply_move(&board, mv).unwrap(), engine))
            .sum()
    }
}

#[test]
fn test_engine_never_loses_as_x() {
    assert!(explore(initial_state(), Player::X) > 0);
}

#[test]
fn test_engine_never_loses_as_o() {
    assert!(explore(initial_state(), Player::O) > 0);
}

//! Engine tests - full sessions driven through the public command surface

use blockfall::core::{GameEngine, GameEvent};
use blockfall::types::{GameCommand, GameState, Position};

fn started(seed: u32) -> GameEngine {
    let mut engine = GameEngine::new(seed);
    engine.start();
    engine
}

/// Hard-drop until the spawn column stack tops out
fn drive_to_game_over(engine: &mut GameEngine) {
    for _ in 0..100 {
        if engine.state() == GameState::GameOver {
            return;
        }
        engine.hard_drop();
    }
    panic!("session did not end within 100 drops");
}

#[test]
fn test_session_lifecycle() {
    let mut engine = GameEngine::new(12345);
    assert_eq!(engine.state(), GameState::Idle);

    engine.start();
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.current_piece().unwrap().origin, Position::new(0, 3));
    assert_eq!(engine.preview().len(), 5);
    assert_eq!(engine.score(), 0);

    engine.pause();
    assert_eq!(engine.state(), GameState::Paused);
    engine.resume();
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn test_idle_engine_rejects_everything_but_start() {
    let mut engine = GameEngine::new(1);

    for command in [
        GameCommand::Pause,
        GameCommand::Resume,
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::HardDrop,
        GameCommand::RotateCw,
        GameCommand::Hold,
        GameCommand::Tick,
    ] {
        engine.apply(command);
    }

    assert_eq!(engine.state(), GameState::Idle);
    assert!(engine.current_piece().is_none());
    assert!(engine.take_events().is_empty());

    engine.apply(GameCommand::Start);
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn test_commands_route_to_entry_points() {
    let mut engine = started(12345);
    let spawn = engine.current_piece().unwrap();

    engine.apply(GameCommand::MoveRight);
    assert_eq!(
        engine.current_piece().unwrap().origin.col,
        spawn.origin.col + 1
    );

    engine.apply(GameCommand::MoveLeft);
    assert_eq!(engine.current_piece().unwrap().origin, spawn.origin);

    engine.apply(GameCommand::RotateCw);
    assert_eq!(engine.current_piece().unwrap().rotation, 1);

    engine.apply(GameCommand::Tick);
    assert_eq!(
        engine.current_piece().unwrap().origin.row,
        spawn.origin.row + 1
    );

    engine.apply(GameCommand::Pause);
    assert_eq!(engine.state(), GameState::Paused);
    engine.apply(GameCommand::Resume);
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn test_paused_session_is_frozen() {
    let mut engine = started(12345);
    engine.pause();

    let before = engine.snapshot();
    for command in [
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::HardDrop,
        GameCommand::RotateCw,
        GameCommand::Hold,
        GameCommand::Tick,
    ] {
        engine.apply(command);
    }

    assert_eq!(engine.snapshot(), before);
    assert!(engine.take_events().is_empty());
}

#[test]
fn test_gravity_locks_first_piece() {
    let mut engine = started(12345);

    // Plenty of ticks for the first piece to land and lock, but not enough
    // for the second: exactly one tetromino is on the board
    for _ in 0..25 {
        engine.tick();
    }

    assert_eq!(engine.state(), GameState::Playing);
    assert!(engine.current_piece().is_some());
    assert_eq!(engine.board().occupied_cells().count(), 4);
    assert!(engine.take_events().contains(&GameEvent::PieceLocked));
}

#[test]
fn test_hard_drop_lands_on_ghost_cells() {
    let mut engine = started(42);
    let ghost = engine.ghost_piece().unwrap();

    engine.hard_drop();

    for pos in ghost.cells() {
        assert_eq!(engine.board().cell(pos), Some(Some(ghost.kind)));
    }
}

#[test]
fn test_events_arrive_in_emission_order() {
    let mut engine = started(12345);
    engine.take_events();

    engine.move_right();
    engine.rotate_cw();
    engine.hard_drop();

    // The first drop of a session cannot complete a row
    assert_eq!(
        engine.take_events(),
        vec![
            GameEvent::PieceMoved,
            GameEvent::PieceRotated,
            GameEvent::PieceLocked,
        ]
    );
    assert!(engine.take_events().is_empty());
}

#[test]
fn test_hold_cycle_via_commands() {
    let mut engine = started(12345);
    let first_kind = engine.current_piece().unwrap().kind;

    engine.apply(GameCommand::Hold);
    assert_eq!(engine.held_piece(), Some(first_kind));
    assert!(!engine.can_hold());

    // Second hold before the next spawn is rejected
    let current = engine.current_piece();
    engine.apply(GameCommand::Hold);
    assert_eq!(engine.current_piece(), current);

    // Locking re-arms the hold; holding again swaps the first kind back
    engine.apply(GameCommand::HardDrop);
    assert!(engine.can_hold());
    engine.apply(GameCommand::Hold);
    assert_eq!(engine.current_piece().unwrap().kind, first_kind);
}

#[test]
fn test_session_ends_when_stack_tops_out() {
    let mut engine = started(12345);

    let mut events = Vec::new();
    for _ in 0..100 {
        if engine.state() == GameState::GameOver {
            break;
        }
        engine.hard_drop();
        events.extend(engine.take_events());
    }

    assert_eq!(engine.state(), GameState::GameOver);
    assert!(engine.current_piece().is_none());
    assert!(events.contains(&GameEvent::GameOver));

    // Straight center drops never complete a row
    assert!(!events
        .iter()
        .any(|event| matches!(event, GameEvent::LinesCleared { .. })));
    assert_eq!(engine.lines_cleared(), 0);
    assert_eq!(engine.tetris_count(), 0);
    assert!(engine.score() > 0);
}

#[test]
fn test_game_over_ignores_commands_until_start() {
    let mut engine = started(12345);
    drive_to_game_over(&mut engine);
    let final_score = engine.score();
    engine.take_events();

    for command in [
        GameCommand::MoveLeft,
        GameCommand::SoftDrop,
        GameCommand::HardDrop,
        GameCommand::RotateCw,
        GameCommand::Hold,
        GameCommand::Tick,
        GameCommand::Pause,
        GameCommand::Resume,
    ] {
        engine.apply(command);
    }
    assert_eq!(engine.state(), GameState::GameOver);
    assert_eq!(engine.score(), final_score);
    assert!(engine.take_events().is_empty());

    engine.apply(GameCommand::Start);
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.lines_cleared(), 0);
    assert!(engine.board().occupied_cells().next().is_none());
    assert!(engine.held_piece().is_none());
}

#[test]
fn test_same_seed_same_session() {
    let script = [
        GameCommand::Tick,
        GameCommand::MoveLeft,
        GameCommand::RotateCw,
        GameCommand::Tick,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::Tick,
        GameCommand::HardDrop,
        GameCommand::Hold,
        GameCommand::Tick,
        GameCommand::RotateCw,
        GameCommand::HardDrop,
    ];

    let mut left = started(987654);
    let mut right = started(987654);

    for command in script {
        left.apply(command);
        right.apply(command);
        assert_eq!(left.take_events(), right.take_events());
    }

    assert_eq!(left.snapshot(), right.snapshot());
}

#[test]
fn test_snapshot_mirrors_accessors() {
    let mut engine = started(2024);
    engine.move_left();
    engine.rotate_cw();
    engine.tick();
    engine.hold();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.state, engine.state());
    assert_eq!(snapshot.score, engine.score());
    assert_eq!(snapshot.lines_cleared, engine.lines_cleared());
    assert_eq!(snapshot.tetris_count, engine.tetris_count());
    assert_eq!(snapshot.current, engine.current_piece());
    assert_eq!(snapshot.ghost, engine.ghost_piece());
    assert_eq!(snapshot.held, engine.held_piece());
    assert_eq!(snapshot.can_hold, engine.can_hold());
    assert_eq!(snapshot.preview.as_slice(), engine.preview());
    assert_eq!(snapshot.pending_clear.as_slice(), engine.pending_clear());

    for (row, cells) in snapshot.board.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::new(row as i8, col as i8);
            assert_eq!(engine.board().cell(pos), Some(*cell));
        }
    }
}

#[test]
fn test_ghost_query_has_no_side_effects() {
    let mut engine = started(555);
    let before = engine.snapshot();

    let ghost = engine.ghost_piece().unwrap();
    assert!(ghost.origin.row >= before.current.unwrap().origin.row);
    assert_eq!(engine.snapshot(), before);
    assert!(engine.take_events().is_empty());
}

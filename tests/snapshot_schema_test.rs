//! Schema gate - the serialized snapshot/event shapes are a save format
//! consumed by external persistence collaborators; field names must not drift.

use blockfall::core::{GameEngine, GameEvent, GameSnapshot};
use blockfall::types::GameCommand;

#[test]
fn snapshot_serializes_with_stable_field_names() {
    let mut game = GameEngine::new(1);
    game.start();

    let json = serde_json::to_value(game.snapshot()).unwrap();
    for field in [
        "board",
        "current",
        "ghost",
        "held",
        "preview",
        "state",
        "score",
        "lines_cleared",
        "tetris_count",
        "can_hold",
        "pending_clear",
    ] {
        assert!(json.get(field).is_some(), "missing field: {}", field);
    }

    assert_eq!(json["state"], "Playing");
    assert_eq!(json["score"], 0);
    assert_eq!(json["held"], serde_json::Value::Null);
    assert_eq!(json["can_hold"], true);

    let board = json["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    for row in board {
        assert_eq!(row.as_array().unwrap().len(), 10);
    }

    // The freshly spawned piece sits at the spawn origin, unrotated
    assert_eq!(json["current"]["origin"]["row"], 0);
    assert_eq!(json["current"]["origin"]["col"], 3);
    assert_eq!(json["current"]["rotation"], 0);
    assert_eq!(json["preview"].as_array().unwrap().len(), 5);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut game = GameEngine::new(7);
    game.start();
    game.move_left();
    game.rotate_cw();
    game.hard_drop();

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn events_serialize_with_clear_counts() {
    let cleared = serde_json::to_value(GameEvent::LinesCleared { count: 4 }).unwrap();
    assert_eq!(cleared["LinesCleared"]["count"], 4);

    let over = serde_json::to_value(GameEvent::GameOver).unwrap();
    assert_eq!(over, serde_json::Value::String("GameOver".into()));
}

#[test]
fn commands_parse_from_their_wire_names() {
    let command: GameCommand = serde_json::from_str("\"HardDrop\"").unwrap();
    assert_eq!(command, GameCommand::HardDrop);

    let command: GameCommand = serde_json::from_str("\"Tick\"").unwrap();
    assert_eq!(command, GameCommand::Tick);

    assert!(serde_json::from_str::<GameCommand>("\"teleport\"").is_err());
}

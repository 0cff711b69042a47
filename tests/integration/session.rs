//! Host session tests: save files, scripts, and restarts

use whitehouse_engine::{Interpreter, InterpreterConfig};
use whitehouse_foundation::{LocationId, ObjectId};
use whitehouse_runtime::Session;
use whitehouse_runtime::serialize::{from_bytes, to_bytes};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("whitehouse_{name}_{}.msgpack", std::process::id()))
}

// =============================================================================
// Save and Restore
// =============================================================================

#[test]
fn save_and_restore_round_trip() {
    let path = temp_path("round_trip");
    let mut game = Session::new().unwrap();
    game.run_script("open mailbox\ntake leaflet\nnorth");
    game.save(&path).unwrap();
    let saved = game.state().clone();

    game.run_script("drop leaflet\nsouth\nsouth");
    assert_ne!(game.state(), &saved);

    game.restore(&path).unwrap();
    assert_eq!(game.state(), &saved);
    assert!(game.state().in_inventory(ObjectId::Leaflet));
    assert_eq!(game.state().current_location(), LocationId::NorthOfHouse);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn restored_game_keeps_playing() {
    let path = temp_path("keeps_playing");
    let mut game = Session::new().unwrap();
    game.submit("north");
    game.save(&path).unwrap();

    let mut other = Session::new().unwrap();
    other.restore(&path).unwrap();
    let response = other.submit("again");
    assert_eq!(response.lines[0], "Forest Path");
    assert_eq!(other.state().moves(), 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn garbage_file_is_rejected() {
    let path = temp_path("garbage");
    std::fs::write(&path, b"not a save file").unwrap();

    let mut game = Session::new().unwrap();
    game.submit("north");
    let before = game.state().clone();
    assert!(game.restore(&path).is_err());
    assert_eq!(game.state(), &before);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bytes_round_trip() {
    let mut game = Session::new().unwrap();
    game.run_script("open mailbox\ntake leaflet");
    let bytes = to_bytes(game.state()).unwrap();
    assert_eq!(&from_bytes(&bytes).unwrap(), game.state());
}

// =============================================================================
// Scripts and Restarts
// =============================================================================

#[test]
fn script_transcript_echoes_commands() {
    let mut game = Session::new().unwrap();
    let transcript = game.run_script("# a comment\nopen mailbox\n");
    assert_eq!(
        transcript,
        ["> open mailbox", "Opening the small mailbox reveals a leaflet.", ""]
    );
}

#[test]
fn restart_forgets_everything() {
    let mut game = Session::new().unwrap();
    game.run_script("open mailbox\ntake leaflet\nnorth");
    game.restart();
    assert_eq!(game.state().moves(), 0);
    assert!(game.state().inventory().is_empty());
    assert!(!game.state().is_open(ObjectId::Mailbox));
}

#[test]
fn session_uses_its_interpreter_config() {
    let interp = Interpreter::new()
        .unwrap()
        .with_config(InterpreterConfig::terse().with_max_score(10));
    let mut game = Session::with_interpreter(interp);
    let response = game.submit("north");
    assert!(response.body().is_empty());
    let response = game.submit("score");
    assert_eq!(
        response.body(),
        ["Your score is 0 (total of 10 points), in 2 moves."]
    );
}

//! Tests for verb handlers, driven through `Interpreter::submit`

use whitehouse_engine::{Interpreter, InterpreterConfig, Response};
use whitehouse_foundation::{LocationId, ObjectId};
use whitehouse_storage::GameState;

fn interpreter() -> Interpreter {
    Interpreter::new().unwrap()
}

/// Plays each input in turn and returns the final state and last response.
fn play(interp: &Interpreter, inputs: &[&str]) -> (GameState, Response) {
    let mut state = interp.new_session();
    let mut response = Response::default();
    for input in inputs {
        let (next, r) = interp.submit(&state, input);
        state = next;
        response = r;
    }
    (state, response)
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn walking_north_describes_the_new_location() {
    let (state, response) = play(&interpreter(), &["north"]);
    assert_eq!(state.current_location(), LocationId::NorthOfHouse);
    assert_eq!(response.lines[0], "North of House");
    assert_eq!(response.lines.last().map(String::as_str), Some(""));
}

#[test]
fn blocked_exit_has_its_own_refusal() {
    let (state, response) = play(&interpreter(), &["east"]);
    assert_eq!(state.current_location(), LocationId::WestOfHouse);
    assert_eq!(
        response.body(),
        ["The door is boarded and you can't remove the boards."]
    );
}

#[test]
fn missing_exit() {
    let (_, response) = play(&interpreter(), &["northeast"]);
    assert_eq!(response.body(), ["You can't go that way."]);
}

#[test]
fn go_without_direction_asks() {
    let (_, response) = play(&interpreter(), &["go"]);
    assert_eq!(response.body(), ["Where do you want to go?"]);
}

#[test]
fn closed_window_blocks_the_kitchen() {
    let interp = interpreter();
    let (state, response) = play(&interp, &["north", "east", "west"]);
    assert_eq!(state.current_location(), LocationId::BehindHouse);
    assert_eq!(response.body(), ["The kitchen window is closed."]);

    let (state, response) = interp.submit(&state, "open window");
    assert_eq!(
        response.body(),
        ["With great effort, you open the window far enough to allow entry."]
    );
    let (state, _) = interp.submit(&state, "enter");
    assert_eq!(state.current_location(), LocationId::Kitchen);
}

#[test]
fn hidden_trap_door_is_not_an_exit() {
    let interp = interpreter();
    let (state, _) = play(&interp, &["n", "e", "open window", "w", "w"]);
    assert_eq!(state.current_location(), LocationId::LivingRoom);
    let (state, response) = interp.submit(&state, "down");
    assert_eq!(response.body(), ["You can't go that way."]);
    assert_eq!(state.current_location(), LocationId::LivingRoom);
}

#[test]
fn terse_config_skips_descriptions() {
    let interp = interpreter().with_config(InterpreterConfig::terse());
    let (state, response) = play(&interp, &["north"]);
    assert_eq!(state.current_location(), LocationId::NorthOfHouse);
    assert!(response.body().is_empty());
}

// =============================================================================
// Looking
// =============================================================================

#[test]
fn look_at_start() {
    let (_, response) = play(&interpreter(), &["look"]);
    assert_eq!(
        response.body(),
        [
            "West of House",
            "You are standing in an open field west of a white house, with a boarded front door.",
            "There is a small mailbox here.",
        ]
    );
}

#[test]
fn look_shows_open_container_contents() {
    let (_, response) = play(&interpreter(), &["open mailbox", "look"]);
    assert!(response.has_line("The small mailbox contains:"));
    assert!(response.has_line("  A leaflet"));
}

#[test]
fn dropped_objects_use_the_generic_line() {
    let (_, response) = play(
        &interpreter(),
        &["open mailbox", "take leaflet", "drop leaflet", "look"],
    );
    assert!(response.has_line("There is a leaflet here."));
}

#[test]
fn examine_reports_open_state() {
    let (_, response) = play(&interpreter(), &["examine mailbox"]);
    assert_eq!(
        response.body(),
        [
            "It's a small mailbox with a little red flag.",
            "The small mailbox is closed.",
        ]
    );
}

#[test]
fn examine_invisible_object() {
    let (_, response) = play(&interpreter(), &["examine lamp"]);
    assert_eq!(response.body(), ["I don't see that here."]);
}

#[test]
fn verb_without_object_asks() {
    let (_, response) = play(&interpreter(), &["take"]);
    assert_eq!(response.body(), ["What do you want to take?"]);
}

#[test]
fn read_leaflet() {
    let (_, response) = play(&interpreter(), &["open mailbox", "read leaflet"]);
    assert!(response.lines[0].starts_with("\"WELCOME TO ZORK!"));
}

#[test]
fn read_something_without_text() {
    let (_, response) = play(&interpreter(), &["read mailbox"]);
    assert_eq!(response.body(), ["You can't read that."]);
}

// =============================================================================
// Inventory and Score
// =============================================================================

#[test]
fn empty_inventory() {
    let (_, response) = play(&interpreter(), &["inventory"]);
    assert_eq!(response.body(), ["You are empty-handed."]);
}

#[test]
fn inventory_lists_carried_objects() {
    let (_, response) = play(&interpreter(), &["open mailbox", "take leaflet", "i"]);
    assert_eq!(response.body(), ["You are carrying:", "  A leaflet"]);
}

#[test]
fn score_counts_the_current_move() {
    let (_, response) = play(&interpreter(), &["score"]);
    assert_eq!(
        response.body(),
        ["Your score is 0 (total of 350 points), in 1 move."]
    );
    let (_, response) = play(&interpreter(), &["wait", "score"]);
    assert_eq!(
        response.body(),
        ["Your score is 0 (total of 350 points), in 2 moves."]
    );
}

#[test]
fn treasure_raises_the_score() {
    let interp = interpreter();
    let (state, _) = play(&interp, &["n", "n", "up", "take egg"]);
    assert_eq!(state.current_location(), LocationId::UpATree);
    assert!(state.in_inventory(ObjectId::Egg));
    assert_eq!(state.score(), 5);
}

// =============================================================================
// Meta
// =============================================================================

#[test]
fn unknown_words() {
    let (_, response) = play(&interpreter(), &["dance"]);
    assert_eq!(response.body(), ["I don't understand that."]);
    let (_, response) = play(&interpreter(), &["xyzzy"]);
    assert_eq!(response.body(), ["A hollow voice says \"Fool.\""]);
}

#[test]
fn quit_only_requests() {
    let interp = interpreter();
    let (state, response) = play(&interp, &["quit"]);
    assert!(response.quit_requested);
    assert_eq!(state.moves(), 1);

    let (_, response) = interp.submit(&state, "look");
    assert!(!response.quit_requested);
}

#[test]
fn again_repeats_the_last_command() {
    let interp = interpreter();
    let (state, response) = play(&interp, &["north", "east", "again"]);
    assert_eq!(state.current_location(), LocationId::Clearing);
    assert_eq!(state.moves(), 3);
    assert_eq!(response.lines[0], "Clearing");
    assert_eq!(state.last_input(), Some("east"));
}

#[test]
fn again_with_nothing_to_repeat() {
    let (_, response) = play(&interpreter(), &["g"]);
    assert_eq!(
        response.body(),
        ["You can't do 'again' until you've done something."]
    );
}

#[test]
fn describe_costs_no_move() {
    let interp = interpreter();
    let state = interp.new_session();
    let response = interp.describe(&state);
    assert_eq!(response.lines[0], "West of House");
    assert_eq!(state.moves(), 0);
}

//! Play-through scenarios
//!
//! Each test drives a fresh session with the same text a player would type.

use whitehouse_foundation::{LocationId, ObjectId};
use whitehouse_runtime::Session;

fn session() -> Session {
    Session::new().unwrap()
}

// =============================================================================
// The Mailbox
// =============================================================================

#[test]
fn open_mailbox_and_read_leaflet() {
    let mut game = session();

    let response = game.submit("open mailbox");
    assert_eq!(
        response.lines,
        ["Opening the small mailbox reveals a leaflet.", ""]
    );

    let response = game.submit("read leaflet");
    assert!(response.lines[0].starts_with("\"WELCOME TO ZORK!"));
    assert_eq!(game.state().moves(), 2);
}

#[test]
fn pick_up_and_take_are_the_same() {
    let mut a = session();
    let mut b = session();
    a.run_script("open mailbox\npick up the leaflet");
    b.run_script("open mailbox\ntake leaflet");
    assert_eq!(a.state().inventory(), b.state().inventory());
    assert!(a.state().in_inventory(ObjectId::Leaflet));
}

#[test]
fn it_refers_to_the_last_object() {
    let mut game = session();
    game.submit("examine mailbox");
    let response = game.submit("open it");
    assert!(response.has_line("Opening the small mailbox reveals a leaflet."));

    let response = game.submit("take it");
    assert_eq!(response.body(), ["You can't take that."]);
}

// =============================================================================
// Into the House
// =============================================================================

#[test]
fn window_then_kitchen() {
    let mut game = session();
    let transcript = game.run_script("north\neast\nwest\nopen window\nwest");
    assert!(transcript.contains(&"The kitchen window is closed.".to_string()));
    assert_eq!(game.state().current_location(), LocationId::Kitchen);
    assert!(transcript.contains(
        &"On the table is an elongated brown sack, smelling of hot peppers.".to_string()
    ));
}

#[test]
fn rug_trap_door_and_cellar() {
    let mut game = session();
    game.run_script("n\ne\nopen window\nin\nw");
    assert_eq!(game.state().current_location(), LocationId::LivingRoom);

    let response = game.submit("move rug");
    assert!(response.lines[0].starts_with("With a great effort, the rug is moved"));

    let response = game.submit("down");
    assert_eq!(response.body(), ["The trap door is closed."]);

    let response = game.submit("open trap door");
    assert_eq!(
        response.body(),
        ["The door reluctantly opens to reveal a rickety staircase descending into darkness."]
    );

    let response = game.submit("down");
    assert_eq!(game.state().current_location(), LocationId::Cellar);
    assert_eq!(
        response.body(),
        ["It is pitch black. You are likely to be eaten by a grue."]
    );
}

#[test]
fn lantern_lights_the_cellar() {
    let mut game = session();
    game.run_script("n\ne\nopen window\nin\nw\ntake lamp\nmove rug\nopen trap door\nd");
    assert_eq!(game.state().current_location(), LocationId::Cellar);

    let response = game.submit("turn on lamp");
    assert_eq!(response.lines[0], "The brass lantern is now on.");
    assert!(response.has_line("Cellar"));

    let response = game.submit("i");
    assert_eq!(
        response.body(),
        ["You are carrying:", "  A brass lantern (providing light)"]
    );

    let response = game.submit("turn off lamp");
    assert_eq!(
        response.body(),
        ["The brass lantern is now off.", "It is now pitch black."]
    );
}

#[test]
fn egg_is_treasure() {
    let mut game = session();
    game.run_script("n\nn\nclimb tree\ntake egg");
    assert_eq!(game.state().current_location(), LocationId::UpATree);
    let response = game.submit("score");
    assert_eq!(
        response.body(),
        ["Your score is 5 (total of 350 points), in 5 moves."]
    );
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn again_after_a_move() {
    let mut game = session();
    game.submit("north");
    game.submit("g");
    assert_eq!(game.state().current_location(), LocationId::ForestPath);
    assert_eq!(game.state().moves(), 2);
}

#[test]
fn empty_input_is_free() {
    let mut game = session();
    let response = game.submit("   ");
    assert_eq!(response.lines, [""]);
    assert_eq!(game.state().moves(), 0);
}

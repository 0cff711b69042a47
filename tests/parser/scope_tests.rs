//! Tests for object visibility and light

use whitehouse_foundation::{LocationId, ObjectId};
use whitehouse_parser::ScopeEvaluator;
use whitehouse_storage::{GameState, Holder, World};

fn setup() -> (World, GameState) {
    let world = World::standard().unwrap();
    let state = GameState::new(&world);
    (world, state)
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn objects_here_are_visible() {
    let (_, state) = setup();
    assert!(ScopeEvaluator::is_visible(&state, ObjectId::Mailbox));
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::Lamp));
}

#[test]
fn closed_container_hides_contents() {
    let (_, mut state) = setup();
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::Leaflet));
    state.set_open(ObjectId::Mailbox, true);
    assert!(ScopeEvaluator::is_visible(&state, ObjectId::Leaflet));
}

#[test]
fn carried_objects_follow_the_player() {
    let (_, mut state) = setup();
    state.move_object(ObjectId::Lamp, Holder::Inventory);
    state.set_current_location(LocationId::Cellar);
    assert!(ScopeEvaluator::is_visible(&state, ObjectId::Lamp));
}

#[test]
fn nested_containers_need_every_level_open() {
    let (_, mut state) = setup();
    state.set_current_location(LocationId::Kitchen);
    state.move_object(ObjectId::Garlic, Holder::Container(ObjectId::Nest));
    state.move_object(ObjectId::Nest, Holder::Container(ObjectId::Sack));
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::Garlic));

    state.set_open(ObjectId::Sack, true);
    assert!(ScopeEvaluator::is_visible(&state, ObjectId::Garlic));

    state.set_open(ObjectId::Nest, false);
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::Garlic));
}

#[test]
fn visible_objects_in_declaration_order() {
    let (world, mut state) = setup();
    state.set_open(ObjectId::Mailbox, true);
    assert_eq!(
        ScopeEvaluator::visible_objects(&world, &state),
        vec![ObjectId::Mailbox, ObjectId::Leaflet, ObjectId::FrontDoor]
    );
}

#[test]
fn hidden_under_unmoved_rug() {
    let (_, mut state) = setup();
    state.set_current_location(LocationId::LivingRoom);
    assert!(ScopeEvaluator::is_visible(&state, ObjectId::Rug));
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::TrapDoor));
}

#[test]
fn cycle_is_not_visible() {
    let (_, mut state) = setup();
    state.set_open(ObjectId::Sack, true);
    state.set_open(ObjectId::Nest, true);
    state.move_object(ObjectId::Sack, Holder::Container(ObjectId::Nest));
    state.move_object(ObjectId::Nest, Holder::Container(ObjectId::Sack));
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::Sack));
    assert!(!ScopeEvaluator::is_visible(&state, ObjectId::Lunch));
}

// =============================================================================
// Light
// =============================================================================

#[test]
fn lit_locations_need_no_lamp() {
    let (world, state) = setup();
    assert!(ScopeEvaluator::has_light(&world, &state));
}

#[test]
fn dark_location_without_lamp() {
    let (world, mut state) = setup();
    state.set_current_location(LocationId::Cellar);
    assert!(!ScopeEvaluator::has_light(&world, &state));
}

#[test]
fn carried_lit_lamp_lights_the_cellar() {
    let (world, mut state) = setup();
    state.set_current_location(LocationId::Cellar);
    state.move_object(ObjectId::Lamp, Holder::Inventory);
    assert!(!ScopeEvaluator::has_light(&world, &state));
    state.set_lit(ObjectId::Lamp, true);
    assert!(ScopeEvaluator::has_light(&world, &state));
}

#[test]
fn lamp_in_closed_sack_gives_no_light() {
    let (world, mut state) = setup();
    state.set_current_location(LocationId::Attic);
    state.set_lit(ObjectId::Lamp, true);
    state.move_object(ObjectId::Sack, Holder::Inventory);
    state.move_object(ObjectId::Lamp, Holder::Container(ObjectId::Sack));
    assert!(!ScopeEvaluator::has_light(&world, &state));
    state.set_open(ObjectId::Sack, true);
    assert!(ScopeEvaluator::has_light(&world, &state));
}

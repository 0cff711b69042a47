//! Tests for custom action registries

use whitehouse_engine::{ActionContext, ActionRegistry, Interpreter};
use whitehouse_parser::Verb;

fn snore(ctx: &mut ActionContext<'_>) {
    ctx.say("Zzzz.");
}

#[test]
fn standard_registry_handles_every_verb() {
    let registry = ActionRegistry::standard();
    for verb in [
        Verb::Go,
        Verb::Look,
        Verb::Examine,
        Verb::Take,
        Verb::Drop,
        Verb::Open,
        Verb::Close,
        Verb::Light,
        Verb::Extinguish,
        Verb::Move,
        Verb::Push,
        Verb::Pull,
        Verb::Read,
        Verb::Inventory,
        Verb::Score,
        Verb::Help,
        Verb::Quit,
        Verb::Wait,
        Verb::Again,
        Verb::Unknown,
    ] {
        assert!(registry.handles(verb), "{verb:?}");
    }
}

#[test]
fn handlers_can_be_replaced() {
    let mut registry = ActionRegistry::standard();
    registry.register(Verb::Wait, snore);
    let interp = Interpreter::new().unwrap().with_registry(registry);

    let state = interp.new_session();
    let (state, response) = interp.submit(&state, "wait");
    assert_eq!(response.body(), ["Zzzz."]);
    assert_eq!(state.moves(), 1);
}

#[test]
fn unregistered_verb_falls_back() {
    let interp = Interpreter::new()
        .unwrap()
        .with_registry(ActionRegistry::new());
    let state = interp.new_session();
    let (state, response) = interp.submit(&state, "look");
    assert_eq!(response.body(), ["I don't understand that."]);
    assert_eq!(state.moves(), 1);
}

//! Taking, dropping, and moving objects.

use whitehouse_foundation::Capability;
use whitehouse_parser::Verb;
use whitehouse_storage::Holder;

use super::ActionContext;

/// Picks an object up.
pub fn take(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    let template = ctx.template(id);

    if ctx.state.in_inventory(id) {
        ctx.say("You already have that.");
        return;
    }
    if !template.has(Capability::Takeable) {
        ctx.say("You can't take that.");
        return;
    }

    ctx.state.move_object(id, Holder::Inventory);
    ctx.say("Taken.");
    if ctx.state.award(id, template.value) {
        log::debug!("awarded {} points for {id}", template.value);
    }
}

/// Puts a carried object down in the current location.
pub fn drop(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    if !ctx.state.in_inventory(id) {
        ctx.say("You don't have that.");
        return;
    }
    let here = ctx.state.current_location();
    ctx.state.move_object(id, Holder::Location(here));
    ctx.say("Dropped.");
}

/// Moves, pushes, or pulls an object.
///
/// The first time a moveable object is shifted, anything hidden under it
/// is left in the current location.
pub fn shift(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    let template = ctx.template(id);

    if !template.has(Capability::Moveable) {
        let gerund = match ctx.command.verb {
            Verb::Push => "Pushing",
            Verb::Pull => "Pulling",
            _ => "Moving",
        };
        ctx.say(format!(
            "{gerund} the {} doesn't seem to accomplish anything.",
            template.name
        ));
        return;
    }
    if ctx.state.has_been_moved(id) {
        ctx.say(format!(
            "Having moved the {} previously, you find it impossible to move it again.",
            template.name
        ));
        return;
    }

    ctx.state.mark_moved(id);
    let here = ctx.state.current_location();
    for hidden in ctx.state.contents(id) {
        log::debug!("moving {id} revealed {hidden}");
        ctx.state.move_object(hidden, Holder::Location(here));
    }
    match template.move_text {
        Some(text) => ctx.say(text),
        None => ctx.say(format!(
            "Moving the {} reveals nothing of interest.",
            template.name
        )),
    }
}

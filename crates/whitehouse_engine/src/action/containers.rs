//! Opening and closing.

use whitehouse_foundation::Capability;

use super::ActionContext;
use crate::text::{join_list, with_article};

/// Opens an openable object, revealing its contents.
pub fn open(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    let template = ctx.template(id);

    if !template.has(Capability::Openable) {
        ctx.say("You can't open that.");
        return;
    }
    if ctx.state.is_open(id) {
        ctx.say("It's already open.");
        return;
    }

    ctx.state.set_open(id, true);
    if let Some(text) = template.open_text {
        ctx.say(text);
        return;
    }

    let revealed: Vec<String> = ctx
        .state
        .contents(id)
        .into_iter()
        .map(|item| with_article(ctx.template(item).name))
        .collect();
    if revealed.is_empty() {
        ctx.say("Opened.");
    } else {
        ctx.say(format!(
            "Opening the {} reveals {}.",
            template.name,
            join_list(&revealed)
        ));
    }
}

/// Closes an openable object.
pub fn close(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };

    if !ctx.template(id).has(Capability::Openable) {
        ctx.say("You can't close that.");
        return;
    }
    if !ctx.state.is_open(id) {
        ctx.say("It's already closed.");
        return;
    }

    ctx.state.set_open(id, false);
    ctx.say("Closed.");
}

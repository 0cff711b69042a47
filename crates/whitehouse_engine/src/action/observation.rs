//! Looking, examining, reading, and taking stock.

use whitehouse_foundation::{Capability, ObjectId};
use whitehouse_parser::ScopeEvaluator;
use whitehouse_storage::Holder;

use super::{ActionContext, Target};
use crate::text::{capitalize, with_article};

const PITCH_BLACK: &str = "It is pitch black. You are likely to be eaten by a grue.";

/// Describes the current location. An object phrase turns this into
/// [`examine`].
pub fn look(ctx: &mut ActionContext<'_>) {
    if ctx.target == Target::Absent {
        describe_location(ctx);
    } else {
        examine(ctx);
    }
}

/// Describes an object, or the location when no object is named.
pub fn examine(ctx: &mut ActionContext<'_>) {
    if ctx.target == Target::Absent {
        describe_location(ctx);
        return;
    }
    let Some(id) = ctx.require_object() else {
        return;
    };

    let template = ctx.template(id);
    ctx.say(template.description);
    if template.has(Capability::Openable) {
        let status = if ctx.state.is_open(id) { "open" } else { "closed" };
        ctx.say(format!("The {} is {status}.", template.name));
    }
    if template.has(Capability::Lightable) {
        let status = if ctx.state.is_lit(id) { "on" } else { "off" };
        ctx.say(format!("The {} is {status}.", template.name));
    }
    if ctx.state.is_open(id) {
        describe_contents(ctx, id, 0);
    }
}

/// Prints an object's readable text.
pub fn read(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    match ctx.template(id).text {
        Some(text) => {
            for line in text.lines() {
                ctx.say(line);
            }
        }
        None => ctx.say("You can't read that."),
    }
}

/// Lists what the player carries.
pub fn inventory(ctx: &mut ActionContext<'_>) {
    let carried = ctx.state.inventory();
    if carried.is_empty() {
        ctx.say("You are empty-handed.");
        return;
    }
    ctx.say("You are carrying:");
    for id in carried {
        list_item(ctx, id, 1);
    }
}

/// Writes the location heading, prose, object summaries, and the contents
/// of open containers. A dark location without light shows nothing else.
pub fn describe_location(ctx: &mut ActionContext<'_>) {
    if ctx.config.darkness && !ScopeEvaluator::has_light(ctx.world, &ctx.state) {
        ctx.say(PITCH_BLACK);
        return;
    }

    let world = ctx.world;
    let here = ctx.state.current_location();
    let location = world.location(here);
    ctx.say(location.name);
    ctx.say(location.description);

    let present = ctx.state.held_by(Holder::Location(here));
    for &id in &present {
        let template = ctx.template(id);
        if template.scenery {
            continue;
        }
        let untouched = ctx.state.holder_of(id) == Some(template.initial);
        match template.presence {
            Some(presence) if untouched => ctx.say(presence),
            _ => ctx.say(format!("There is {} here.", with_article(template.name))),
        }
    }
    for id in present {
        if ctx.state.is_open(id) {
            describe_contents(ctx, id, 0);
        }
    }
}

/// Writes "The X contains:" and an indented line per item, recursing into
/// open containers. Writes nothing for an empty container.
fn describe_contents(ctx: &mut ActionContext<'_>, container: ObjectId, depth: usize) {
    let contents = ctx.state.contents(container);
    if contents.is_empty() {
        return;
    }
    let indent = "  ".repeat(depth);
    ctx.say(format!("{indent}The {} contains:", ctx.template(container).name));
    for id in contents {
        list_item(ctx, id, depth + 1);
    }
}

fn list_item(ctx: &mut ActionContext<'_>, id: ObjectId, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = capitalize(&with_article(ctx.template(id).name));
    let suffix = if ctx.state.is_lit(id) { " (providing light)" } else { "" };
    ctx.say(format!("{indent}{name}{suffix}"));
    if ctx.state.is_open(id) {
        describe_contents(ctx, id, depth);
    }
}

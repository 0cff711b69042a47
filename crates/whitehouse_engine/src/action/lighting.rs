//! Light sources.

use whitehouse_foundation::Capability;
use whitehouse_parser::ScopeEvaluator;

use super::ActionContext;
use super::observation::describe_location;

/// Turns a light source on. Lighting up a dark location describes it.
pub fn light(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    let template = ctx.template(id);

    if !template.has(Capability::Lightable) {
        ctx.say("You can't light that.");
        return;
    }
    if ctx.state.is_lit(id) {
        ctx.say("It is already on.");
        return;
    }

    let was_dark = !ScopeEvaluator::has_light(ctx.world, &ctx.state);
    ctx.state.set_lit(id, true);
    ctx.say(format!("The {} is now on.", template.name));
    if ctx.config.darkness && was_dark {
        describe_location(ctx);
    }
}

/// Turns a light source off.
pub fn extinguish(ctx: &mut ActionContext<'_>) {
    let Some(id) = ctx.require_object() else {
        return;
    };
    let template = ctx.template(id);

    if !template.has(Capability::Lightable) {
        ctx.say("You can't extinguish that.");
        return;
    }
    if !ctx.state.is_lit(id) {
        ctx.say("It is already off.");
        return;
    }

    ctx.state.set_lit(id, false);
    ctx.say(format!("The {} is now off.", template.name));
    if ctx.config.darkness && !ScopeEvaluator::has_light(ctx.world, &ctx.state) {
        ctx.say("It is now pitch black.");
    }
}

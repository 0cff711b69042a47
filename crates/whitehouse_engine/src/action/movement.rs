//! Movement between locations.

use whitehouse_parser::ScopeEvaluator;

use super::ActionContext;
use super::observation::describe_location;

const NO_EXIT: &str = "You can't go that way.";

/// Moves the player along an exit.
///
/// A guarded exit whose guarding object is out of sight behaves as if it
/// were absent; a visible but closed guard shows its refusal.
pub fn go(ctx: &mut ActionContext<'_>) {
    let Some(direction) = ctx.command.direction else {
        ctx.say("Where do you want to go?");
        return;
    };

    let here = ctx.state.current_location();
    let location = ctx.world.location(here);

    let Some(&to) = location.exits.get(&direction) else {
        let refusal = location.blocked.get(&direction).copied().unwrap_or(NO_EXIT);
        ctx.say(refusal);
        return;
    };

    if let Some(guard) = ctx.world.guard(here, direction) {
        if !ScopeEvaluator::is_visible(&ctx.state, guard.object) {
            ctx.say(NO_EXIT);
            return;
        }
        if !ctx.state.is_open(guard.object) {
            ctx.say(guard.refusal);
            return;
        }
    }

    log::debug!("moving {direction} from {here} to {to}");
    ctx.state.set_current_location(to);
    if ctx.config.auto_look {
        describe_location(ctx);
    }
}

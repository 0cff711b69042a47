//! Commands about the game rather than the world.

use super::ActionContext;

/// Lines printed by `help`.
pub const HELP: &[&str] = &[
    "Move with compass directions (north, ne, up, in...) or \"go <direction>\".",
    "Useful verbs: look, examine, take, drop, open, close, read, move, push,",
    "pull, light, extinguish.",
    "Other commands: inventory (i), score, wait (z), again (g), quit (q).",
    "Refer to the last object you handled as \"it\".",
];

/// Reports the score.
pub fn score(ctx: &mut ActionContext<'_>) {
    let moves = ctx.state.moves();
    let noun = if moves == 1 { "move" } else { "moves" };
    ctx.say(format!(
        "Your score is {} (total of {} points), in {moves} {noun}.",
        ctx.state.score(),
        ctx.config.max_score
    ));
}

/// Prints the help text.
pub fn help(ctx: &mut ActionContext<'_>) {
    for line in HELP {
        ctx.say(*line);
    }
}

/// Asks for confirmation. Leaving is the host's decision.
pub fn quit(ctx: &mut ActionContext<'_>) {
    ctx.say("Do you wish to leave the game? (Y is affirmative):");
    ctx.request_quit();
}

/// Lets a turn pass.
pub fn wait(ctx: &mut ActionContext<'_>) {
    ctx.say("Time passes...");
}

/// Reached only when there is nothing to repeat.
pub fn again(ctx: &mut ActionContext<'_>) {
    ctx.say("You can't do 'again' until you've done something.");
}

/// Replies to words the vocabulary does not know.
pub fn unknown(ctx: &mut ActionContext<'_>) {
    let reply = match ctx.command.word.as_str() {
        "hello" | "hi" | "hey" => "Nice weather we've been having lately.",
        "xyzzy" | "plugh" => "A hollow voice says \"Fool.\"",
        "zork" => "At your service!",
        _ => "I don't understand that.",
    };
    ctx.say(reply);
}

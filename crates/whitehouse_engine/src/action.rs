//! Action dispatch for Whitehouse.
//!
//! Each canonical verb maps to a handler. A handler checks its
//! preconditions against the world and the working copy of the game state,
//! applies its effects, and writes player-facing lines. Failures are never
//! errors: they are lines like "You can't take that."

pub mod containers;
pub mod lighting;
pub mod manipulation;
pub mod meta;
pub mod movement;
pub mod observation;

use std::collections::HashMap;

use whitehouse_foundation::ObjectId;
use whitehouse_parser::{Command, Verb};
use whitehouse_storage::{GameState, ObjectTemplate, World};

use crate::config::InterpreterConfig;

/// What an object phrase resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The command had no object phrase.
    Absent,
    /// The phrase matched nothing visible.
    NotFound,
    /// The phrase matched a visible object.
    Found(ObjectId),
}

/// Everything a handler sees while processing one command.
pub struct ActionContext<'a> {
    /// The world tables.
    pub world: &'a World,
    /// Working copy of the game state.
    pub state: GameState,
    /// The parsed command.
    pub command: &'a Command,
    /// The resolved object phrase.
    pub target: Target,
    /// Interpreter configuration.
    pub config: &'a InterpreterConfig,
    output: Vec<String>,
    quit_requested: bool,
}

impl<'a> ActionContext<'a> {
    /// Creates a context over a working copy of the state.
    #[must_use]
    pub fn new(
        world: &'a World,
        state: GameState,
        command: &'a Command,
        target: Target,
        config: &'a InterpreterConfig,
    ) -> Self {
        Self {
            world,
            state,
            command,
            target,
            config,
            output: Vec::new(),
            quit_requested: false,
        }
    }

    /// Writes a line of output.
    pub fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Lines written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Asks the host to confirm leaving the game.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// The template of an object.
    #[must_use]
    pub fn template(&self, id: ObjectId) -> &'a ObjectTemplate {
        self.world.object(id)
    }

    /// The object the command acts on.
    ///
    /// Writes the failure line and returns `None` when there is no object
    /// phrase or it matched nothing visible.
    pub fn require_object(&mut self) -> Option<ObjectId> {
        match self.target {
            Target::Found(id) => Some(id),
            Target::NotFound => {
                self.say("I don't see that here.");
                None
            }
            Target::Absent => {
                let verb = self.command.verb;
                self.say(format!("What do you want to {verb}?"));
                None
            }
        }
    }

    /// Consumes the context, returning the new state, the output lines, and
    /// whether the host should confirm quitting.
    #[must_use]
    pub fn finish(self) -> (GameState, Vec<String>, bool) {
        (self.state, self.output, self.quit_requested)
    }
}

/// A verb handler.
pub type Handler = fn(&mut ActionContext<'_>);

/// Maps canonical verbs to their handlers.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    handlers: HashMap<Verb, Handler>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every standard handler.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Verb::Go, movement::go);
        registry.register(Verb::Look, observation::look);
        registry.register(Verb::Examine, observation::examine);
        registry.register(Verb::Read, observation::read);
        registry.register(Verb::Inventory, observation::inventory);
        registry.register(Verb::Take, manipulation::take);
        registry.register(Verb::Drop, manipulation::drop);
        registry.register(Verb::Move, manipulation::shift);
        registry.register(Verb::Push, manipulation::shift);
        registry.register(Verb::Pull, manipulation::shift);
        registry.register(Verb::Open, containers::open);
        registry.register(Verb::Close, containers::close);
        registry.register(Verb::Light, lighting::light);
        registry.register(Verb::Extinguish, lighting::extinguish);
        registry.register(Verb::Score, meta::score);
        registry.register(Verb::Help, meta::help);
        registry.register(Verb::Quit, meta::quit);
        registry.register(Verb::Wait, meta::wait);
        registry.register(Verb::Again, meta::again);
        registry.register(Verb::Unknown, meta::unknown);
        registry
    }

    /// Registers (or replaces) the handler for a verb.
    pub fn register(&mut self, verb: Verb, handler: Handler) {
        self.handlers.insert(verb, handler);
    }

    /// Returns true if a verb has a handler.
    #[must_use]
    pub fn handles(&self, verb: Verb) -> bool {
        self.handlers.contains_key(&verb)
    }

    /// Runs the handler for the context's verb.
    pub fn dispatch(&self, ctx: &mut ActionContext<'_>) {
        let verb = ctx.command.verb;
        log::debug!("dispatching {verb:?} with target {:?}", ctx.target);
        match self.handlers.get(&verb) {
            Some(handler) => handler(ctx),
            None => {
                log::warn!("no handler registered for {verb:?}");
                ctx.say("I don't understand that.");
            }
        }
    }
}

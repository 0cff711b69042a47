//! The interpreter session facade.
//!
//! The host's whole contract is [`Interpreter::new_session`] and
//! [`Interpreter::submit`]: raw text in, a new state and output lines out.
//! The caller's state is never mutated.

use whitehouse_foundation::Result;
use whitehouse_parser::{Command, InputTokenizer, ObjectResolver, Parser, Verb};
use whitehouse_storage::{GameState, World};

use crate::action::{ActionContext, ActionRegistry, Target};
use crate::config::InterpreterConfig;

/// The output of one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Output lines, always ending with an empty separator line.
    pub lines: Vec<String>,
    /// The player asked to quit; the host decides whether to leave.
    pub quit_requested: bool,
}

impl Response {
    /// Creates a response, appending the separator line.
    #[must_use]
    pub fn new(mut lines: Vec<String>, quit_requested: bool) -> Self {
        lines.push(String::new());
        Self {
            lines,
            quit_requested,
        }
    }

    /// The lines without the trailing separator.
    #[must_use]
    pub fn body(&self) -> &[String] {
        match self.lines.split_last() {
            Some((last, body)) if last.is_empty() => body,
            _ => &self.lines,
        }
    }

    /// Returns true if any line equals `line`.
    #[must_use]
    pub fn has_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

/// A text-adventure interpreter over one world.
#[derive(Clone, Debug)]
pub struct Interpreter {
    world: World,
    parser: Parser,
    registry: ActionRegistry,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Creates an interpreter over the standard world.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard world fails validation.
    pub fn new() -> Result<Self> {
        Ok(Self::with_world(World::standard()?))
    }

    /// Creates an interpreter over a validated world.
    #[must_use]
    pub fn with_world(world: World) -> Self {
        Self {
            world,
            parser: Parser::new(),
            registry: ActionRegistry::standard(),
            config: InterpreterConfig::default(),
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to replace the action registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The parser.
    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Creates the initial state for a new session.
    #[must_use]
    pub fn new_session(&self) -> GameState {
        GameState::new(&self.world)
    }

    /// Describes the current location without consuming a move.
    #[must_use]
    pub fn describe(&self, state: &GameState) -> Response {
        let command = Command {
            verb: Verb::Look,
            direction: None,
            word: Verb::Look.word().to_string(),
            object_phrase: Vec::new(),
        };
        let mut ctx = ActionContext::new(
            &self.world,
            state.clone(),
            &command,
            Target::Absent,
            &self.config,
        );
        self.registry.dispatch(&mut ctx);
        let (_, lines, _) = ctx.finish();
        Response::new(lines, false)
    }

    /// Processes one line of input.
    ///
    /// Every parsed command consumes exactly one move, whether it succeeds
    /// or not. Empty input consumes nothing and produces only the separator.
    #[must_use]
    pub fn submit(&self, state: &GameState, raw: &str) -> (GameState, Response) {
        let mut next = state.clone();
        let Some(mut command) = self.parser.parse(raw) else {
            return (next, Response::new(Vec::new(), false));
        };

        next.tick();
        if command.verb == Verb::Again {
            if let Some(previous) = next.last_input().and_then(|input| self.parser.parse(input)) {
                log::debug!("repeating {previous:?}");
                command = previous;
            }
        } else {
            next.set_last_input(InputTokenizer::normalize(raw));
        }

        let target = self.resolve(&command, &next);
        if let Target::Found(id) = target {
            if command.verb != Verb::Unknown {
                next.set_last_referent(id);
            }
        }

        let mut ctx = ActionContext::new(&self.world, next, &command, target, &self.config);
        self.registry.dispatch(&mut ctx);
        let (next, lines, quit_requested) = ctx.finish();
        (next, Response::new(lines, quit_requested))
    }

    fn resolve(&self, command: &Command, state: &GameState) -> Target {
        if !command.has_object() {
            return Target::Absent;
        }
        match ObjectResolver::resolve(&command.object_phrase, &self.world, state) {
            Some(id) => Target::Found(id),
            None => Target::NotFound,
        }
    }
}

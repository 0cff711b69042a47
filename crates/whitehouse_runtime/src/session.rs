//! Session management for the host.
//!
//! A session owns one interpreter and the current game state, and is the
//! only place where saving and restoring happen.

use std::path::Path;

use whitehouse_engine::{Interpreter, Response};
use whitehouse_foundation::Result;
use whitehouse_storage::GameState;

use crate::serialize;

/// One player's game.
#[derive(Clone, Debug)]
pub struct Session {
    interpreter: Interpreter,
    state: GameState,
}

impl Session {
    /// Creates a session over the standard world.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard world fails validation.
    pub fn new() -> Result<Self> {
        Ok(Self::with_interpreter(Interpreter::new()?))
    }

    /// Creates a session that starts a new game with the given interpreter.
    #[must_use]
    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        let state = interpreter.new_session();
        Self { interpreter, state }
    }

    /// The interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Submits one line of player input.
    pub fn submit(&mut self, raw: &str) -> Response {
        let (state, response) = self.interpreter.submit(&self.state, raw);
        self.state = state;
        response
    }

    /// Describes the current location without consuming a move.
    #[must_use]
    pub fn describe(&self) -> Response {
        self.interpreter.describe(&self.state)
    }

    /// Starts over from the initial state.
    pub fn restart(&mut self) {
        self.state = self.interpreter.new_session();
    }

    /// Saves the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        serialize::save_to_file(&self.state, path)
    }

    /// Replaces the current state with a saved one.
    ///
    /// The current state is kept if the file cannot be read or does not fit
    /// this session's world.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or belongs to
    /// a different world.
    pub fn restore<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let state = serialize::load_from_file(path)?;
        serialize::check_compatible(&state, self.interpreter.world())?;
        self.state = state;
        Ok(())
    }

    /// Runs a script, one command per line, and returns the transcript.
    ///
    /// Blank lines and lines starting with `#` are skipped. Each command is
    /// echoed after a `> ` prompt. A quit request ends the script.
    pub fn run_script(&mut self, script: &str) -> Vec<String> {
        let mut transcript = Vec::new();
        for line in script.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            transcript.push(format!("> {line}"));
            let response = self.submit(line);
            transcript.extend(response.lines);
            if response.quit_requested {
                log::debug!("script ended by quit request");
                break;
            }
        }
        transcript
    }

    /// A short summary of the state, for `--dump-state`.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let world = self.interpreter.world();
        let location = world.location(self.state.current_location());
        let carried: Vec<&str> = self
            .state
            .inventory()
            .into_iter()
            .map(|id| world.object(id).name)
            .collect();

        vec![
            format!("Location: {} ({})", location.name, location.id),
            format!(
                "Score: {} of {}",
                self.state.score(),
                self.interpreter.config().max_score
            ),
            format!("Moves: {}", self.state.moves()),
            if carried.is_empty() {
                "Inventory: (empty)".to_string()
            } else {
                format!("Inventory: {}", carried.join(", "))
            },
        ]
    }
}

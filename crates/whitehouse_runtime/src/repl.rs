//! The main REPL implementation.

use std::io::{self, Write};

use whitehouse_foundation::{Error, Result};
use whitehouse_engine::Response;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Whether to describe the location before the first prompt.
    opening_look: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the standard world fails to
    /// initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, Session::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_words(completion_words(&session));
        Self {
            editor,
            session,
            show_banner: true,
            opening_look: true,
            prompt: "> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.editor.set_words(completion_words(&session));
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Skips the opening description.
    #[must_use]
    pub const fn without_opening_look(mut self) -> Self {
        self.opening_look = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until the player leaves or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        if self.opening_look {
            print_response(&self.session.describe());
        }

        while self.read_eval_print()? {}

        println!("Goodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        if let Some(host_command) = trimmed.strip_prefix(':') {
            return match self.host_command(host_command) {
                Ok(keep_going) => Ok(keep_going),
                Err(e) => {
                    print_error(&e);
                    Ok(true)
                }
            };
        }

        let response = self.session.submit(trimmed);
        print_response(&response);
        if response.quit_requested {
            return self.confirm_quit();
        }
        Ok(true)
    }

    /// Handles `:save`, `:restore`, and `:quit`.
    fn host_command(&mut self, input: &str) -> Result<bool> {
        let mut parts = input.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match (name, argument) {
            ("save", Some(path)) => {
                self.session.save(path)?;
                println!("Saved to {path}.\n");
                Ok(true)
            }
            ("restore", Some(path)) => {
                self.session.restore(path)?;
                println!("Restored from {path}.\n");
                print_response(&self.session.describe());
                Ok(true)
            }
            ("save" | "restore", None) => {
                println!("Usage: :{name} <path>\n");
                Ok(true)
            }
            ("quit" | "q", _) => Ok(false),
            _ => {
                println!("Unknown host command :{name}. Try :save, :restore, or :quit.\n");
                Ok(true)
            }
        }
    }

    /// Reads the answer to the quit prompt. Only "y" or "yes" leaves.
    fn confirm_quit(&mut self) -> Result<bool> {
        match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(answer) if is_affirmative(&answer) => Ok(false),
            ReadResult::Eof => Ok(false),
            ReadResult::Line(_) | ReadResult::Interrupted => {
                println!("Ok.\n");
                Ok(true)
            }
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mWHITEHOUSE\x1b[0m");
        println!("An interactive fiction, version {}", env!("CARGO_PKG_VERSION"));
        println!("Type \"help\" for instructions. Host commands: :save, :restore, :quit.\n");

        let _ = io::stdout().flush();
    }
}

/// Returns true for "y" and "yes", ignoring case and surrounding space.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Words offered for completion: the vocabulary plus every word of every
/// object name and alias.
fn completion_words(session: &Session) -> Vec<String> {
    let interpreter = session.interpreter();
    let mut words = interpreter.parser().vocabulary().known_words();
    for template in interpreter.world().objects() {
        for name in template.names() {
            words.extend(name.split_whitespace().map(str::to_lowercase));
        }
    }
    words.sort();
    words.dedup();
    words
}

fn print_response(response: &Response) {
    for line in &response.lines {
        println!("{line}");
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

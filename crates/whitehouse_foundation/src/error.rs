//! Error types for the Whitehouse system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Player mistakes are never errors: they become canned output lines. The
//! errors here cover world-table integrity (caught when a world is loaded)
//! and host-side failures such as saving or restoring a game.

use std::fmt;

use thiserror::Error;

use crate::ids::{Direction, LocationId, ObjectId};

/// The main error type for Whitehouse operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing exit target error.
    #[must_use]
    pub fn missing_exit_target(from: LocationId, direction: Direction, to: LocationId) -> Self {
        Self::new(ErrorKind::MissingExitTarget {
            from,
            direction,
            to,
        })
    }

    /// Creates a containment cycle error.
    #[must_use]
    pub fn containment_cycle(object: ObjectId) -> Self {
        Self::new(ErrorKind::ContainmentCycle(object))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An exit points at a location that is not in the location table.
    #[error("exit {direction} from {from} leads to missing location {to}")]
    MissingExitTarget {
        /// The location the exit leaves from.
        from: LocationId,
        /// The direction of the exit.
        direction: Direction,
        /// The target that does not exist.
        to: LocationId,
    },

    /// The same location was declared twice.
    #[error("duplicate location: {0}")]
    DuplicateLocation(LocationId),

    /// The same object was declared twice.
    #[error("duplicate object: {0}")]
    DuplicateObject(ObjectId),

    /// The start location is not in the location table.
    #[error("start location {0} is not defined")]
    MissingStart(LocationId),

    /// An object starts inside a location or container that does not exist.
    #[error("object {object} starts in undefined holder {holder}")]
    UnknownHolder {
        /// The misplaced object.
        object: ObjectId,
        /// Description of the missing holder.
        holder: String,
    },

    /// An exit guard refers to an undefined location, exit, or object.
    #[error("exit guard {direction} from {from} is invalid: {reason}")]
    UnknownGuard {
        /// The guarded location.
        from: LocationId,
        /// The guarded direction.
        direction: Direction,
        /// What is wrong with the guard.
        reason: String,
    },

    /// An object (transitively) contains itself.
    #[error("containment cycle through object {0}")]
    ContainmentCycle(ObjectId),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Encoding or decoding a saved game failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File or table the error came from.
    pub source: Option<String>,
    /// Free-form notes, outermost last.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        for note in &self.notes {
            writeln!(f)?;
            write!(f, "  {note}")?;
        }
        Ok(())
    }
}

/// Result type alias using the Whitehouse error.
pub type Result<T> = std::result::Result<T, Error>;

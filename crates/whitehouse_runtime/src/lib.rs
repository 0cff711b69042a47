//! REPL, CLI, and save/restore for Whitehouse.
//!
//! This crate provides:
//! - [`Session`] - One player's interpreter and current game state
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`serialize`] - Game state save files in `MessagePack`
//! - The `whitehouse` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;

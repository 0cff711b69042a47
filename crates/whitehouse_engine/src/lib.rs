//! Action dispatch and the interpreter for Whitehouse.
//!
//! This crate provides:
//! - [`ActionRegistry`] - Maps each canonical verb to its handler
//! - [`ActionContext`] - What a handler sees and mutates
//! - [`Interpreter`] - The "submit text, receive text" session facade
//! - [`InterpreterConfig`] - Behavior switches for the interpreter

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod config;
pub mod interpreter;
pub mod text;

pub use action::{ActionContext, ActionRegistry, Handler, Target};
pub use config::InterpreterConfig;
pub use interpreter::{Interpreter, Response};

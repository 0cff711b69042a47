//! World tables, load-time validation, and game state for Whitehouse.
//!
//! This crate provides:
//! - [`World`] - The immutable graph of locations and object templates
//! - [`GameState`] - The mutable session state, cheap to clone
//! - [`data`] - The standard world shipped with the interpreter

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod data;
pub mod state;
pub mod world;

pub use state::{GameState, Holder, ObjectState};
pub use world::{ExitGuard, Location, ObjectTemplate, World};

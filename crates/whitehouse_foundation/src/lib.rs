//! Core identifiers and error types for Whitehouse.
//!
//! This crate provides:
//! - [`LocationId`] and [`ObjectId`] - Closed identifiers for the world tables
//! - [`Direction`] - Exit directions, with their player-facing words
//! - [`Capability`] and [`Capabilities`] - Fixed traits that gate verbs
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ids::{Capabilities, Capability, Direction, LocationId, ObjectId};

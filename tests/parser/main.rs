//! Integration tests for the command parser
//!
//! Tests tokenization, verb phrases, scope, and object resolution
//! against the standard world.

mod command_tests;
mod scope_tests;

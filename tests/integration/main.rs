//! End-to-end tests for Whitehouse
//!
//! Tests complete play-throughs from raw input to output lines, and the
//! host session around them.

mod scenarios;
mod session;

//! Integration tests for Layer 1: Storage
//!
//! Tests for world loading, validation, and game state.

//! Command parser for text adventure input.
//!
//! This crate turns player input like "pick up the lamp" into a canonical
//! [`Command`], and finds the object a command refers to.
//!
//! # Architecture
//!
//! ```text
//! "Pick up the brass lamp!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["pick", "up", "the", "brass", "lamp"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → "pick up" wins over "pick" (longest prefix),
//! │ LOOKUP          │    then single-word synonyms
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command { verb: Take, object_phrase: ["brass", "lamp"] }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SCOPE +         │  → Lamp (first visible match in declaration order)
//! │ RESOLUTION      │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`vocabulary`] - Verbs, multi-word phrases, synonyms, and stopwords
//! - [`stdlib`] - The standard vocabulary tables
//! - [`parser`] - Main parser pipeline
//! - [`scope`] - Object visibility for resolution
//! - [`noun_phrase`] - Object phrase resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod noun_phrase;
pub mod parser;
pub mod scope;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use noun_phrase::ObjectResolver;
pub use parser::{Command, Parser};
pub use scope::ScopeEvaluator;
pub use tokenizer::InputTokenizer;
pub use vocabulary::{Meaning, Verb, Vocabulary};

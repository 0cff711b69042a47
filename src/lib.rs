//! Whitehouse - Text-adventure world model and command interpreter
//!
//! Re-exports every layer of the interpreter under one name.
//! Each layer depends only on the layers below it.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: whitehouse_runtime    - Session, save/restore, REPL, CLI
//! Layer 3: whitehouse_engine     - Action dispatch, handlers, interpreter
//! Layer 2: whitehouse_parser     - Tokenizer, vocabulary, scope, resolver
//! Layer 1: whitehouse_storage    - World tables, validation, game state
//! Layer 0: whitehouse_foundation - Identifiers, capabilities, Error
//! ```

pub use whitehouse_engine as engine;
pub use whitehouse_foundation as foundation;
pub use whitehouse_parser as parser;
pub use whitehouse_runtime as runtime;
pub use whitehouse_storage as storage;

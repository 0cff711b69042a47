//! Main parser pipeline.
//!
//! Orchestrates the flow from raw input to a canonical command.

use whitehouse_foundation::Direction;

use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Meaning, Verb, Vocabulary};

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// The canonical verb.
    pub verb: Verb,
    /// The direction, for movement.
    pub direction: Option<Direction>,
    /// The first word as typed. Kept so unknown verbs can be reported.
    pub word: String,
    /// The object phrase with stopwords removed.
    pub object_phrase: Vec<String>,
}

impl Command {
    /// Returns true if the command carries an object phrase.
    #[must_use]
    pub fn has_object(&self) -> bool {
        !self.object_phrase.is_empty()
    }

    /// The object phrase joined with single spaces.
    #[must_use]
    pub fn phrase(&self) -> String {
        self.object_phrase.join(" ")
    }
}

/// The command parser.
#[derive(Clone, Debug)]
pub struct Parser {
    vocabulary: Vocabulary,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser over the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    /// Creates a parser over a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parses raw input.
    ///
    /// Returns `None` when the input is empty after normalization.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<Command> {
        let tokens = InputTokenizer::tokenize(raw);
        let first = tokens.first()?.clone();

        let (meaning, consumed) = match self.vocabulary.match_phrase(&tokens) {
            Some(phrase) => (phrase.meaning, phrase.words.len()),
            None => (
                self.vocabulary
                    .lookup_word(&first)
                    .unwrap_or(Meaning::verb(Verb::Unknown)),
                1,
            ),
        };

        let mut rest = &tokens[consumed..];
        let mut direction = meaning.direction;

        // "go" followed by a direction the phrase table did not cover
        if meaning.verb == Verb::Go && direction.is_none() {
            let skipped = rest
                .iter()
                .take_while(|word| self.vocabulary.is_stopword(word))
                .count();
            if let Some(found) = rest.get(skipped).and_then(|w| Direction::from_word(w)) {
                direction = Some(found);
                rest = &rest[skipped + 1..];
            }
        }

        let object_phrase = rest
            .iter()
            .filter(|word| !self.vocabulary.is_stopword(word))
            .cloned()
            .collect();

        let command = Command {
            verb: meaning.verb,
            direction,
            word: first,
            object_phrase,
        };
        log::debug!("parsed {raw:?} as {command:?}");
        Some(command)
    }
}

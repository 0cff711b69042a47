//! Vocabulary registry for the parser.
//!
//! Stores canonical verbs, multi-word verb phrases, single-word synonyms,
//! and the stopwords filtered out of object phrases.

use std::collections::{HashMap, HashSet};
use std::fmt;

use whitehouse_foundation::Direction;

/// A canonical verb.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Movement; the direction travels alongside in the command.
    Go,
    /// Describe the current location.
    Look,
    /// Describe an object.
    Examine,
    /// Pick an object up.
    Take,
    /// Put a carried object down.
    Drop,
    /// Open an object.
    Open,
    /// Close an object.
    Close,
    /// Light a light source.
    Light,
    /// Put out a light source.
    Extinguish,
    /// Move an object aside.
    Move,
    /// Push an object.
    Push,
    /// Pull an object.
    Pull,
    /// Read an object's text.
    Read,
    /// List carried objects.
    Inventory,
    /// Report score and moves.
    Score,
    /// Print help.
    Help,
    /// Ask to leave the game.
    Quit,
    /// Let a turn pass.
    Wait,
    /// Repeat the previous command.
    Again,
    /// A first word the vocabulary does not know.
    Unknown,
}

impl Verb {
    /// The imperative word for this verb, used in prompts like
    /// "What do you want to take?".
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Look => "look",
            Self::Examine => "examine",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Open => "open",
            Self::Close => "close",
            Self::Light => "light",
            Self::Extinguish => "extinguish",
            Self::Move => "move",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Read => "read",
            Self::Inventory => "inventory",
            Self::Score => "score",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Wait => "wait",
            Self::Again => "again",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// What a word or phrase means: a verb, plus a direction for movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Meaning {
    /// The canonical verb.
    pub verb: Verb,
    /// The direction, for movement verbs.
    pub direction: Option<Direction>,
}

impl Meaning {
    /// A verb with no direction.
    #[must_use]
    pub const fn verb(verb: Verb) -> Self {
        Self {
            verb,
            direction: None,
        }
    }

    /// Movement in a direction.
    #[must_use]
    pub const fn go(direction: Direction) -> Self {
        Self {
            verb: Verb::Go,
            direction: Some(direction),
        }
    }
}

/// A registered multi-word verb phrase ("pick up", "go north").
#[derive(Clone, Debug)]
pub struct VerbPhrase {
    /// The words of the phrase, in order.
    pub words: Vec<String>,
    /// What the phrase means.
    pub meaning: Meaning,
}

/// Runtime storage for all vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Multi-word phrases, longest first.
    phrases: Vec<VerbPhrase>,
    /// Single word -> meaning.
    words: HashMap<String, Meaning>,
    /// Words dropped from object phrases.
    stopwords: HashSet<String>,
}

impl Vocabulary {
    /// Creates a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        crate::stdlib::standard_vocabulary()
    }

    /// Registers a single word.
    pub fn register_word(&mut self, word: &str, meaning: Meaning) {
        self.words.insert(word.to_string(), meaning);
    }

    /// Registers a multi-word phrase.
    ///
    /// Phrases are kept sorted longest first so that a longer phrase always
    /// wins over any shorter one sharing its prefix. Phrases of equal length
    /// keep their registration order.
    pub fn register_phrase(&mut self, phrase: &str, meaning: Meaning) {
        let words: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return;
        }
        let at = self
            .phrases
            .iter()
            .position(|existing| existing.words.len() < words.len())
            .unwrap_or(self.phrases.len());
        self.phrases.insert(at, VerbPhrase { words, meaning });
    }

    /// Registers a stopword.
    pub fn register_stopword(&mut self, word: &str) {
        self.stopwords.insert(word.to_string());
    }

    /// Looks up a single word.
    #[must_use]
    pub fn lookup_word(&self, word: &str) -> Option<Meaning> {
        self.words.get(word).copied()
    }

    /// Finds the longest registered phrase that prefixes the tokens.
    #[must_use]
    pub fn match_phrase(&self, tokens: &[String]) -> Option<&VerbPhrase> {
        self.phrases.iter().find(|phrase| {
            phrase.words.len() <= tokens.len()
                && phrase.words.iter().zip(tokens).all(|(a, b)| a == b)
        })
    }

    /// Checks if a word is a stopword.
    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Every single word and phrase the vocabulary knows, sorted.
    #[must_use]
    pub fn known_words(&self) -> Vec<String> {
        let mut all: Vec<String> = self
            .words
            .keys()
            .cloned()
            .chain(self.phrases.iter().map(|p| p.words.join(" ")))
            .collect();
        all.sort();
        all.dedup();
        all
    }
}

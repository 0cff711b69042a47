//! Standard vocabulary for the interpreter.
//!
//! Contains the default verb phrases, synonyms, and stopwords.

use whitehouse_foundation::Direction;

use crate::vocabulary::{Meaning, Verb, Vocabulary};

/// Single-word synonyms for each canonical verb.
///
/// Direction words are registered separately from [`Direction::words`].
pub const VERBS: &[(Verb, &[&str])] = &[
    // Movement
    (Verb::Go, &["go", "walk", "run", "head"]),
    // Looking
    (Verb::Look, &["look", "l"]),
    (Verb::Examine, &["examine", "x", "inspect", "describe", "check"]),
    (Verb::Read, &["read", "peruse", "skim"]),
    // Manipulation
    (Verb::Take, &["take", "get", "grab"]),
    (Verb::Drop, &["drop", "discard"]),
    (Verb::Open, &["open"]),
    (Verb::Close, &["close", "shut"]),
    (Verb::Light, &["light", "ignite"]),
    (Verb::Extinguish, &["extinguish", "douse"]),
    (Verb::Move, &["move"]),
    (Verb::Push, &["push", "press", "shove"]),
    (Verb::Pull, &["pull", "tug", "yank"]),
    // Meta
    (Verb::Inventory, &["inventory", "inv", "i"]),
    (Verb::Score, &["score"]),
    (Verb::Help, &["help", "hint"]),
    (Verb::Quit, &["quit", "q"]),
    (Verb::Wait, &["wait", "z"]),
    (Verb::Again, &["again", "g"]),
];

/// Multi-word verb phrases that are not movement.
pub const PHRASES: &[(&str, Verb)] = &[
    ("pick up", Verb::Take),
    ("put down", Verb::Drop),
    ("look at", Verb::Examine),
    ("look around", Verb::Look),
    ("turn on", Verb::Light),
    ("switch on", Verb::Light),
    ("turn off", Verb::Extinguish),
    ("switch off", Verb::Extinguish),
    ("blow out", Verb::Extinguish),
];

/// Multi-word phrases that move the player.
pub const MOVEMENT_PHRASES: &[(&str, Direction)] = &[
    ("climb up", Direction::Up),
    ("climb down", Direction::Down),
    ("get in", Direction::In),
    ("get out", Direction::Out),
];

/// Words that may precede a direction ("go north", "walk n").
pub const MOVEMENT_VERBS: &[&str] = &["go", "walk", "run", "head"];

/// Words removed from object phrases.
pub const STOPWORDS: &[&str] = &["at", "in", "into", "on", "with", "to", "from", "the", "a", "an"];

/// Builds the standard vocabulary.
#[must_use]
pub fn standard_vocabulary() -> Vocabulary {
    let mut vocab = Vocabulary::new();

    for (verb, words) in VERBS {
        for word in *words {
            vocab.register_word(word, Meaning::verb(*verb));
        }
    }

    for direction in Direction::ALL {
        for word in direction.words() {
            vocab.register_word(word, Meaning::go(direction));
            for movement in MOVEMENT_VERBS {
                vocab.register_phrase(&format!("{movement} {word}"), Meaning::go(direction));
            }
        }
    }

    // "climb" on its own means up
    vocab.register_word("climb", Meaning::go(Direction::Up));

    for (phrase, verb) in PHRASES {
        vocab.register_phrase(phrase, Meaning::verb(*verb));
    }
    for (phrase, direction) in MOVEMENT_PHRASES {
        vocab.register_phrase(phrase, Meaning::go(*direction));
    }

    for word in STOPWORDS {
        vocab.register_stopword(word);
    }

    vocab
}

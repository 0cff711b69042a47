//! Tests for turning raw input into canonical commands

use whitehouse_foundation::Direction;
use whitehouse_parser::{Command, InputTokenizer, Parser, Verb};

fn parse(input: &str) -> Command {
    Parser::new().parse(input).unwrap()
}

// =============================================================================
// Tokenization
// =============================================================================

#[test]
fn tokenizer_lowercases_and_strips_punctuation() {
    assert_eq!(
        InputTokenizer::tokenize("  Take the LAMP!  "),
        vec!["take", "the", "lamp"]
    );
}

#[test]
fn normalize_collapses_whitespace() {
    assert_eq!(InputTokenizer::normalize("open   the\tmailbox."), "open the mailbox");
}

#[test]
fn empty_input_has_no_command() {
    let parser = Parser::new();
    assert!(parser.parse("").is_none());
    assert!(parser.parse(" \t ").is_none());
}

// =============================================================================
// Verbs and Synonyms
// =============================================================================

#[test]
fn pick_up_is_take() {
    let a = parse("pick up lamp");
    let b = parse("take lamp");
    assert_eq!(a.verb, Verb::Take);
    assert_eq!(a.verb, b.verb);
    assert_eq!(a.object_phrase, b.object_phrase);
}

#[test]
fn longest_phrase_wins() {
    assert_eq!(parse("look at mailbox").verb, Verb::Examine);
    assert_eq!(parse("look").verb, Verb::Look);
    assert_eq!(parse("turn on lamp").verb, Verb::Light);
    assert_eq!(parse("turn off lamp").verb, Verb::Extinguish);
}

#[test]
fn single_word_synonyms() {
    assert_eq!(parse("x leaflet").verb, Verb::Examine);
    assert_eq!(parse("get leaflet").verb, Verb::Take);
    assert_eq!(parse("shut mailbox").verb, Verb::Close);
    assert_eq!(parse("i").verb, Verb::Inventory);
    assert_eq!(parse("z").verb, Verb::Wait);
    assert_eq!(parse("g").verb, Verb::Again);
}

#[test]
fn unknown_verb_keeps_the_word() {
    let cmd = parse("frobnicate the lamp");
    assert_eq!(cmd.verb, Verb::Unknown);
    assert_eq!(cmd.word, "frobnicate");
    assert_eq!(cmd.object_phrase, vec!["lamp"]);
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn bare_directions() {
    for (input, dir) in [
        ("n", Direction::North),
        ("south", Direction::South),
        ("u", Direction::Up),
        ("ne", Direction::NorthEast),
    ] {
        let cmd = parse(input);
        assert_eq!(cmd.verb, Verb::Go, "{input}");
        assert_eq!(cmd.direction, Some(dir), "{input}");
    }
}

#[test]
fn movement_verbs_take_a_direction() {
    for input in ["go north", "walk n", "run north", "head n"] {
        let cmd = parse(input);
        assert_eq!(cmd.verb, Verb::Go, "{input}");
        assert_eq!(cmd.direction, Some(Direction::North), "{input}");
    }
}

#[test]
fn climbing() {
    assert_eq!(parse("climb up").direction, Some(Direction::Up));
    assert_eq!(parse("climb down").direction, Some(Direction::Down));
    assert_eq!(parse("climb").direction, Some(Direction::Up));
}

#[test]
fn go_without_direction() {
    let cmd = parse("go");
    assert_eq!(cmd.verb, Verb::Go);
    assert_eq!(cmd.direction, None);
}

// =============================================================================
// Object Phrases
// =============================================================================

#[test]
fn stopwords_are_removed() {
    let cmd = parse("look at the small mailbox");
    assert_eq!(cmd.object_phrase, vec!["small", "mailbox"]);
    assert_eq!(cmd.phrase(), "small mailbox");
}

#[test]
fn articles_only_leaves_no_object() {
    let cmd = parse("take the");
    assert!(!cmd.has_object());
}

#[test]
fn custom_vocabulary() {
    use whitehouse_parser::{Meaning, Vocabulary};

    let mut vocab = Vocabulary::new();
    vocab.register_word("yoink", Meaning::verb(Verb::Take));
    vocab.register_stopword("the");
    let parser = Parser::with_vocabulary(vocab);

    let cmd = parser.parse("yoink the egg").unwrap();
    assert_eq!(cmd.verb, Verb::Take);
    assert_eq!(cmd.object_phrase, vec!["egg"]);
    assert_eq!(parser.parse("take egg").unwrap().verb, Verb::Unknown);
}

//! Input tokenization.
//!
//! Converts raw player input into lowercase words.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation (hyphens are kept, they appear in object names)
    /// - Splits on any run of whitespace, so leading, trailing, and repeated
    ///   whitespace never produce empty words
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| !Self::is_punctuation(*c))
                    .flat_map(char::to_lowercase)
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Normalizes input to single-spaced lowercase words.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        Self::tokenize(input).join(" ")
    }

    fn is_punctuation(c: char) -> bool {
        matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"')
    }
}

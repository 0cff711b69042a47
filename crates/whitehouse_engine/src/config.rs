//! Configuration for the interpreter.

/// Configuration for the interpreter.
///
/// Controls automatic room descriptions, scoring, and darkness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Describe the new location after every successful move.
    pub auto_look: bool,

    /// The score reported as the game's total.
    pub max_score: u32,

    /// Dark locations hide their description until a light is visible.
    pub darkness: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            auto_look: true,
            max_score: 350,
            darkness: true,
        }
    }
}

impl InterpreterConfig {
    /// Creates a configuration for scripted play: no automatic descriptions
    /// after moves.
    #[must_use]
    pub fn terse() -> Self {
        Self {
            auto_look: false,
            ..Self::default()
        }
    }

    /// Creates a configuration where every location is lit.
    #[must_use]
    pub fn lit() -> Self {
        Self {
            darkness: false,
            ..Self::default()
        }
    }

    /// Builder method to set automatic descriptions.
    #[must_use]
    pub fn with_auto_look(mut self, auto_look: bool) -> Self {
        self.auto_look = auto_look;
        self
    }

    /// Builder method to set the total score.
    #[must_use]
    pub fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }

    /// Builder method to enable/disable darkness.
    #[must_use]
    pub fn with_darkness(mut self, darkness: bool) -> Self {
        self.darkness = darkness;
        self
    }
}

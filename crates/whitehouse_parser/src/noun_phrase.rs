//! Object phrase resolution.
//!
//! Resolves phrases like "brass lantern" to a visible object.

use whitehouse_foundation::ObjectId;
use whitehouse_storage::{GameState, World};

use crate::scope::ScopeEvaluator;

/// The pronoun that refers back to the last object acted on.
pub const PRONOUN: &str = "it";

/// Resolves object phrases against the visible objects.
pub struct ObjectResolver;

impl ObjectResolver {
    /// Every visible object whose name or an alias matches the phrase, in
    /// world declaration order.
    ///
    /// A name matches if it contains the joined phrase or the phrase
    /// contains it, ignoring case.
    #[must_use]
    pub fn matches(phrase: &[String], world: &World, state: &GameState) -> Vec<ObjectId> {
        let joined = phrase.join(" ").to_lowercase();
        if joined.is_empty() {
            return Vec::new();
        }

        ScopeEvaluator::visible_objects(world, state)
            .into_iter()
            .filter(|&id| {
                world.object(id).names().any(|name| {
                    let name = name.to_lowercase();
                    name.contains(&joined) || joined.contains(&name)
                })
            })
            .collect()
    }

    /// Resolves a phrase to a single object.
    ///
    /// The first match in declaration order wins. "it" resolves to the
    /// last referent while that object is still visible. An empty phrase
    /// resolves to nothing.
    #[must_use]
    pub fn resolve(phrase: &[String], world: &World, state: &GameState) -> Option<ObjectId> {
        if let [word] = phrase {
            if word == PRONOUN {
                let referent = state
                    .last_referent()
                    .filter(|&id| ScopeEvaluator::is_visible(state, id));
                log::trace!("pronoun {PRONOUN:?} resolved to {referent:?}");
                return referent;
            }
        }

        let found = Self::matches(phrase, world, state);
        log::trace!("phrase {phrase:?} matched {found:?}");
        found.first().copied()
    }
}

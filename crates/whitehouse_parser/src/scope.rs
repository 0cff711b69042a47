//! Scope evaluation for object resolution.
//!
//! Determines which objects the player can currently see and refer to.
//! Nothing is cached: visibility is recomputed from the holder edges on
//! every call.

use std::collections::HashSet;

use whitehouse_foundation::ObjectId;
use whitehouse_storage::{GameState, Holder, World};

/// Evaluates object visibility.
pub struct ScopeEvaluator;

impl ScopeEvaluator {
    /// Returns true if the object is visible to the player.
    ///
    /// An object is visible if it lies in the current location, is carried,
    /// or sits in an open container that is itself visible. A holder chain
    /// that loops back on itself is treated as not visible.
    #[must_use]
    pub fn is_visible(state: &GameState, id: ObjectId) -> bool {
        let mut seen = HashSet::new();
        let mut current = id;
        loop {
            if !seen.insert(current) {
                log::warn!("containment cycle through {current}; treating {id} as not visible");
                return false;
            }
            match state.holder_of(current) {
                Some(Holder::Inventory) => return true,
                Some(Holder::Location(location)) => return location == state.current_location(),
                Some(Holder::Container(container)) => {
                    if !state.is_open(container) {
                        return false;
                    }
                    current = container;
                }
                None => return false,
            }
        }
    }

    /// All visible objects, in world declaration order.
    #[must_use]
    pub fn visible_objects(world: &World, state: &GameState) -> Vec<ObjectId> {
        world
            .objects()
            .map(|template| template.id)
            .filter(|&id| Self::is_visible(state, id))
            .collect()
    }

    /// Returns true if the player can see in the current location.
    ///
    /// A location is lit unless it is dark and no visible object is lit.
    #[must_use]
    pub fn has_light(world: &World, state: &GameState) -> bool {
        !world.location(state.current_location()).dark
            || Self::visible_objects(world, state)
                .into_iter()
                .any(|id| state.is_lit(id))
    }
}

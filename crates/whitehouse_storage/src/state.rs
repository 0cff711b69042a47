//! Mutable session state.
//!
//! `GameState` is plain data backed by persistent maps, so cloning it is
//! O(1). The interpreter takes a state and returns a new one; the caller's
//! copy is never touched.

use im::OrdMap;
use whitehouse_foundation::{LocationId, ObjectId};

use crate::world::World;

/// The single current holder of an object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holder {
    /// Lying in a location.
    Location(LocationId),
    /// Inside (or under) another object.
    Container(ObjectId),
    /// Carried by the player.
    Inventory,
}

/// Per-object mutable state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectState {
    /// Ownership edge.
    pub holder: Holder,
    /// Open flag. Only `Openable` objects change it after load.
    pub open: bool,
    /// Lit flag. Only `Lightable` objects change it.
    pub lit: bool,
    /// Set once a `Moveable` object has been moved.
    pub moved: bool,
    /// Set once the object's treasure value has been awarded.
    pub scored: bool,
}

impl ObjectState {
    /// Creates a closed, unlit, unmoved state.
    #[must_use]
    pub const fn new(holder: Holder) -> Self {
        Self {
            holder,
            open: false,
            lit: false,
            moved: false,
            scored: false,
        }
    }
}

/// The mutable state of one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    current_location: LocationId,
    objects: OrdMap<ObjectId, ObjectState>,
    score: u32,
    moves: u32,
    last_referent: Option<ObjectId>,
    last_input: Option<String>,
}

impl GameState {
    /// Creates the initial snapshot for a world.
    #[must_use]
    pub fn new(world: &World) -> Self {
        let objects = world
            .objects()
            .map(|template| {
                let mut state = ObjectState::new(template.initial);
                state.open = template.initially_open;
                (template.id, state)
            })
            .collect();

        Self {
            current_location: world.start(),
            objects,
            score: 0,
            moves: 0,
            last_referent: None,
            last_input: None,
        }
    }

    /// The location the player is in.
    #[must_use]
    pub const fn current_location(&self) -> LocationId {
        self.current_location
    }

    /// Moves the player.
    pub fn set_current_location(&mut self, location: LocationId) {
        self.current_location = location;
    }

    /// The state of an object, if the object exists.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&ObjectState> {
        self.objects.get(&id)
    }

    /// Every object state, ordered by id.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &ObjectState)> {
        self.objects.iter().map(|(id, state)| (*id, state))
    }

    /// The holder of an object.
    #[must_use]
    pub fn holder_of(&self, id: ObjectId) -> Option<Holder> {
        self.object(id).map(|state| state.holder)
    }

    /// Returns true if the object is open.
    #[must_use]
    pub fn is_open(&self, id: ObjectId) -> bool {
        self.object(id).is_some_and(|state| state.open)
    }

    /// Returns true if the object is lit.
    #[must_use]
    pub fn is_lit(&self, id: ObjectId) -> bool {
        self.object(id).is_some_and(|state| state.lit)
    }

    /// Returns true if the object has been moved.
    #[must_use]
    pub fn has_been_moved(&self, id: ObjectId) -> bool {
        self.object(id).is_some_and(|state| state.moved)
    }

    /// Returns true if the object is carried directly by the player.
    #[must_use]
    pub fn in_inventory(&self, id: ObjectId) -> bool {
        self.holder_of(id) == Some(Holder::Inventory)
    }

    /// Objects held directly by a holder, ordered by id.
    #[must_use]
    pub fn held_by(&self, holder: Holder) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|(_, state)| state.holder == holder)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Objects carried directly by the player, ordered by id.
    #[must_use]
    pub fn inventory(&self) -> Vec<ObjectId> {
        self.held_by(Holder::Inventory)
    }

    /// Objects directly inside a container, ordered by id.
    #[must_use]
    pub fn contents(&self, container: ObjectId) -> Vec<ObjectId> {
        self.held_by(Holder::Container(container))
    }

    fn update(&mut self, id: ObjectId, f: impl FnOnce(&mut ObjectState)) {
        match self.objects.get_mut(&id) {
            Some(state) => f(state),
            None => log::warn!("ignoring update to unknown object {id}"),
        }
    }

    /// Re-parents an object. The caller keeps the containment graph acyclic.
    pub fn move_object(&mut self, id: ObjectId, holder: Holder) {
        self.update(id, |state| state.holder = holder);
    }

    /// Sets the open flag.
    pub fn set_open(&mut self, id: ObjectId, open: bool) {
        self.update(id, |state| state.open = open);
    }

    /// Sets the lit flag.
    pub fn set_lit(&mut self, id: ObjectId, lit: bool) {
        self.update(id, |state| state.lit = lit);
    }

    /// Marks an object as moved.
    pub fn mark_moved(&mut self, id: ObjectId) {
        self.update(id, |state| state.moved = true);
    }

    /// Awards an object's treasure value once. Returns true if points were added.
    pub fn award(&mut self, id: ObjectId, points: u32) -> bool {
        if points == 0 || self.object(id).is_none_or(|state| state.scored) {
            return false;
        }
        self.update(id, |state| state.scored = true);
        self.score = self.score.saturating_add(points);
        true
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of commands processed.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Counts one processed command.
    pub fn tick(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// The object "it" refers to.
    #[must_use]
    pub const fn last_referent(&self) -> Option<ObjectId> {
        self.last_referent
    }

    /// Sets the object "it" refers to.
    pub fn set_last_referent(&mut self, id: ObjectId) {
        self.last_referent = Some(id);
    }

    /// The previous non-empty input, for `again`.
    #[must_use]
    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    /// Records the input `again` will repeat.
    pub fn set_last_input(&mut self, input: impl Into<String>) {
        self.last_input = Some(input.into());
    }
}

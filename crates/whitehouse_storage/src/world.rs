//! The static world model: locations, exits, and object templates.
//!
//! A `World` is validated once when it is built. After that every lookup by
//! id is infallible; a lookup that misses is a programming error, never a
//! player-facing failure.

use std::collections::{BTreeMap, HashMap, HashSet};

use whitehouse_foundation::{
    Capabilities, Capability, Direction, Error, ErrorContext, ErrorKind, LocationId, ObjectId,
    Result,
};

use crate::state::Holder;

/// A node in the world graph.
#[derive(Clone, Debug)]
pub struct Location {
    /// Location identifier.
    pub id: LocationId,
    /// Short name, printed as the heading of a room description.
    pub name: &'static str,
    /// Room prose.
    pub description: &'static str,
    /// Directed exits. Not necessarily symmetric.
    pub exits: BTreeMap<Direction, LocationId>,
    /// Custom refusals for directions without an exit.
    pub blocked: BTreeMap<Direction, &'static str>,
    /// Whether the location needs a light source to be described.
    pub dark: bool,
}

impl Location {
    /// Creates a location with no exits.
    #[must_use]
    pub fn new(id: LocationId, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            exits: BTreeMap::new(),
            blocked: BTreeMap::new(),
            dark: false,
        }
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, to: LocationId) -> Self {
        self.exits.insert(direction, to);
        self
    }

    /// Adds a custom refusal for a direction with no exit.
    #[must_use]
    pub fn with_blocked(mut self, direction: Direction, refusal: &'static str) -> Self {
        self.blocked.insert(direction, refusal);
        self
    }

    /// Marks the location as dark.
    #[must_use]
    pub fn with_darkness(mut self) -> Self {
        self.dark = true;
        self
    }
}

/// An immutable object template.
#[derive(Clone, Debug)]
pub struct ObjectTemplate {
    /// Object identifier.
    pub id: ObjectId,
    /// Canonical name ("small mailbox").
    pub name: &'static str,
    /// Other words the player may use for it.
    pub aliases: Vec<&'static str>,
    /// Text shown by `examine`.
    pub description: &'static str,
    /// Fixed capabilities.
    pub capabilities: Capabilities,
    /// Where the object starts.
    pub initial: Holder,
    /// Whether the object starts open.
    pub initially_open: bool,
    /// Line shown in room descriptions instead of the generic one.
    pub presence: Option<&'static str>,
    /// Scenery is part of the room prose and never listed.
    pub scenery: bool,
    /// Readable text.
    pub text: Option<&'static str>,
    /// Message shown when the object is opened.
    pub open_text: Option<&'static str>,
    /// Message shown when the object is first moved.
    pub move_text: Option<&'static str>,
    /// Points awarded the first time the object is taken.
    pub value: u32,
}

impl ObjectTemplate {
    /// Creates a template with no capabilities.
    #[must_use]
    pub fn new(
        id: ObjectId,
        name: &'static str,
        description: &'static str,
        initial: Holder,
    ) -> Self {
        Self {
            id,
            name,
            aliases: Vec::new(),
            description,
            capabilities: Capabilities::NONE,
            initial,
            initially_open: false,
            presence: None,
            scenery: false,
            text: None,
            open_text: None,
            move_text: None,
            value: 0,
        }
    }

    /// Sets the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&'static str]) -> Self {
        self.aliases = aliases.to_vec();
        self
    }

    /// Adds a capability.
    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities = self.capabilities.with(capability);
        self
    }

    /// Makes the object start open.
    #[must_use]
    pub fn initially_open(mut self) -> Self {
        self.initially_open = true;
        self
    }

    /// Sets the room-description line.
    #[must_use]
    pub fn with_presence(mut self, presence: &'static str) -> Self {
        self.presence = Some(presence);
        self
    }

    /// Marks the object as scenery.
    #[must_use]
    pub fn as_scenery(mut self) -> Self {
        self.scenery = true;
        self
    }

    /// Sets the readable text.
    #[must_use]
    pub fn with_text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    /// Sets the message shown when opened.
    #[must_use]
    pub fn with_open_text(mut self, text: &'static str) -> Self {
        self.open_text = Some(text);
        self
    }

    /// Sets the message shown when first moved.
    #[must_use]
    pub fn with_move_text(mut self, text: &'static str) -> Self {
        self.move_text = Some(text);
        self
    }

    /// Sets the treasure value.
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Returns true if the object has the capability.
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// The canonical name followed by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// A scripted condition on an existing exit: the object must be open.
#[derive(Clone, Debug)]
pub struct ExitGuard {
    /// Location the exit leaves from.
    pub from: LocationId,
    /// Direction of the guarded exit.
    pub direction: Direction,
    /// The object that must be open.
    pub object: ObjectId,
    /// Message shown when the object is visible but closed.
    pub refusal: &'static str,
}

impl ExitGuard {
    /// Creates a guard.
    #[must_use]
    pub const fn new(
        from: LocationId,
        direction: Direction,
        object: ObjectId,
        refusal: &'static str,
    ) -> Self {
        Self {
            from,
            direction,
            object,
            refusal,
        }
    }
}

/// The validated, immutable world graph.
#[derive(Clone, Debug)]
pub struct World {
    start: LocationId,
    locations: BTreeMap<LocationId, Location>,
    /// Templates in declaration order.
    objects: Vec<ObjectTemplate>,
    object_index: HashMap<ObjectId, usize>,
    guards: Vec<ExitGuard>,
}

impl World {
    /// Builds and validates a world.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is declared twice, the start location is
    /// missing, an exit leads to a missing location, an object starts in a
    /// missing holder, a guard is dangling, or the initial containment has
    /// a cycle.
    pub fn new(
        start: LocationId,
        locations: Vec<Location>,
        objects: Vec<ObjectTemplate>,
        guards: Vec<ExitGuard>,
    ) -> Result<Self> {
        let mut location_map = BTreeMap::new();
        for location in locations {
            let id = location.id;
            if location_map.insert(id, location).is_some() {
                return Err(Error::new(ErrorKind::DuplicateLocation(id)));
            }
        }

        let mut object_index = HashMap::new();
        for (index, object) in objects.iter().enumerate() {
            if object_index.insert(object.id, index).is_some() {
                return Err(Error::new(ErrorKind::DuplicateObject(object.id)));
            }
        }

        let world = Self {
            start,
            locations: location_map,
            objects,
            object_index,
            guards,
        };

        world
            .validate()
            .map_err(|e| e.with_context(ErrorContext::new().with_source("world tables")))?;

        log::debug!(
            "loaded world: {} locations, {} objects, {} exit guards",
            world.locations.len(),
            world.objects.len(),
            world.guards.len()
        );

        Ok(world)
    }

    /// Builds the standard world shipped with the interpreter.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard tables fail validation.
    pub fn standard() -> Result<Self> {
        crate::data::standard_world()
    }

    fn validate(&self) -> Result<()> {
        if !self.locations.contains_key(&self.start) {
            return Err(Error::new(ErrorKind::MissingStart(self.start)));
        }

        for location in self.locations.values() {
            for (&direction, &to) in &location.exits {
                if !self.locations.contains_key(&to) {
                    return Err(Error::missing_exit_target(location.id, direction, to));
                }
            }
        }

        for object in &self.objects {
            match object.initial {
                Holder::Location(id) if !self.locations.contains_key(&id) => {
                    return Err(Error::new(ErrorKind::UnknownHolder {
                        object: object.id,
                        holder: format!("location {id}"),
                    }));
                }
                Holder::Container(id) if !self.object_index.contains_key(&id) => {
                    return Err(Error::new(ErrorKind::UnknownHolder {
                        object: object.id,
                        holder: format!("object {id}"),
                    }));
                }
                _ => {}
            }
        }

        for guard in &self.guards {
            let reason = match self.locations.get(&guard.from) {
                None => Some("location is not defined".to_string()),
                Some(location) if !location.exits.contains_key(&guard.direction) => {
                    Some("no exit in that direction".to_string())
                }
                Some(_) if !self.object_index.contains_key(&guard.object) => {
                    Some(format!("object {} is not defined", guard.object))
                }
                Some(_) => None,
            };
            if let Some(reason) = reason {
                return Err(Error::new(ErrorKind::UnknownGuard {
                    from: guard.from,
                    direction: guard.direction,
                    reason,
                }));
            }
        }

        self.validate_containment()
    }

    /// Walks every object's initial holder chain looking for a cycle.
    fn validate_containment(&self) -> Result<()> {
        for object in &self.objects {
            let mut seen = HashSet::from([object.id]);
            let mut holder = object.initial;
            while let Holder::Container(container) = holder {
                if !seen.insert(container) {
                    return Err(Error::containment_cycle(object.id));
                }
                holder = self.object(container).initial;
            }
        }
        Ok(())
    }

    /// The starting location.
    #[must_use]
    pub const fn start(&self) -> LocationId {
        self.start
    }

    /// Looks up a location.
    ///
    /// # Panics
    ///
    /// Panics if the location is not part of this world. Ids handed out by a
    /// validated world and its game states are always present.
    #[must_use]
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[&id]
    }

    /// Returns true if the location is part of this world.
    #[must_use]
    pub fn has_location(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// All locations, ordered by id.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// The exits of a location.
    ///
    /// # Panics
    ///
    /// Panics if the location is not part of this world.
    #[must_use]
    pub fn exits_of(&self, id: LocationId) -> &BTreeMap<Direction, LocationId> {
        &self.location(id).exits
    }

    /// The heading and prose of a location, separated by a newline.
    ///
    /// # Panics
    ///
    /// Panics if the location is not part of this world.
    #[must_use]
    pub fn describe(&self, id: LocationId) -> String {
        let location = self.location(id);
        format!("{}\n{}", location.name, location.description)
    }

    /// Looks up an object template.
    ///
    /// # Panics
    ///
    /// Panics if the object is not part of this world.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> &ObjectTemplate {
        &self.objects[self.object_index[&id]]
    }

    /// Returns true if the object is part of this world.
    #[must_use]
    pub fn has_object(&self, id: ObjectId) -> bool {
        self.object_index.contains_key(&id)
    }

    /// All object templates in declaration order.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectTemplate> {
        self.objects.iter()
    }

    /// The guard on an exit, if any.
    #[must_use]
    pub fn guard(&self, from: LocationId, direction: Direction) -> Option<&ExitGuard> {
        self.guards
            .iter()
            .find(|guard| guard.from == from && guard.direction == direction)
    }
}

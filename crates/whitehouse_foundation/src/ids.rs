//! Identifiers for locations, objects, directions, and capabilities.
//!
//! Locations and objects are closed enumerations: the canonical tables are
//! known at compile time, so a typo in a table entry fails to build instead
//! of failing at runtime.

use std::fmt;

/// Identifier of a location in the world graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationId {
    /// Open field west of the house (the starting location).
    WestOfHouse,
    /// North side of the house.
    NorthOfHouse,
    /// South side of the house.
    SouthOfHouse,
    /// Behind the house, by the kitchen window.
    BehindHouse,
    /// Inside the house.
    Kitchen,
    /// Above the kitchen.
    Attic,
    /// West of the kitchen.
    LivingRoom,
    /// Below the trap door.
    Cellar,
    /// Forest west of the house.
    Forest,
    /// Path north of the house.
    ForestPath,
    /// In the large tree by the path.
    UpATree,
    /// Clearing east of the house.
    Clearing,
}

impl LocationId {
    /// Every location identifier, in declaration order.
    pub const ALL: [LocationId; 12] = [
        Self::WestOfHouse,
        Self::NorthOfHouse,
        Self::SouthOfHouse,
        Self::BehindHouse,
        Self::Kitchen,
        Self::Attic,
        Self::LivingRoom,
        Self::Cellar,
        Self::Forest,
        Self::ForestPath,
        Self::UpATree,
        Self::Clearing,
    ];

    /// Returns the stable kebab-case name of this location.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WestOfHouse => "west-of-house",
            Self::NorthOfHouse => "north-of-house",
            Self::SouthOfHouse => "south-of-house",
            Self::BehindHouse => "behind-house",
            Self::Kitchen => "kitchen",
            Self::Attic => "attic",
            Self::LivingRoom => "living-room",
            Self::Cellar => "cellar",
            Self::Forest => "forest",
            Self::ForestPath => "forest-path",
            Self::UpATree => "up-a-tree",
            Self::Clearing => "clearing",
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an object template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectId {
    /// The small mailbox at the starting location.
    Mailbox,
    /// The leaflet inside the mailbox.
    Leaflet,
    /// The boarded front door.
    FrontDoor,
    /// The kitchen window.
    Window,
    /// The brown sack in the kitchen.
    Sack,
    /// The lunch inside the sack.
    Lunch,
    /// The garlic inside the sack.
    Garlic,
    /// The rope in the attic.
    Rope,
    /// The knife in the attic.
    Knife,
    /// The trophy case in the living room.
    TrophyCase,
    /// The oriental rug in the living room.
    Rug,
    /// The trap door hidden under the rug.
    TrapDoor,
    /// The brass lantern.
    Lamp,
    /// The elvish sword.
    Sword,
    /// The large tree by the forest path.
    Tree,
    /// The bird's nest up the tree.
    Nest,
    /// The jewel-encrusted egg in the nest.
    Egg,
    /// The pile of leaves in the clearing.
    Leaves,
}

impl ObjectId {
    /// Returns the stable kebab-case name of this object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mailbox => "mailbox",
            Self::Leaflet => "leaflet",
            Self::FrontDoor => "front-door",
            Self::Window => "window",
            Self::Sack => "sack",
            Self::Lunch => "lunch",
            Self::Garlic => "garlic",
            Self::Rope => "rope",
            Self::Knife => "knife",
            Self::TrophyCase => "trophy-case",
            Self::Rug => "rug",
            Self::TrapDoor => "trap-door",
            Self::Lamp => "lamp",
            Self::Sword => "sword",
            Self::Tree => "tree",
            Self::Nest => "nest",
            Self::Egg => "egg",
            Self::Leaves => "leaves",
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of an exit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    In,
    Out,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Direction; 12] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
        Self::In,
        Self::Out,
    ];

    /// The full word for this direction.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::NorthEast => "northeast",
            Self::NorthWest => "northwest",
            Self::SouthEast => "southeast",
            Self::SouthWest => "southwest",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Every word (full form and abbreviations) that names this direction.
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::North => &["north", "n"],
            Self::South => &["south", "s"],
            Self::East => &["east", "e"],
            Self::West => &["west", "w"],
            Self::Up => &["up", "u"],
            Self::Down => &["down", "d"],
            Self::NorthEast => &["northeast", "ne"],
            Self::NorthWest => &["northwest", "nw"],
            Self::SouthEast => &["southeast", "se"],
            Self::SouthWest => &["southwest", "sw"],
            Self::In => &["in", "inside", "enter"],
            Self::Out => &["out", "outside", "exit", "leave"],
        }
    }

    /// Looks up a direction by any of its words.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.words().contains(&word))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A fixed trait of an object that determines which verbs may act on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Can be picked up into the inventory.
    Takeable,
    /// Can be opened and closed.
    Openable,
    /// Can be lit and extinguished.
    Lightable,
    /// Can be moved, pushed, or pulled.
    Moveable,
}

impl Capability {
    const fn bit(self) -> u8 {
        match self {
            Self::Takeable => 1,
            Self::Openable => 1 << 1,
            Self::Lightable => 1 << 2,
            Self::Moveable => 1 << 3,
        }
    }
}

/// An immutable set of capabilities.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    /// The empty set (a stationary fixture).
    pub const NONE: Self = Self(0);

    /// Builds a set from a slice of capabilities.
    #[must_use]
    pub const fn of(caps: &[Capability]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < caps.len() {
            bits |= caps[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns a new set with the capability added.
    #[must_use]
    pub const fn with(self, cap: Capability) -> Self {
        Self(self.0 | cap.bit())
    }

    /// Returns true if the set contains the capability.
    #[must_use]
    pub const fn contains(self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let all = [
            Capability::Takeable,
            Capability::Openable,
            Capability::Lightable,
            Capability::Moveable,
        ];
        f.debug_set()
            .entries(all.into_iter().filter(|cap| self.contains(*cap)))
            .finish()
    }
}

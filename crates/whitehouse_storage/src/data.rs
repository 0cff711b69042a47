//! The standard world: a white house, its grounds, and the forest around it.
//!
//! Objects are declared in the same order as [`ObjectId`]; the resolver
//! breaks name ties by this order.

use whitehouse_foundation::Capability::{Lightable, Moveable, Openable, Takeable};
use whitehouse_foundation::{Direction, LocationId, ObjectId, Result};

use crate::state::Holder;
use crate::world::{ExitGuard, Location, ObjectTemplate, World};

const LEAFLET_TEXT: &str = "\"WELCOME TO ZORK!\n\nZORK is a game of adventure, danger, and low cunning. In it you will explore some of the most amazing territory ever seen by mortals. No computer should be without one!\"";

/// Builds and validates the standard world.
///
/// # Errors
///
/// Returns an error if the tables fail validation.
pub fn standard_world() -> Result<World> {
    World::new(LocationId::WestOfHouse, locations(), objects(), guards())
}

fn locations() -> Vec<Location> {
    use Direction::{Down, East, In, North, Out, South, Up, West};
    use LocationId::{
        Attic, BehindHouse, Cellar, Clearing, Forest, ForestPath, Kitchen, LivingRoom,
        NorthOfHouse, SouthOfHouse, UpATree, WestOfHouse,
    };

    vec![
        Location::new(
            WestOfHouse,
            "West of House",
            "You are standing in an open field west of a white house, with a boarded front door.",
        )
        .with_exit(North, NorthOfHouse)
        .with_exit(South, SouthOfHouse)
        .with_exit(West, Forest)
        .with_blocked(East, "The door is boarded and you can't remove the boards."),
        Location::new(
            NorthOfHouse,
            "North of House",
            "You are facing the north side of a white house. There is no door here, and all the windows are boarded up. To the north a narrow path winds through the trees.",
        )
        .with_exit(West, WestOfHouse)
        .with_exit(East, BehindHouse)
        .with_exit(North, ForestPath)
        .with_blocked(South, "The windows are all boarded."),
        Location::new(
            SouthOfHouse,
            "South of House",
            "You are facing the south side of a white house. There is no door here, and all the windows are boarded.",
        )
        .with_exit(West, WestOfHouse)
        .with_exit(East, BehindHouse)
        .with_exit(South, Forest)
        .with_blocked(North, "The windows are all boarded."),
        Location::new(
            BehindHouse,
            "Behind House",
            "You are behind the white house. A path leads into the forest to the east. In one corner of the house there is a small window.",
        )
        .with_exit(North, NorthOfHouse)
        .with_exit(South, SouthOfHouse)
        .with_exit(East, Clearing)
        .with_exit(West, Kitchen)
        .with_exit(In, Kitchen),
        Location::new(
            Kitchen,
            "Kitchen",
            "You are in the kitchen of the white house. A table seems to have been used recently for the preparation of food. A passage leads to the west and a dark staircase can be seen leading upward. A dark chimney leads down and to the east is a small window.",
        )
        .with_exit(East, BehindHouse)
        .with_exit(Out, BehindHouse)
        .with_exit(West, LivingRoom)
        .with_exit(Up, Attic)
        .with_blocked(Down, "Only Santa Claus climbs down chimneys."),
        Location::new(
            Attic,
            "Attic",
            "This is the attic. The only exit is a stairway leading down.",
        )
        .with_exit(Down, Kitchen)
        .with_darkness(),
        Location::new(
            LivingRoom,
            "Living Room",
            "You are in the living room. There is a doorway to the east, a wooden door with strange gothic lettering to the west, which appears to be nailed shut, a trophy case, and a large oriental rug in the center of the room.",
        )
        .with_exit(East, Kitchen)
        .with_exit(Down, Cellar)
        .with_blocked(West, "The door is nailed shut."),
        Location::new(
            Cellar,
            "Cellar",
            "You are in a dark and damp cellar with a narrow passageway leading north, and a crawlway to the south. On the west is the bottom of a steep metal ramp which is unclimbable.",
        )
        .with_exit(Up, LivingRoom)
        .with_blocked(North, "The passageway is choked with rubble.")
        .with_blocked(South, "The crawlway is too narrow to enter.")
        .with_blocked(
            West,
            "You try to ascend the ramp, but it is impossible, and you slide back down.",
        )
        .with_darkness(),
        Location::new(
            Forest,
            "Forest",
            "This is a forest, with trees in all directions. To the east, there appears to be sunlight.",
        )
        .with_exit(East, ForestPath)
        .with_exit(North, Clearing)
        .with_exit(South, Forest)
        .with_blocked(West, "You would need a machete to go further west.")
        .with_blocked(Up, "There is no tree here suitable for climbing."),
        Location::new(
            ForestPath,
            "Forest Path",
            "This is a path winding through a dimly lit forest. The path heads north-south here. One particularly large tree with some low branches stands at the edge of the path.",
        )
        .with_exit(North, Clearing)
        .with_exit(South, NorthOfHouse)
        .with_exit(West, Forest)
        .with_exit(Up, UpATree),
        Location::new(
            UpATree,
            "Up a Tree",
            "You are about 10 feet above the ground nestled among some large branches. The nearest branch above you is above your reach.",
        )
        .with_exit(Down, ForestPath)
        .with_blocked(Up, "You cannot climb any higher."),
        Location::new(
            Clearing,
            "Clearing",
            "You are in a small clearing in a well marked forest path that extends to the east and west.",
        )
        .with_exit(West, BehindHouse)
        .with_exit(North, ForestPath)
        .with_exit(South, Forest),
    ]
}

#[allow(clippy::too_many_lines)]
fn objects() -> Vec<ObjectTemplate> {
    use LocationId::{Attic, BehindHouse, Clearing, ForestPath, Kitchen, LivingRoom, UpATree, WestOfHouse};

    vec![
        ObjectTemplate::new(
            ObjectId::Mailbox,
            "small mailbox",
            "It's a small mailbox with a little red flag.",
            Holder::Location(WestOfHouse),
        )
        .with_aliases(&["mailbox", "box"])
        .with_capability(Openable)
        .with_presence("There is a small mailbox here."),
        ObjectTemplate::new(
            ObjectId::Leaflet,
            "leaflet",
            "A small leaflet, printed on cheap paper.",
            Holder::Container(ObjectId::Mailbox),
        )
        .with_aliases(&["advertisement", "booklet", "pamphlet"])
        .with_capability(Takeable)
        .with_text(LEAFLET_TEXT),
        ObjectTemplate::new(
            ObjectId::FrontDoor,
            "front door",
            "The door is boarded and you can't remove the boards.",
            Holder::Location(WestOfHouse),
        )
        .with_aliases(&["door", "boards"])
        .as_scenery(),
        ObjectTemplate::new(
            ObjectId::Window,
            "kitchen window",
            "A small window in the corner of the house.",
            Holder::Location(BehindHouse),
        )
        .with_aliases(&["window"])
        .with_capability(Openable)
        .with_open_text("With great effort, you open the window far enough to allow entry.")
        .as_scenery(),
        ObjectTemplate::new(
            ObjectId::Sack,
            "brown sack",
            "The sack is made of coarse brown burlap.",
            Holder::Location(Kitchen),
        )
        .with_aliases(&["sack", "bag"])
        .with_capability(Takeable)
        .with_capability(Openable)
        .with_presence("On the table is an elongated brown sack, smelling of hot peppers."),
        ObjectTemplate::new(
            ObjectId::Lunch,
            "lunch",
            "A hot pepper sandwich.",
            Holder::Container(ObjectId::Sack),
        )
        .with_aliases(&["sandwich", "food"])
        .with_capability(Takeable),
        ObjectTemplate::new(
            ObjectId::Garlic,
            "clove of garlic",
            "A clove of garlic. It smells strongly.",
            Holder::Container(ObjectId::Sack),
        )
        .with_aliases(&["garlic", "clove"])
        .with_capability(Takeable),
        ObjectTemplate::new(
            ObjectId::Rope,
            "rope",
            "A large coil of sturdy rope.",
            Holder::Location(Attic),
        )
        .with_aliases(&["coil"])
        .with_capability(Takeable)
        .with_presence("A large coil of rope is lying in the corner."),
        ObjectTemplate::new(
            ObjectId::Knife,
            "nasty knife",
            "The knife is sharp and nasty-looking.",
            Holder::Location(Attic),
        )
        .with_aliases(&["knife"])
        .with_capability(Takeable)
        .with_presence("On a table is a nasty-looking knife."),
        ObjectTemplate::new(
            ObjectId::TrophyCase,
            "trophy case",
            "A handsome trophy case with a glass front.",
            Holder::Location(LivingRoom),
        )
        .with_aliases(&["case", "trophy"])
        .with_capability(Openable)
        .as_scenery(),
        ObjectTemplate::new(
            ObjectId::Rug,
            "oriental rug",
            "A large oriental rug, faded with age.",
            Holder::Location(LivingRoom),
        )
        .with_aliases(&["rug", "carpet"])
        .with_capability(Moveable)
        .with_move_text(
            "With a great effort, the rug is moved to one side of the room, revealing the dusty cover of a closed trap door.",
        )
        .as_scenery(),
        ObjectTemplate::new(
            ObjectId::TrapDoor,
            "trap door",
            "The dusty cover of a trap door.",
            Holder::Container(ObjectId::Rug),
        )
        .with_aliases(&["trapdoor", "door", "cover"])
        .with_capability(Openable)
        .with_open_text(
            "The door reluctantly opens to reveal a rickety staircase descending into darkness.",
        ),
        ObjectTemplate::new(
            ObjectId::Lamp,
            "brass lantern",
            "The lamp is a battery-powered brass lantern.",
            Holder::Location(LivingRoom),
        )
        .with_aliases(&["lamp", "lantern", "light"])
        .with_capability(Takeable)
        .with_capability(Lightable)
        .with_presence("A battery-powered brass lantern is on the trophy case."),
        ObjectTemplate::new(
            ObjectId::Sword,
            "elvish sword",
            "The blade is engraved with runes of an ancient elvish tongue.",
            Holder::Location(LivingRoom),
        )
        .with_aliases(&["sword", "blade"])
        .with_capability(Takeable)
        .with_presence("Above the trophy case hangs an elvish sword of great antiquity."),
        ObjectTemplate::new(
            ObjectId::Tree,
            "large tree",
            "The tree has low branches that look easy to climb.",
            Holder::Location(ForestPath),
        )
        .with_aliases(&["tree", "branches"])
        .as_scenery(),
        ObjectTemplate::new(
            ObjectId::Nest,
            "bird's nest",
            "The nest is woven from twigs and soft down.",
            Holder::Location(UpATree),
        )
        .with_aliases(&["birds nest", "nest"])
        .with_capability(Takeable)
        .initially_open()
        .with_presence("Beside you on the branch is a small bird's nest."),
        ObjectTemplate::new(
            ObjectId::Egg,
            "jewel-encrusted egg",
            "The egg is covered with fine gold inlay and ornamented in lapis lazuli and mother-of-pearl.",
            Holder::Container(ObjectId::Nest),
        )
        .with_aliases(&["egg", "jewel"])
        .with_capability(Takeable)
        .with_value(5),
        ObjectTemplate::new(
            ObjectId::Leaves,
            "pile of leaves",
            "A deep pile of damp, rotting leaves.",
            Holder::Location(Clearing),
        )
        .with_aliases(&["leaves", "pile"])
        .with_capability(Moveable)
        .with_presence("On the ground is a pile of leaves."),
    ]
}

fn guards() -> Vec<ExitGuard> {
    vec![
        ExitGuard::new(
            LocationId::BehindHouse,
            Direction::West,
            ObjectId::Window,
            "The kitchen window is closed.",
        ),
        ExitGuard::new(
            LocationId::BehindHouse,
            Direction::In,
            ObjectId::Window,
            "The kitchen window is closed.",
        ),
        ExitGuard::new(
            LocationId::LivingRoom,
            Direction::Down,
            ObjectId::TrapDoor,
            "The trap door is closed.",
        ),
    ]
}

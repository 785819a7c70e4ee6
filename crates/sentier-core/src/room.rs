use std::collections::BTreeMap;
use std::fmt;

use crate::direction::Direction;
use crate::item::Inventory;
use crate::npc::NpcId;

/// Stable index of a room in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// The outgoing exits of a room, one slot per direction.
///
/// Every direction always has a slot; `None` means there is no door that way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exits([Option<RoomId>; 6]);

impl Exits {
    /// Create an exit set with no doors.
    pub fn new() -> Self {
        Self::default()
    }

    /// The room reached by going `direction`, if any.
    pub fn get(&self, direction: Direction) -> Option<RoomId> {
        self.0[direction.index()]
    }

    /// Set or clear the exit in `direction`.
    pub fn set(&mut self, direction: Direction, target: Option<RoomId>) {
        self.0[direction.index()] = target;
    }

    /// Iterate over the exits that lead somewhere, in canonical order.
    pub fn open(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.get(dir).map(|target| (dir, target)))
    }

    /// Iterate over all six slots, in canonical order.
    pub fn all(&self) -> impl Iterator<Item = (Direction, Option<RoomId>)> + '_ {
        Direction::ALL.into_iter().map(|dir| (dir, self.get(dir)))
    }
}

/// A place in the world.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Descriptive text, phrased to follow "Vous êtes dans".
    pub description: String,
    /// Outgoing exits.
    pub exits: Exits,
    /// Items lying in the room.
    pub inventory: Inventory,
    /// NPCs currently in the room, keyed by name.
    pub npcs: BTreeMap<String, NpcId>,
    /// Whether entering the room requires unlocking it first.
    pub locked: bool,
    /// Skill level needed to pick the lock.
    pub difficulty: u8,
    /// Name of the item that opens the lock without picking.
    pub key: Option<String>,
}

impl Room {
    /// Create an unlocked room with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Exits::new(),
            inventory: Inventory::new(),
            npcs: BTreeMap::new(),
            locked: false,
            difficulty: 0,
            key: None,
        }
    }

    /// Lock the room behind a pick difficulty.
    pub fn with_lock(mut self, difficulty: u8) -> Self {
        self.locked = true;
        self.difficulty = difficulty;
        self
    }

    /// Name the item that opens the lock.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Clear the lock.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// The exit line, e.g. `Sorties: N, S`.
    pub fn exit_string(&self) -> String {
        let codes: Vec<&str> = self.exits.open().map(|(dir, _)| dir.code()).collect();
        format!("Sorties: {}", codes.join(", "))
    }

    /// Full description shown on arrival.
    pub fn long_description(&self) -> String {
        format!(
            "\nVous êtes dans {}\n\n{}\n",
            self.description,
            self.exit_string()
        )
    }

    /// Description of the room contents for the `look` command.
    pub fn look(&self) -> String {
        let mut output = format!("\n{}\n", self.description);
        output.push_str(&self.inventory.describe("Il n'y a rien ici.", "La pièce contient :"));
        if !self.npcs.is_empty() {
            output.push('\n');
            for name in self.npcs.keys() {
                output.push_str(&format!("{name} est ici.\n"));
            }
        }
        output
    }
}

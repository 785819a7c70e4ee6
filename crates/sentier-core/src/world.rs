use std::collections::HashMap;

use log::warn;

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::npc::{Npc, NpcId};
use crate::room::{Room, RoomId};

/// The world graph. Owns every room and NPC.
///
/// Rooms live in an arena and refer to each other by [`RoomId`], so the exit
/// graph can contain cycles without ownership cycles. Rooms are added during
/// setup only; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
    npcs: Vec<Npc>,

    // Indexes
    room_by_name_lower: HashMap<String, RoomId>,
    npc_by_name_lower: HashMap<String, NpcId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Add a room. Returns its ID.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        let name_lower = room.name.to_lowercase();
        if self.room_by_name_lower.contains_key(&name_lower) {
            return Err(WorldError::DuplicateRoom(room.name));
        }
        let id = RoomId(self.rooms.len());
        self.room_by_name_lower.insert(name_lower, id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Create a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> WorldResult<()> {
        self.ensure_room(to)?;
        self.room_mut(from)?.exits.set(direction, Some(to));
        Ok(())
    }

    /// Create exits both ways: `from → to` in `direction` and `to → from` in `back`.
    pub fn connect_both(
        &mut self,
        from: RoomId,
        direction: Direction,
        to: RoomId,
        back: Direction,
    ) -> WorldResult<()> {
        self.connect(from, direction, to)?;
        self.connect(to, back, from)
    }

    /// Add an NPC and register it in its room.
    pub fn add_npc(&mut self, npc: Npc) -> WorldResult<NpcId> {
        let name_lower = npc.name.to_lowercase();
        if self.npc_by_name_lower.contains_key(&name_lower) {
            return Err(WorldError::DuplicateNpc(npc.name));
        }
        let id = NpcId(self.npcs.len());
        let name = npc.name.clone();
        self.room_mut(npc.location)?.npcs.insert(name, id);
        self.npc_by_name_lower.insert(name_lower, id);
        self.npcs.push(npc);
        Ok(id)
    }

    /// Check that every exit and NPC placement points into the arena.
    pub fn validate(&self) -> WorldResult<()> {
        if self.rooms.is_empty() {
            return Err(WorldError::MissingStartRoom);
        }
        for room in &self.rooms {
            for (_, target) in room.exits.open() {
                self.ensure_room(target)?;
            }
            for id in room.npcs.values() {
                if id.0 >= self.npcs.len() {
                    return Err(WorldError::NpcNotFound(*id));
                }
            }
            if room.locked && room.key.is_none() && room.difficulty == 0 {
                warn!("room '{}' is locked with no key and no difficulty", room.name);
            }
        }
        for npc in &self.npcs {
            self.ensure_room(npc.location)?;
        }
        Ok(())
    }

    fn ensure_room(&self, id: RoomId) -> WorldResult<()> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(WorldError::RoomNotFound(id))
        }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Borrow a room.
    pub fn room(&self, id: RoomId) -> WorldResult<&Room> {
        self.rooms.get(id.0).ok_or(WorldError::RoomNotFound(id))
    }

    /// Mutably borrow a room.
    pub fn room_mut(&mut self, id: RoomId) -> WorldResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(WorldError::RoomNotFound(id))
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.room_by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// The room reached from `room` going `direction`, if there is a door.
    pub fn get_exit(&self, room: RoomId, direction: Direction) -> Option<RoomId> {
        self.rooms.get(room.0)?.exits.get(direction)
    }

    /// Iterate over `(id, room)` pairs.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // -----------------------------------------------------------------------
    // NPCs
    // -----------------------------------------------------------------------

    /// Borrow an NPC.
    pub fn npc(&self, id: NpcId) -> WorldResult<&Npc> {
        self.npcs.get(id.0).ok_or(WorldError::NpcNotFound(id))
    }

    /// Mutably borrow an NPC.
    pub fn npc_mut(&mut self, id: NpcId) -> WorldResult<&mut Npc> {
        self.npcs.get_mut(id.0).ok_or(WorldError::NpcNotFound(id))
    }

    /// Find an NPC in `room` by name (case-insensitive).
    ///
    /// NPCs elsewhere in the world are not found.
    pub fn npc_in_room(&self, room: RoomId, name: &str) -> Option<NpcId> {
        let name_lower = name.to_lowercase();
        self.rooms
            .get(room.0)?
            .npcs
            .iter()
            .find(|(n, _)| n.to_lowercase() == name_lower)
            .map(|(_, id)| *id)
    }

    /// All NPC IDs, in creation order.
    pub fn npc_ids(&self) -> impl Iterator<Item = NpcId> + use<> {
        (0..self.npcs.len()).map(NpcId)
    }

    /// Move an NPC to `to`, keeping both room registries in step.
    pub fn relocate_npc(&mut self, id: NpcId, to: RoomId) -> WorldResult<()> {
        self.ensure_room(to)?;
        let npc = self.npcs.get_mut(id.0).ok_or(WorldError::NpcNotFound(id))?;
        let from = npc.location;
        npc.location = to;
        let name = npc.name.clone();

        if let Some(room) = self.rooms.get_mut(from.0) {
            room.npcs.remove(&name);
        }
        self.room_mut(to)?.npcs.insert(name, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (World, RoomId, RoomId) {
        let mut world = World::new();
        let forest = world.add_room(Room::new("Forest", "une forêt.")).unwrap();
        let cave = world.add_room(Room::new("Cave", "une grotte.")).unwrap();
        (world, forest, cave)
    }

    #[test]
    fn duplicate_room_names_rejected() {
        let (mut world, _, _) = two_rooms();
        let err = world.add_room(Room::new("forest", "encore")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom(_)));
    }

    #[test]
    fn exits_are_directed() {
        let (mut world, forest, cave) = two_rooms();
        world.connect(forest, Direction::North, cave).unwrap();
        assert_eq!(world.get_exit(forest, Direction::North), Some(cave));
        assert_eq!(world.get_exit(cave, Direction::South), None);
    }

    #[test]
    fn cycles_are_allowed() {
        let (mut world, forest, cave) = two_rooms();
        let cottage = world.add_room(Room::new("Cottage", "un chalet.")).unwrap();
        world.connect(forest, Direction::North, cave).unwrap();
        world.connect(cave, Direction::East, cottage).unwrap();
        world.connect(cottage, Direction::West, forest).unwrap();
        world.validate().unwrap();

        let mut here = forest;
        for dir in [Direction::North, Direction::East, Direction::West] {
            here = world.get_exit(here, dir).unwrap();
        }
        assert_eq!(here, forest);
    }

    #[test]
    fn connect_unknown_room_fails() {
        let (mut world, forest, _) = two_rooms();
        let err = world.connect(forest, Direction::Up, RoomId(9)).unwrap_err();
        assert!(matches!(err, WorldError::RoomNotFound(_)));
        assert_eq!(world.get_exit(forest, Direction::Up), None);
    }

    #[test]
    fn empty_world_is_invalid() {
        assert!(matches!(
            World::new().validate(),
            Err(WorldError::MissingStartRoom)
        ));
    }

    #[test]
    fn find_room_case_insensitive() {
        let (world, forest, _) = two_rooms();
        assert_eq!(world.find_room("FOREST"), Some(forest));
        assert_eq!(world.find_room("Castle"), None);
    }

    #[test]
    fn npc_registered_in_room() {
        let (mut world, forest, cave) = two_rooms();
        let id = world
            .add_npc(Npc::new("Gandalf", "un magicien", forest, ["Bonjour"]))
            .unwrap();
        assert_eq!(world.npc_in_room(forest, "gandalf"), Some(id));
        assert_eq!(world.npc_in_room(cave, "gandalf"), None);
    }

    #[test]
    fn duplicate_npc_rejected() {
        let (mut world, forest, _) = two_rooms();
        world
            .add_npc(Npc::new("Gandalf", "un magicien", forest, ["Bonjour"]))
            .unwrap();
        let err = world
            .add_npc(Npc::new("GANDALF", "un autre", forest, ["Salut"]))
            .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateNpc(_)));
    }

    #[test]
    fn relocate_updates_both_registries() {
        let (mut world, forest, cave) = two_rooms();
        let id = world
            .add_npc(Npc::new("Gandalf", "un magicien", forest, ["Bonjour"]))
            .unwrap();
        world.relocate_npc(id, cave).unwrap();

        assert_eq!(world.npc(id).unwrap().location, cave);
        assert!(world.room(forest).unwrap().npcs.is_empty());
        assert_eq!(world.room(cave).unwrap().npcs.get("Gandalf"), Some(&id));
    }
}

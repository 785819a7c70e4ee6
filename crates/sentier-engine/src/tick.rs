//! The per-turn NPC wander step.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use sentier_core::{NpcId, RoomId, World, WorldResult};

/// One NPC relocation made during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcMove {
    /// The NPC that moved.
    pub npc: NpcId,
    /// Its name, for reporting.
    pub name: String,
    /// The room it left.
    pub from: RoomId,
    /// The room it entered.
    pub to: RoomId,
}

/// Give every NPC one chance to wander.
///
/// Each NPC independently rolls against `chance`. On success it picks one of
/// its room's exits uniformly at random and walks through it. Locks do not
/// stop NPCs. An NPC in a room without exits stays put.
pub fn npc_tick<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    chance: f64,
) -> WorldResult<Vec<NpcMove>> {
    let mut moves = Vec::new();
    for id in world.npc_ids() {
        if !rng.random_bool(chance) {
            continue;
        }
        let npc = world.npc(id)?;
        let from = npc.location;
        let name = npc.name.clone();
        let exits: Vec<RoomId> = world.room(from)?.exits.open().map(|(_, to)| to).collect();
        let Some(&to) = exits.choose(rng) else {
            continue;
        };
        world.relocate_npc(id, to)?;
        debug!(
            "{name} moved from {} to {}",
            world.room(from)?.name,
            world.room(to)?.name
        );
        moves.push(NpcMove { npc: id, name, from, to });
    }
    Ok(moves)
}

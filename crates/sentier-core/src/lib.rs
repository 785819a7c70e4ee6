//! Core types for Sentier: the world graph, rooms, items, player, NPCs, and quests.
//!
//! This crate holds the data model and its state transitions. It performs no
//! I/O and draws no random numbers; the engine crate drives it turn by turn.

/// Movement directions and their parsing rules.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Items and the name-keyed inventory container.
pub mod item;
/// Non-player characters and their dialogue.
pub mod npc;
/// The player's state: location, inventory, stamina, history.
pub mod player;
/// Quests, objectives, and the quest ledger.
pub mod quest;
/// Rooms and their exits.
pub mod room;
/// The room arena that owns every room and NPC.
pub mod world;

/// Re-export direction types.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Beamer, Inventory, Item, ItemEffect, PlainItem};
/// Re-export NPC types.
pub use npc::{DialogueCycle, Npc, NpcId, QuestDialogue};
/// Re-export player types.
pub use player::{Player, Stamina};
/// Re-export quest types.
pub use quest::{ActionKind, LiveCounters, Objective, Quest, QuestLedger, Reward};
/// Re-export room types.
pub use room::{Exits, Room, RoomId};
/// Re-export the world model.
pub use world::World;

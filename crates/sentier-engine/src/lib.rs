//! Turn engine for Sentier.
//!
//! Parses input lines into commands, checks their parameter counts, runs the
//! action handlers against the world, and lets NPCs wander after every turn
//! that changed something.

/// Action handlers and the standard command set.
pub mod actions;
/// Commands, their parameter contracts, and the command table.
pub mod command;
/// Engine configuration.
pub mod config;
/// Error types.
pub mod error;
/// The game session and its turn loop.
pub mod game;
/// Line input and output abstractions.
pub mod io;
/// NPC wandering.
pub mod tick;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::standard_commands;
pub use command::{Arity, Command, CommandTable, Handler};
pub use config::EngineConfig;
pub use error::{ActionError, ActionResult, EngineError, EngineResult};
pub use game::{Game, Turn, TurnStatus};
pub use io::{LineInput, LineOutput};
pub use tick::{NpcMove, npc_tick};

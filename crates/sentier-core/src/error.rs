use crate::npc::NpcId;
use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while assembling a world.
///
/// These are setup errors: a game that fails to build its world never starts.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// An NPC with the same name already exists.
    #[error("character already exists: \"{0}\"")]
    DuplicateNpc(String),

    /// A quest with the same title is already registered.
    #[error("quest already exists: \"{0}\"")]
    DuplicateQuest(String),

    /// A quest was authored so that it can never complete.
    #[error("quest \"{quest}\" cannot be completed: {reason}")]
    UncompletableQuest {
        /// The quest title.
        quest: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The room ID does not point into the arena.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// The NPC ID does not point into the arena.
    #[error("character not found: {0}")]
    NpcNotFound(NpcId),

    /// A named room could not be resolved.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// The world has no room to start in.
    #[error("world has no starting room")]
    MissingStartRoom,
}

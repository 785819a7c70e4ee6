//! Error types for the engine.

use sentier_core::WorldError;
use thiserror::Error;

use crate::command::Arity;

/// Result of an action handler: the text to show, or why nothing happened.
pub type ActionResult = Result<String, ActionError>;

/// Result type for engine setup and I/O.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a command did not run.
///
/// Every variant is recovered locally: the message is shown, no state
/// changes, and the turn does not advance.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Wrong number of parameters.
    #[error("{}", usage_message(.command, .expected))]
    Usage {
        /// The command word as typed.
        command: String,
        /// The declared parameter contract.
        expected: Arity,
    },

    /// The command word is not in the command table.
    #[error("{}", unknown_message(.word, .suggestion))]
    UnknownCommand {
        /// The command word as typed.
        word: String,
        /// A close command name, if any.
        suggestion: Option<String>,
    },

    /// The direction token could not be parsed.
    #[error("Direction '{0}' inconnue. Utilisez N/E/S/O/U/D (ou nord/est/sud/ouest/haut/bas).")]
    UnknownDirection(String),

    /// No exit in that direction.
    #[error("Aucune porte dans cette direction !")]
    NoExit,

    /// The exit leads into a locked room.
    #[error("La porte vers {0} est verrouillée. Essayez 'unlock <direction>'.")]
    Locked(String),

    /// The exit leads into a room that is not locked.
    #[error("Il n'y a rien à déverrouiller dans cette direction.")]
    NotLocked,

    /// Neither the key nor a lockpick is carried.
    #[error("Il vous faut la clé ou un {0} pour ouvrir cette porte.")]
    NoLockTool(String),

    /// The lock is harder than the player's skill.
    #[error("Cette serrure est trop difficile (difficulté {difficulty}, compétence {skill}).")]
    LockTooHard {
        /// The room's pick difficulty.
        difficulty: u8,
        /// The player's skill.
        skill: u8,
    },

    /// Not enough stamina to move.
    #[error(
        "Vous êtes trop fatigué pour avancer : il faut {needed} d'endurance, vous en avez {available}. \
         Reposez-vous avec 'rest' ou déposez des objets avec 'drop'."
    )]
    Exhausted {
        /// Cost of the move.
        needed: f64,
        /// Current stamina.
        available: f64,
    },

    /// `back` with an empty history.
    #[error("Aucune pièce précédente dans l'historique !")]
    NoHistory,

    /// The item is not in the current room.
    #[error("Il n'y a pas d'objet '{0}' ici.")]
    ItemNotHere(String),

    /// The item is not in the player's inventory.
    #[error("Vous n'avez pas '{0}' dans votre inventaire.")]
    ItemNotCarried(String),

    /// Taking the item would exceed the weight ceiling.
    #[error("'{item}' est trop lourd : vous ne pouvez pas porter plus de {max} kg.")]
    TooHeavy {
        /// The item name.
        item: String,
        /// The player's weight ceiling.
        max: f64,
    },

    /// The item has no use effect.
    #[error("Vous ne pouvez pas utiliser '{0}'.")]
    NotUsable(String),

    /// The item cannot be charged.
    #[error("'{0}' ne peut pas être chargé.")]
    NotChargeable(String),

    /// The device holds no charge.
    #[error("[{0}] : Erreur, l'appareil n'est pas chargé.")]
    NotCharged(String),

    /// No NPC of that name in the current room.
    #[error("Il n'y a personne nommé '{0}' ici.")]
    NpcNotHere(String),

    /// The NPC carries nothing worth stealing.
    #[error("{0} n'a rien sur lui qui vaille la peine d'être volé.")]
    NothingToSteal(String),

    /// The theft roll failed.
    #[error("{0} vous a pris la main dans le sac !")]
    Caught(String),

    /// No quest with that title.
    #[error("Quête '{0}' inconnue. Entrez 'quests' pour voir la liste.")]
    UnknownQuest(String),

    /// The quest is already active or completed.
    #[error("La quête '{0}' est déjà active ou terminée.")]
    QuestNotActivatable(String),

    /// The world graph is inconsistent.
    #[error("erreur interne : {0}")]
    World(#[from] WorldError),
}

impl ActionError {
    /// Whether this is a parameter-count diagnostic.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

fn usage_message(command: &str, expected: &Arity) -> String {
    match expected.count() {
        0 => format!("La commande '{command}' ne prend pas de paramètre."),
        1 => format!("La commande '{command}' prend 1 seul paramètre."),
        n => format!("La commande '{command}' prend {n} paramètres."),
    }
}

fn unknown_message(word: &str, suggestion: &Option<String>) -> String {
    let mut message = format!(
        "Commande '{word}' non reconnue. Entrez 'help' pour voir la liste des commandes disponibles."
    );
    if let Some(name) = suggestion {
        message.push_str(&format!(" Vouliez-vous dire '{name}' ?"));
    }
    message
}

/// Errors that stop a game from starting or running.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world failed validation.
    #[error("invalid world: {0}")]
    World(#[from] WorldError),

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

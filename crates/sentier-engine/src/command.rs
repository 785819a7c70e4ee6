//! The command table and the parameter-count contract.

use std::collections::HashMap;
use std::fmt;

use strsim::levenshtein;

use crate::error::{ActionError, ActionResult};
use crate::game::Game;

/// Maximum edit distance for suggesting a command name.
const SUGGESTION_DISTANCE: usize = 2;

/// A command handler. Receives the game and the parameters after the command word.
pub type Handler = fn(&mut Game, &[&str]) -> ActionResult;

/// How many parameters a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// At least this many. The parameters form a free-text name.
    AtLeast(usize),
}

impl Arity {
    /// The declared parameter count.
    pub fn count(&self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) => *n,
        }
    }

    /// Check the parameters of `command`.
    pub fn check(&self, command: &str, params: &[&str]) -> Result<(), ActionError> {
        let ok = match self {
            Self::Exact(n) => params.len() == *n,
            Self::AtLeast(n) => params.len() >= *n,
        };
        if ok {
            Ok(())
        } else {
            Err(ActionError::Usage {
                command: command.to_string(),
                expected: *self,
            })
        }
    }
}

/// A named command bound to a handler.
#[derive(Clone)]
pub struct Command {
    /// The command word.
    pub name: String,
    /// Help text shown after the name, e.g. `" <direction> : se déplacer"`.
    pub help: String,
    /// Parameter contract.
    pub arity: Arity,
    /// What the command does.
    pub handler: Handler,
    /// Whether success advances the world by one turn.
    pub advances_turn: bool,
}

impl Command {
    /// Create a command that advances the turn on success.
    pub fn new(name: impl Into<String>, help: impl Into<String>, arity: Arity, handler: Handler) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            arity,
            handler,
            advances_turn: true,
        }
    }

    /// Make the command free: success does not advance the turn.
    pub fn without_turn(mut self) -> Self {
        self.advances_turn = false;
        self
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("advances_turn", &self.advances_turn)
            .finish()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.help)
    }
}

/// Commands by name, kept in registration order for `help`.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<Command>,
    by_name: HashMap<String, usize>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any command of the same name.
    ///
    /// Returns the replaced command.
    pub fn register(&mut self, command: Command) -> Option<Command> {
        match self.by_name.get(&command.name) {
            Some(&index) => Some(std::mem::replace(&mut self.commands[index], command)),
            None => {
                self.by_name.insert(command.name.clone(), self.commands.len());
                self.commands.push(command);
                None
            }
        }
    }

    /// Look a command up by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.by_name.get(name).map(|&i| &self.commands[i])
    }

    /// Iterate over commands in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The closest command name to `word`, if one is near enough.
    pub fn suggest(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        self.commands
            .iter()
            .map(|c| (levenshtein(&word, &c.name), c.name.as_str()))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_game: &mut Game, _params: &[&str]) -> ActionResult {
        Ok(String::new())
    }

    fn table() -> CommandTable {
        let mut table = CommandTable::new();
        table.register(Command::new("look", " : regarder", Arity::Exact(0), noop));
        table.register(Command::new("take", " <objet> : prendre", Arity::AtLeast(1), noop));
        table.register(Command::new("talk", " <pnj> : parler", Arity::AtLeast(1), noop).without_turn());
        table
    }

    #[test]
    fn exact_arity() {
        let arity = Arity::Exact(0);
        assert!(arity.check("look", &[]).is_ok());
        let err = arity.check("look", &["N"]).unwrap_err();
        assert_eq!(err.to_string(), "La commande 'look' ne prend pas de paramètre.");

        let arity = Arity::Exact(1);
        assert!(arity.check("go", &["N"]).is_ok());
        assert!(arity.check("go", &[]).is_err());
        assert!(arity.check("go", &["N", "E"]).is_err());
    }

    #[test]
    fn at_least_arity() {
        let arity = Arity::AtLeast(1);
        assert!(arity.check("take", &["kit", "de", "crochetage"]).is_ok());
        let err = arity.check("take", &[]).unwrap_err();
        assert_eq!(err.to_string(), "La commande 'take' prend 1 seul paramètre.");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = table();
        assert!(table.get("look").is_some());
        assert!(table.get("Look").is_none());
        assert!(table.get("LOOK").is_none());
    }

    #[test]
    fn registration_order_and_replacement() {
        let mut table = table();
        let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["look", "take", "talk"]);

        let old = table.register(Command::new("look", " : autre", Arity::Exact(0), noop));
        assert!(old.is_some());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("look").unwrap().help, " : autre");
    }

    #[test]
    fn talk_does_not_advance() {
        let table = table();
        assert!(!table.get("talk").unwrap().advances_turn);
        assert!(table.get("take").unwrap().advances_turn);
    }

    #[test]
    fn suggestions() {
        let table = table();
        assert_eq!(table.suggest("tak"), Some("take"));
        assert_eq!(table.suggest("LOOK"), Some("look"));
        assert_eq!(table.suggest("dance"), None);
    }

    #[test]
    fn display_joins_name_and_help() {
        let table = table();
        assert_eq!(table.get("take").unwrap().to_string(), "take <objet> : prendre");
    }
}

//! Action handlers.
//!
//! Each handler receives the game and the parameters that follow the command
//! word, already checked against the command's arity. A handler either
//! commits all of its changes and returns the text to show, or returns an
//! [`ActionError`](crate::error::ActionError) having changed nothing.

mod dialogue;
mod inventory;
mod items;
mod movement;
mod quests;
mod system;

use crate::command::{Arity, Command};

/// The standard command set, in the order `help` lists it.
pub fn standard_commands() -> Vec<Command> {
    vec![
        Command::new("help", " : afficher cette aide", Arity::Exact(0), system::help),
        Command::new("quit", " : quitter le jeu", Arity::Exact(0), system::quit),
        Command::new(
            "go",
            " <direction> : se déplacer (N, E, S, O, U, D)",
            Arity::Exact(1),
            movement::go,
        ),
        Command::new(
            "back",
            " : revenir à la pièce précédente visitée",
            Arity::Exact(0),
            movement::back,
        ),
        Command::new(
            "look",
            " : regarder autour de soi dans la pièce actuelle",
            Arity::Exact(0),
            inventory::look,
        ),
        Command::new(
            "check",
            " : afficher l'inventaire du joueur",
            Arity::Exact(0),
            inventory::check,
        ),
        Command::new(
            "take",
            " <nom_objet> : prendre un objet dans la pièce actuelle",
            Arity::AtLeast(1),
            inventory::take,
        ),
        Command::new(
            "drop",
            " <nom_objet> : déposer un objet dans la pièce actuelle",
            Arity::AtLeast(1),
            inventory::drop,
        ),
        Command::new(
            "use",
            " <nom_objet> : utiliser un objet de l'inventaire",
            Arity::AtLeast(1),
            items::use_item,
        ),
        Command::new(
            "charge",
            " <objet> : charger un objet magique",
            Arity::AtLeast(1),
            items::charge,
        ),
        Command::new(
            "talk",
            " <nom_pnj> : parler à un personnage",
            Arity::AtLeast(1),
            dialogue::talk,
        )
        .without_turn(),
        Command::new(
            "steal",
            " <nom_pnj> : tenter de voler un personnage",
            Arity::AtLeast(1),
            dialogue::steal,
        ),
        Command::new(
            "unlock",
            " <direction> : déverrouiller une porte",
            Arity::Exact(1),
            movement::unlock,
        ),
        Command::new(
            "rest",
            " : se reposer pour récupérer de l'endurance",
            Arity::Exact(0),
            movement::rest,
        ),
        Command::new("quests", " : afficher la liste des quêtes", Arity::Exact(0), quests::quests),
        Command::new("quest", " <titre> : détails d'une quête", Arity::AtLeast(1), quests::quest),
        Command::new("activate", " <titre> : activer une quête", Arity::AtLeast(1), quests::activate),
        Command::new("rewards", " : afficher vos récompenses", Arity::Exact(0), quests::rewards),
    ]
}

/// Join free-text parameters back into a name.
fn joined(params: &[&str]) -> String {
    params.join(" ")
}

/// The single parameter of an exact-one command.
fn first<'a>(params: &[&'a str]) -> &'a str {
    params.first().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_every_command() {
        let names: Vec<String> = standard_commands().into_iter().map(|c| c.name).collect();
        for expected in [
            "help", "quit", "go", "back", "look", "check", "take", "drop", "use", "charge", "talk",
            "steal", "unlock", "rest", "quests", "quest", "activate", "rewards",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn only_talk_is_free() {
        for command in standard_commands() {
            assert_eq!(command.advances_turn, command.name != "talk", "{}", command.name);
        }
    }

    #[test]
    fn names_are_rejoined() {
        assert_eq!(joined(&["kit", "de", "crochetage"]), "kit de crochetage");
        assert_eq!(first(&[]), "");
    }
}

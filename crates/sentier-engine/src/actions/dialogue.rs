use log::{debug, warn};
use rand::Rng;
use sentier_core::{ActionKind, NpcId};

use super::joined;
use super::quests::{record_action, sync_counters};
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

fn npc_here(game: &Game, wanted: &str) -> Result<NpcId, ActionError> {
    game.world
        .npc_in_room(game.player.location, wanted)
        .ok_or_else(|| ActionError::NpcNotHere(wanted.to_string()))
}

fn say(name: &str, line: &str) -> String {
    format!("\n{name} : {line}\n")
}

/// Talk to an NPC in the current room.
///
/// An NPC with a quest line speaks it until that quest is completed:
/// the trigger line (which activates the quest) while the quest is inactive,
/// the pending line while the player lacks the quest item, and the resolved
/// line once the item is carried. Otherwise the NPC speaks the next line of
/// its cycle.
pub(super) fn talk(game: &mut Game, params: &[&str]) -> ActionResult {
    let id = npc_here(game, &joined(params))?;
    let npc = game.world.npc(id)?;
    let name = npc.name.clone();

    if let Some(line) = npc.quest_line.clone() {
        let quests = &game.player.quests;
        if !quests.is_completed(&line.quest) {
            if !quests.is_active(&line.quest) {
                let mut output = say(&name, &line.trigger_line);
                if game.player.quests.activate_quest(&line.quest) {
                    output.push_str(&format!("\nNouvelle quête : {}\n", line.quest));
                    output.push_str(&sync_counters(game));
                } else {
                    warn!("{name} refers to unknown quest '{}'", line.quest);
                }
                return Ok(output);
            }
            if game.player.inventory.contains(&line.item) {
                let mut output = say(&name, &line.resolved_line);
                output.push_str(&record_action(game, ActionKind::Talk, &name));
                return Ok(output);
            }
            return Ok(say(&name, &line.pending_line));
        }
    }

    let spoken = game
        .world
        .npc_mut(id)?
        .dialogue
        .next_line()
        .unwrap_or_else(|| format!("{name} n'a rien à dire."));
    let mut output = say(&name, &spoken);
    output.push_str(&record_action(game, ActionKind::Talk, &name));
    Ok(output)
}

/// Try to empty an NPC's purse. Success chance grows with skill.
pub(super) fn steal(game: &mut Game, params: &[&str]) -> ActionResult {
    let id = npc_here(game, &joined(params))?;
    let npc = game.world.npc(id)?;
    let name = npc.name.clone();
    let purse = npc.purse;
    if purse == 0 {
        return Err(ActionError::NothingToSteal(name));
    }

    let chance = (0.3 + 0.1 * f64::from(game.player.skill)).min(0.95);
    if !game.rng.random_bool(chance) {
        debug!("theft from {name} failed (chance {chance})");
        return Err(ActionError::Caught(name));
    }

    game.world.npc_mut(id)?.purse = 0;
    game.player.coins = game.player.coins.saturating_add(purse);
    Ok(format!(
        "\nVous dérobez {purse} pièces à {name}. Vous en avez maintenant {}.\n",
        game.player.coins
    ))
}

#[cfg(test)]
mod tests {
    use crate::error::ActionError;
    use crate::test_support::{FixedRng, game, play};

    #[test]
    fn generic_dialogue_cycles() {
        let mut game = game();
        play(&mut game, &["go S"]);
        let lines: Vec<String> = (0..3)
            .map(|_| game.process_line("talk Gandalf").text())
            .collect();
        assert_eq!(lines[0], "\nGandalf : Je suis Gandalf\n");
        assert_eq!(lines[1], "\nGandalf : Abracadabra !\n");
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn lookup_is_case_insensitive_and_local() {
        let mut game = game();
        let turn = game.process_line("talk gandalf");
        assert!(matches!(turn.error(), Some(ActionError::NpcNotHere(n)) if n == "gandalf"));
        play(&mut game, &["go S"]);
        let turn = game.process_line("talk GANDALF");
        assert!(turn.is_success());
    }

    #[test]
    fn quest_line_progression() {
        let mut game = game();
        play(&mut game, &["go S", "go D"]);

        let turn = game.process_line("talk bilbo");
        assert!(turn.text().contains("J'ai perdu mon anneau"));
        assert!(turn.text().contains("Nouvelle quête : L'anneau"));
        assert!(game.player().quests.is_active("L'anneau"));

        let turn = game.process_line("talk bilbo");
        assert_eq!(turn.text(), "\nBilbo : Avez-vous retrouvé mon anneau ?\n");
        let turn = game.process_line("talk bilbo");
        assert_eq!(turn.text(), "\nBilbo : Avez-vous retrouvé mon anneau ?\n");

        play(
            &mut game,
            &[
                "take clé dorée",
                "go U",
                "unlock E",
                "go E",
                "take anneau",
                "go O",
                "go D",
            ],
        );
        let turn = game.process_line("talk bilbo");
        assert!(turn.text().contains("Mon précieux !"));
        assert!(turn.text().contains("Amitié de Bilbo"));
        assert!(game.player().quests.is_completed("L'anneau"));
        assert_eq!(game.player().coins, 20);

        // The override never touched the cycle, which starts from the top.
        let turn = game.process_line("talk bilbo");
        assert_eq!(turn.text(), "\nBilbo : Quelle belle journée.\n");
        let turn = game.process_line("talk bilbo");
        assert_eq!(turn.text(), "\nBilbo : Un second petit-déjeuner ?\n");
        let turn = game.process_line("talk bilbo");
        assert_eq!(turn.text(), "\nBilbo : Quelle belle journée.\n");
    }

    #[test]
    fn steal_success_takes_the_purse() {
        let mut game = game().with_rng(FixedRng(0));
        play(&mut game, &["go S"]);
        let turn = game.process_line("steal gandalf");
        assert!(turn.text().contains("Vous dérobez 10 pièces à Gandalf"));
        assert_eq!(game.player().coins, 10);

        let turn = game.process_line("steal gandalf");
        assert!(matches!(turn.error(), Some(ActionError::NothingToSteal(_))));
    }

    #[test]
    fn steal_failure_changes_nothing() {
        let mut game = game().with_rng(FixedRng(u64::MAX));
        play(&mut game, &["go S"]);
        let before = game.turn();
        let turn = game.process_line("steal gandalf");
        assert!(matches!(turn.error(), Some(ActionError::Caught(n)) if n == "Gandalf"));
        assert_eq!(game.player().coins, 0);
        assert_eq!(game.turn(), before);
    }

    #[test]
    fn steal_needs_a_target() {
        let mut game = game();
        let turn = game.process_line("steal personne");
        assert!(matches!(turn.error(), Some(ActionError::NpcNotHere(_))));
    }
}

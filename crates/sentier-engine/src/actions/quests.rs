use sentier_core::{ActionKind, LiveCounters, Reward};

use super::joined;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

/// Report an action to the quest ledger and hand out any rewards.
pub(crate) fn record_action(game: &mut Game, kind: ActionKind, subject: &str) -> String {
    let rewards = game.player.quests.check_action_objectives(kind, subject);
    grant(game, rewards)
}

/// Bring counter-tracked objectives up to the player's live statistics.
pub(crate) fn sync_counters(game: &mut Game) -> String {
    let moves = game.player.moves;
    let rewards = game
        .player
        .quests
        .check_counter_objectives(ActionKind::Move, moves);
    grant(game, rewards)
}

/// Quest bookkeeping after the player enters a room by any means.
pub(crate) fn record_arrival(game: &mut Game) -> ActionResult {
    let room = game.current_room()?.name.clone();
    let mut output = record_action(game, ActionKind::Visit, &room);
    output.push_str(&sync_counters(game));
    Ok(output)
}

fn grant(game: &mut Game, rewards: Vec<Reward>) -> String {
    let mut output = String::new();
    for reward in rewards {
        output.push_str("\nQuête terminée !");
        if !reward.description.is_empty() {
            output.push_str(&format!(" Récompense : {}", reward.description));
            game.player.grant_reward(reward.description);
        }
        if reward.coins > 0 {
            output.push_str(&format!(" (+{} pièces)", reward.coins));
            game.player.coins = game.player.coins.saturating_add(reward.coins);
        }
        output.push('\n');
    }
    output
}

pub(super) fn quests(game: &mut Game, _params: &[&str]) -> ActionResult {
    Ok(game.player.quests.show_quests())
}

pub(super) fn quest(game: &mut Game, params: &[&str]) -> ActionResult {
    let title = joined(params);
    let live = LiveCounters {
        moves: game.player.moves,
    };
    game.player
        .quests
        .show_quest_details(&title, &live)
        .ok_or(ActionError::UnknownQuest(title))
}

pub(super) fn activate(game: &mut Game, params: &[&str]) -> ActionResult {
    let title = joined(params);
    let quest = game
        .player
        .quests
        .get(&title)
        .ok_or_else(|| ActionError::UnknownQuest(title.clone()))?;
    let display = quest.title.clone();
    if !game.player.quests.activate_quest(&title) {
        return Err(ActionError::QuestNotActivatable(display));
    }
    let mut output = format!("\nQuête '{display}' activée.\n");
    output.push_str(&sync_counters(game));
    Ok(output)
}

pub(super) fn rewards(game: &mut Game, _params: &[&str]) -> ActionResult {
    let player = &game.player;
    if player.rewards.is_empty() && player.coins == 0 {
        return Ok("\nVous n'avez encore aucune récompense.\n".to_string());
    }
    let mut output = String::from("\nVos récompenses :\n");
    for reward in &player.rewards {
        output.push_str(&format!("    - {reward}\n"));
    }
    output.push_str(&format!("Pièces : {}\n", player.coins));
    Ok(output)
}

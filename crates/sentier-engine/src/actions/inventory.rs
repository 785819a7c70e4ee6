use sentier_core::{ActionKind, Item, Stamina};

use super::joined;
use super::quests::record_action;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

pub(super) fn look(game: &mut Game, _params: &[&str]) -> ActionResult {
    Ok(game.current_room()?.look())
}

pub(super) fn check(game: &mut Game, _params: &[&str]) -> ActionResult {
    let player = &game.player;
    let mut output = player.inventory.describe(
        "\nVotre inventaire est vide.",
        "\nVous disposez des items suivants :",
    );
    output.push_str(&format!(
        "Poids : {}/{} kg\nEndurance : {}/{}\nPièces : {}\nCompétence : {}\n",
        player.carried_weight(),
        player.max_weight,
        player.stamina.value(),
        Stamina::MAX,
        player.coins,
        player.skill
    ));
    Ok(output)
}

/// Move an item from the room to the player, by exact name.
pub(super) fn take(game: &mut Game, params: &[&str]) -> ActionResult {
    let name = joined(params);
    let here = game.player.location;

    let weight = game
        .world
        .room(here)?
        .inventory
        .get(&name)
        .map(Item::weight)
        .ok_or_else(|| ActionError::ItemNotHere(name.clone()))?;
    if !game.player.can_carry(weight) {
        return Err(ActionError::TooHeavy {
            item: name,
            max: game.player.max_weight,
        });
    }

    let item = game
        .world
        .room_mut(here)?
        .inventory
        .remove(&name)
        .ok_or_else(|| ActionError::ItemNotHere(name.clone()))?;
    game.player.inventory.insert(name.clone(), item);

    let mut output = format!("\nVous avez pris '{name}'.\n");
    output.push_str(&record_action(game, ActionKind::Take, &name));
    Ok(output)
}

/// Move an item from the player to the room, by exact name.
pub(super) fn drop(game: &mut Game, params: &[&str]) -> ActionResult {
    let name = joined(params);
    let here = game.player.location;
    game.world.room(here)?;

    let item = game
        .player
        .inventory
        .remove(&name)
        .ok_or_else(|| ActionError::ItemNotCarried(name.clone()))?;
    game.world.room_mut(here)?.inventory.insert(name.clone(), item);

    let mut output = format!("\nVous avez déposé '{name}' dans la pièce.\n");
    output.push_str(&record_action(game, ActionKind::Drop, &name));
    Ok(output)
}

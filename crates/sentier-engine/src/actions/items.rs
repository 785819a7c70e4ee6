use log::debug;
use sentier_core::{ActionKind, Item, ItemEffect, RoomId, Stamina};

use super::joined;
use super::quests::{record_action, record_arrival};
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

/// What using a carried item will do.
enum Usage {
    Restore(f64),
    Teleport(Option<RoomId>),
    Inert,
}

pub(super) fn use_item(game: &mut Game, params: &[&str]) -> ActionResult {
    let name = joined(params);
    let usage = match game.player.inventory.get(&name) {
        None => return Err(ActionError::ItemNotCarried(name)),
        Some(Item::Plain(item)) => match item.effect {
            Some(ItemEffect::RestoreStamina(amount)) => Usage::Restore(amount),
            None => Usage::Inert,
        },
        Some(Item::Device(beamer)) => Usage::Teleport(beamer.saved_room),
    };

    match usage {
        Usage::Inert => Err(ActionError::NotUsable(name)),
        Usage::Restore(amount) => {
            game.player.inventory.remove(&name);
            game.player.stamina.restore(amount);
            let mut output = format!(
                "\nVous utilisez '{name}'. Endurance : {}/{}\n",
                game.player.stamina.value(),
                Stamina::MAX
            );
            output.push_str(&record_action(game, ActionKind::Use, &name));
            Ok(output)
        }
        Usage::Teleport(None) => Err(ActionError::NotCharged(name)),
        Usage::Teleport(Some(target)) => {
            let destination = game.world.room(target)?.name.clone();
            if let Some(Item::Device(beamer)) = game.player.inventory.get_mut(&name) {
                beamer.discharge();
            }
            game.player.enter(target);
            debug!("teleported to {destination}");

            let mut output = format!("\n[{name}] : Téléportation vers {destination}.\n");
            output.push_str(&game.current_room()?.long_description());
            output.push_str(&record_action(game, ActionKind::Use, &name));
            output.push_str(&record_arrival(game)?);
            Ok(output)
        }
    }
}

/// Memorise the current room in a carried device.
pub(super) fn charge(game: &mut Game, params: &[&str]) -> ActionResult {
    let name = joined(params);
    let here = game.player.location;
    let room = game.current_room()?.name.clone();
    match game.player.inventory.get_mut(&name) {
        None => Err(ActionError::ItemNotCarried(name)),
        Some(Item::Plain(_)) => Err(ActionError::NotChargeable(name)),
        Some(Item::Device(beamer)) => {
            beamer.charge(here);
            Ok(format!("\n[{name}] : Pièce '{room}' mémorisée.\n"))
        }
    }
}

use log::info;

use crate::error::ActionResult;
use crate::game::Game;

pub(super) fn help(game: &mut Game, _params: &[&str]) -> ActionResult {
    let mut output = String::from("\nVoici les commandes disponibles:\n");
    for command in game.commands.iter() {
        output.push_str(&format!("\t- {command}\n"));
    }
    Ok(output)
}

pub(super) fn quit(game: &mut Game, _params: &[&str]) -> ActionResult {
    game.finished = true;
    info!("player '{}' quit on turn {}", game.player.name, game.turn);
    Ok(format!(
        "\nMerci {} d'avoir joué. Au revoir.\n",
        game.player.name
    ))
}

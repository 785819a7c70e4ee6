use log::debug;
use sentier_core::Direction;

use super::first;
use super::quests::record_arrival;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

fn parse_direction(token: &str) -> Result<Direction, ActionError> {
    Direction::parse(token).ok_or_else(|| ActionError::UnknownDirection(token.to_string()))
}

/// Walk through the exit in the given direction.
///
/// All checks run before anything changes: the move either commits stamina,
/// history, location, and the move count together, or not at all.
pub(super) fn go(game: &mut Game, params: &[&str]) -> ActionResult {
    let direction = parse_direction(first(params))?;
    let target = game
        .world
        .get_exit(game.player.location, direction)
        .ok_or(ActionError::NoExit)?;

    let room = game.world.room(target)?;
    if room.locked {
        return Err(ActionError::Locked(room.name.clone()));
    }

    let cost = game
        .player
        .move_cost(game.config.move_base_cost, game.config.weight_cost_factor);
    let available = game.player.stamina.value();
    if available < cost {
        return Err(ActionError::Exhausted {
            needed: cost,
            available,
        });
    }

    game.player.stamina.spend(cost);
    game.player.enter(target);
    debug!("player moved {direction} to {}, cost {cost}", room_name(game));

    let mut output = game.current_room()?.long_description();
    output.push_str(&record_arrival(game)?);
    Ok(output)
}

/// Return to the previously visited room. Costs no stamina.
pub(super) fn back(game: &mut Game, _params: &[&str]) -> ActionResult {
    game.player.go_back().ok_or(ActionError::NoHistory)?;
    let mut output = game.current_room()?.long_description();
    output.push_str(&record_arrival(game)?);
    Ok(output)
}

pub(super) fn rest(game: &mut Game, _params: &[&str]) -> ActionResult {
    game.player.stamina.restore(game.config.rest_amount);
    Ok(format!(
        "\nVous vous reposez un moment. Endurance : {}/{}\n",
        game.player.stamina.value(),
        sentier_core::Stamina::MAX
    ))
}

/// Open the lock of the room beyond an exit.
///
/// The room's key always works. Without it, the lock-picking item works when
/// the player's skill reaches the lock's difficulty, and picking trains the
/// skill.
pub(super) fn unlock(game: &mut Game, params: &[&str]) -> ActionResult {
    let direction = parse_direction(first(params))?;
    let target = game
        .world
        .get_exit(game.player.location, direction)
        .ok_or(ActionError::NoExit)?;

    let room = game.world.room(target)?;
    if !room.locked {
        return Err(ActionError::NotLocked);
    }
    let name = room.name.clone();
    let difficulty = room.difficulty;
    let key = room
        .key
        .clone()
        .filter(|key| game.player.inventory.contains(key));

    if let Some(key) = key {
        game.world.room_mut(target)?.unlock();
        debug!("{name} unlocked with its key");
        return Ok(format!("\nVous ouvrez la porte vers {name} avec '{key}'.\n"));
    }

    let lockpick = &game.config.lockpick_item;
    if !game.player.inventory.contains(lockpick) {
        return Err(ActionError::NoLockTool(lockpick.clone()));
    }
    if game.player.skill < difficulty {
        return Err(ActionError::LockTooHard {
            difficulty,
            skill: game.player.skill,
        });
    }

    game.world.room_mut(target)?.unlock();
    game.player.train();
    debug!("{name} picked, skill now {}", game.player.skill);
    Ok(format!(
        "\nVous crochetez la serrure vers {name}. Compétence : {}.\n",
        game.player.skill
    ))
}

fn room_name(game: &Game) -> &str {
    game.current_room().map(|r| r.name.as_str()).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use sentier_core::{Direction, Stamina};

    use crate::error::ActionError;
    use crate::test_support::{game, play, room};

    #[test]
    fn missing_exit_leaves_player_in_place() {
        let mut game = game();
        let hall = room(&game, "Hall");
        for dir in ["N", "E", "O", "U", "D"] {
            let turn = game.process_line(&format!("go {dir}"));
            assert!(matches!(turn.error(), Some(ActionError::NoExit)));
            assert_eq!(
                turn.error().unwrap().to_string(),
                "Aucune porte dans cette direction !"
            );
            assert_eq!(game.player().location, hall);
        }
        assert!((game.player().stamina.value() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn every_missing_exit_fails_everywhere() {
        let mut game = game();
        for name in ["Hall", "Garden", "Cellar"] {
            let id = room(&game, name);
            game.player_mut().location = id;
            for dir in Direction::ALL {
                if game.world().get_exit(id, dir).is_none() {
                    let turn = game.process_line(&format!("go {}", dir.code()));
                    assert!(!turn.is_success());
                    assert_eq!(game.player().location, id);
                }
            }
        }
    }

    #[test]
    fn go_costs_stamina_and_records_history() {
        let mut game = game();
        let hall = room(&game, "Hall");
        let turn = game.process_line("go S");
        assert!(turn.text().contains("Vous êtes dans un jardin fleuri."));
        assert_eq!(game.player().location, room(&game, "Garden"));
        assert!((game.player().stamina.value() - 90.0).abs() < f64::EPSILON);
        assert_eq!(game.player().history, vec![hall]);
        assert_eq!(game.player().moves, 1);
    }

    #[test]
    fn directions_are_case_insensitive() {
        let mut game = game();
        play(&mut game, &["go sud", "go NORD", "go s"]);
        assert_eq!(game.player().location, room(&game, "Garden"));
    }

    #[test]
    fn unknown_direction() {
        let mut game = game();
        let turn = game.process_line("go partout");
        assert!(matches!(turn.error(), Some(ActionError::UnknownDirection(d)) if d == "partout"));
    }

    #[test]
    fn carried_weight_raises_cost() {
        let mut game = game();
        play(&mut game, &["take kit de crochetage", "take potion", "go S"]);
        // 10 + 2 × 0.6
        assert!((game.player().stamina.value() - 88.8).abs() < 1e-9);
    }

    #[test]
    fn exhausted_player_cannot_move() {
        let mut game = game();
        game.player_mut().stamina = Stamina::new(9.5);
        let hall = room(&game, "Hall");
        let turn = game.process_line("go S");
        assert!(matches!(turn.error(), Some(ActionError::Exhausted { .. })));
        assert!(turn.error().unwrap().to_string().contains("'rest'"));
        assert_eq!(game.player().location, hall);
        assert!((game.player().stamina.value() - 9.5).abs() < f64::EPSILON);
        assert!(game.player().history.is_empty());
    }

    #[test]
    fn rest_restores_and_clamps() {
        let mut game = game();
        game.player_mut().stamina = Stamina::new(5.0);
        play(&mut game, &["rest"]);
        assert!((game.player().stamina.value() - 35.0).abs() < f64::EPSILON);
        for _ in 0..5 {
            play(&mut game, &["rest"]);
        }
        assert!((game.player().stamina.value() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn back_returns_without_cost() {
        let mut game = game();
        play(&mut game, &["go S"]);
        let turn = game.process_line("back");
        assert!(turn.text().contains("Vous êtes dans un grand hall d'entrée."));
        assert_eq!(game.player().location, room(&game, "Hall"));
        assert!((game.player().stamina.value() - 90.0).abs() < f64::EPSILON);
        assert_eq!(game.player().moves, 2);
    }

    #[test]
    fn back_with_empty_history_fails() {
        let mut game = game();
        let turn = game.process_line("back");
        assert!(matches!(turn.error(), Some(ActionError::NoHistory)));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn locked_room_blocks_movement() {
        let mut game = game();
        play(&mut game, &["go S"]);
        let turn = game.process_line("go E");
        assert!(matches!(turn.error(), Some(ActionError::Locked(name)) if name == "Vault"));
        assert!(turn.error().unwrap().to_string().contains("unlock"));
        assert_eq!(game.player().location, room(&game, "Garden"));
    }

    #[test]
    fn unlock_needs_a_tool() {
        let mut game = game();
        play(&mut game, &["go S"]);
        let turn = game.process_line("unlock E");
        assert!(matches!(turn.error(), Some(ActionError::NoLockTool(_))));
        let turn = game.process_line("unlock N");
        assert!(matches!(turn.error(), Some(ActionError::NotLocked)));
        let turn = game.process_line("unlock O");
        assert!(matches!(turn.error(), Some(ActionError::NoExit)));
    }

    #[test]
    fn lockpick_needs_skill() {
        let mut game = game();
        play(&mut game, &["take kit de crochetage", "go S"]);
        let turn = game.process_line("unlock E");
        assert!(matches!(
            turn.error(),
            Some(ActionError::LockTooHard { difficulty: 2, skill: 1 })
        ));
        assert!(game.world().room(room(&game, "Vault")).unwrap().locked);
    }

    #[test]
    fn lockpick_opens_and_trains() {
        let mut game = game();
        game.player_mut().skill = 2;
        play(&mut game, &["take kit de crochetage", "go S", "unlock est", "go E"]);
        assert_eq!(game.player().skill, 3);
        assert_eq!(game.player().location, room(&game, "Vault"));
    }

    #[test]
    fn key_always_opens() {
        let mut game = game();
        play(&mut game, &["go S", "go D", "take clé dorée", "go U"]);
        let turn = game.process_line("unlock E");
        assert!(turn.text().contains("avec 'clé dorée'"));
        assert_eq!(game.player().skill, 1);
        play(&mut game, &["go E"]);
        assert_eq!(game.player().location, room(&game, "Vault"));
    }
}

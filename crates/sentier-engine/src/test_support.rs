//! A small world shared by the engine's unit tests.
//!
//! ```text
//!   Hall ──S/N── Garden ──E/O── Vault (locked, difficulty 2, key "clé dorée")
//!                  │
//!                 D/U
//!                  │
//!                Cellar
//! ```

use rand::RngCore;
use sentier_core::{
    ActionKind, Beamer, Direction, Item, ItemEffect, Npc, Objective, PlainItem, Player, Quest,
    QuestDialogue, Reward, Room, RoomId, World,
};

use crate::config::EngineConfig;
use crate::game::Game;

/// An RNG that returns the same word forever.
///
/// All zeros makes every roll succeed and every choice pick the first option.
/// All ones makes every roll below certainty fail.
pub(crate) struct FixedRng(pub(crate) u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = self.0.to_le_bytes()[i % 8];
        }
    }
}

pub(crate) fn world() -> (World, RoomId) {
    let mut world = World::new();

    let mut hall = Room::new("Hall", "un grand hall d'entrée.");
    hall.inventory.insert(
        "kit de crochetage",
        Item::Plain(PlainItem::new("ouvre bien des serrures", 0.1)),
    );
    hall.inventory.insert(
        "potion",
        Item::Plain(
            PlainItem::new("Accroît l'endurance", 0.5).with_effect(ItemEffect::RestoreStamina(30.0)),
        ),
    );
    hall.inventory
        .insert("enclume", Item::Plain(PlainItem::new("une enclume en fonte", 6.0)));
    let hall = world.add_room(hall).unwrap();

    let mut garden = Room::new("Garden", "un jardin fleuri.");
    garden.inventory.insert("beamer", Item::Device(Beamer::new()));
    let garden = world.add_room(garden).unwrap();

    let mut vault = Room::new("Vault", "une chambre forte.")
        .with_lock(2)
        .with_key("clé dorée");
    vault
        .inventory
        .insert("anneau", Item::Plain(PlainItem::new("un anneau d'or", 0.1)));
    let vault = world.add_room(vault).unwrap();

    let mut cellar = Room::new("Cellar", "une cave humide.");
    cellar
        .inventory
        .insert("clé dorée", Item::Plain(PlainItem::new("une petite clé", 0.1)));
    let cellar = world.add_room(cellar).unwrap();

    world
        .connect_both(hall, Direction::South, garden, Direction::North)
        .unwrap();
    world
        .connect_both(garden, Direction::East, vault, Direction::West)
        .unwrap();
    world
        .connect_both(garden, Direction::Down, cellar, Direction::Up)
        .unwrap();

    world
        .add_npc(
            Npc::new(
                "Gandalf",
                "un magicien blanc",
                garden,
                ["Je suis Gandalf", "Abracadabra !"],
            )
            .with_purse(10),
        )
        .unwrap();
    world
        .add_npc(
            Npc::new(
                "Bilbo",
                "un hobbit",
                cellar,
                ["Quelle belle journée.", "Un second petit-déjeuner ?"],
            )
            .with_quest_line(QuestDialogue {
                quest: "L'anneau".to_string(),
                item: "anneau".to_string(),
                trigger_line: "J'ai perdu mon anneau dans la chambre forte.".to_string(),
                pending_line: "Avez-vous retrouvé mon anneau ?".to_string(),
                resolved_line: "Mon précieux ! Merci mille fois.".to_string(),
            }),
        )
        .unwrap();

    (world, hall)
}

pub(crate) fn player(start: RoomId) -> Player {
    let mut player = Player::new("Alice", start);
    player
        .quests
        .add_quest(
            Quest::new("Crocheteur", "Trouver un kit de crochetage")
                .with_objective(Objective::new(
                    "Prendre le kit",
                    ActionKind::Take,
                    Some("kit de crochetage"),
                    1,
                ))
                .with_reward(Reward::new("Badge du crocheteur", 5)),
        )
        .unwrap();
    player
        .quests
        .add_quest(
            Quest::new("Voyageur", "Se déplacer deux fois")
                .with_objective(Objective::new("Se déplacer", ActionKind::Move, None, 2))
                .with_reward(Reward::new("Bottes de marche", 0)),
        )
        .unwrap();
    player
        .quests
        .add_quest(
            Quest::new("L'anneau", "Rendre son anneau à Bilbo")
                .with_objective(Objective::new(
                    "Parler à Bilbo avec l'anneau",
                    ActionKind::Talk,
                    Some("Bilbo"),
                    1,
                ))
                .with_reward(Reward::new("Amitié de Bilbo", 20)),
        )
        .unwrap();
    player
}

pub(crate) fn config() -> EngineConfig {
    EngineConfig::default()
        .with_seed(1)
        .with_npc_move_chance(0.0)
}

pub(crate) fn game_with(config: EngineConfig) -> Game {
    let (world, start) = world();
    Game::new(world, player(start), config).unwrap()
}

pub(crate) fn game() -> Game {
    game_with(config())
}

pub(crate) fn room(game: &Game, name: &str) -> RoomId {
    game.world().find_room(name).unwrap()
}

/// Run each line and assert it succeeds.
pub(crate) fn play(game: &mut Game, lines: &[&str]) {
    for line in lines {
        let turn = game.process_line(line);
        assert!(turn.is_success(), "'{line}' failed: {:?}", turn.error());
    }
}

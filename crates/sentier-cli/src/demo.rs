//! The built-in adventure: eight rooms around a swamp, a wandering wizard,
//! and four quests.

use sentier_core::{
    ActionKind, Beamer, Direction, Item, ItemEffect, Npc, Objective, PlainItem, Player, Quest,
    QuestDialogue, Reward, Room, RoomId, World, WorldResult,
};

/// The item that picks locks in this world. Matches the engine's default
/// `lockpick_item`, so a config file that leaves the key out keeps it working.
pub const LOCKPICK: &str = "kit de crochetage";

/// Build the demo world. Returns it with the starting room.
pub fn world() -> WorldResult<(World, RoomId)> {
    use Direction::{Down, East, North, South, Up, West};

    let mut world = World::new();

    let mut forest = Room::new(
        "Forest",
        "une forêt enchantée. Vous entendez une brise légère à travers la cime des arbres.",
    );
    forest.inventory.insert(
        "Décoction de souci",
        Item::Plain(
            PlainItem::new("Guérit de 60PV en une minute", 0.5)
                .with_effect(ItemEffect::RestoreStamina(60.0)),
        ),
    );
    forest.inventory.insert(
        "Potion de sang de chevreuil",
        Item::Plain(
            PlainItem::new("Accroît l'endurance et sa régénération", 0.3)
                .with_effect(ItemEffect::RestoreStamina(40.0)),
        ),
    );
    let forest = world.add_room(forest)?;

    let tower = world.add_room(Room::new(
        "Tower",
        "une immense tour en pierre qui s'élève au dessus des nuages.",
    ))?;

    let mut cave = Room::new(
        "Cave",
        "une grotte profonde et sombre. Des voix semblent provenir des profondeurs.",
    );
    cave.inventory.insert(
        LOCKPICK,
        Item::Plain(PlainItem::new(
            "vous permettra d'ouvrir tout un tas de coffres et de vous incruster dans des réserves d'équipement ou de nourriture",
            0.1,
        )),
    );
    let cave = world.add_room(cave)?;

    let mut cottage = Room::new(
        "Cottage",
        "un petit chalet pittoresque avec un toit de chaume. Une épaisse fumée verte sort de la cheminée.",
    );
    cottage.inventory.insert(
        "clé du château",
        Item::Plain(PlainItem::new("une lourde clé en fer forgé", 0.2)),
    );
    let cottage = world.add_room(cottage)?;

    let swamp = world.add_room(Room::new(
        "Swamp",
        "un marécage sombre et ténébreux. L'eau bouillonne, les abords sont vaseux.",
    ))?;

    let castle = world.add_room(
        Room::new(
            "Castle",
            "un énorme château fort avec des douves et un pont levis. Sur les tours, des flèches en or massif.",
        )
        .with_lock(5)
        .with_key("clé du château"),
    )?;

    let mut basement = Room::new(
        "Sous_sol",
        "un sous-sol humide et sombre. Une odeur inquiétante flotte dans l'air.",
    )
    .with_lock(1);
    basement.inventory.insert(
        "bâton de sorcier",
        Item::Plain(PlainItem::new("un bâton noueux qui crépite d'étincelles", 1.0)),
    );
    let basement = world.add_room(basement)?;

    let mut tower_top = Room::new(
        "Tower-Top",
        "au sommet de la tour, vue à couper le souffle sur le royaume.",
    );
    tower_top
        .inventory
        .insert("beamer", Item::Device(Beamer::new()));
    let tower_top = world.add_room(tower_top)?;

    world.connect(forest, North, cave)?;
    world.connect(forest, South, castle)?;
    world.connect(tower, North, cottage)?;
    world.connect(tower, West, forest)?;
    world.connect(tower, Up, tower_top)?;
    world.connect(cave, East, cottage)?;
    world.connect(cave, South, forest)?;
    world.connect(cottage, South, tower)?;
    world.connect(cottage, West, cave)?;
    world.connect(cottage, Down, basement)?;
    world.connect(swamp, North, tower)?;
    world.connect(swamp, West, castle)?;
    world.connect(castle, North, forest)?;
    world.connect(castle, East, swamp)?;
    world.connect(basement, Up, cottage)?;
    world.connect(tower_top, Down, tower)?;

    world.add_npc(
        Npc::new(
            "Gandalf",
            "un magicien blanc",
            forest,
            ["Je suis Gandalf", "Abracadabra !"],
        )
        .with_purse(12)
        .with_quest_line(QuestDialogue {
            quest: "Le bâton du mage".to_string(),
            item: "bâton de sorcier".to_string(),
            trigger_line: "Mon bâton a disparu ! Je l'ai senti quelque part sous le chalet."
                .to_string(),
            pending_line: "Avez-vous retrouvé mon bâton ? Cherchez sous le chalet.".to_string(),
            resolved_line: "Mon bâton ! Merci, voyageur. Gardez-le, vous en ferez bon usage."
                .to_string(),
        }),
    )?;
    world.add_npc(
        Npc::new(
            "Marchand ambulant",
            "un colporteur à la bourse bien garnie",
            tower,
            ["Des potions, des amulettes !", "Tout doit disparaître !"],
        )
        .with_purse(15),
    )?;

    world.validate()?;
    Ok((world, swamp))
}

/// Create the player with the demo quests registered.
pub fn player(name: &str, start: RoomId) -> WorldResult<Player> {
    let mut player = Player::new(name, start);
    for quest in quests() {
        player.quests.add_quest(quest)?;
    }
    Ok(player)
}

fn quests() -> Vec<Quest> {
    vec![
        Quest::new("Grand Explorateur", "Explorer les recoins du royaume")
            .with_long_description(
                "Visitez la forêt, la grotte et le sommet de la tour pour mériter le titre d'explorateur.",
            )
            .with_objective(Objective::new(
                "Visiter la forêt",
                ActionKind::Visit,
                Some("Forest"),
                1,
            ))
            .with_objective(Objective::new(
                "Visiter la grotte",
                ActionKind::Visit,
                Some("Cave"),
                1,
            ))
            .with_objective(Objective::new(
                "Atteindre le sommet de la tour",
                ActionKind::Visit,
                Some("Tower-Top"),
                1,
            ))
            .with_reward(Reward::new("Titre de Grand Explorateur", 10)),
        Quest::new("Grand Voyageur", "Se déplacer 10 fois")
            .with_objective(Objective::new(
                "Se déplacer",
                ActionKind::Move,
                None,
                10,
            ))
            .with_reward(Reward::new("Bottes de voyageur", 5)),
        Quest::new("Découverte", "Maîtriser un objet étrange")
            .with_long_description("Trouvez le beamer au sommet de la tour et utilisez-le.")
            .with_objective(Objective::new(
                "Prendre le beamer",
                ActionKind::Take,
                Some("beamer"),
                1,
            ))
            .with_objective(Objective::new(
                "Utiliser le beamer",
                ActionKind::Use,
                Some("beamer"),
                1,
            ))
            .with_reward(Reward::new("Médaille du savant", 5)),
        Quest::new("Le bâton du mage", "Rapporter son bâton à Gandalf")
            .with_long_description(
                "Gandalf a perdu son bâton. Il pense qu'il se trouve sous le chalet.",
            )
            .with_objective(Objective::new(
                "Rendre le bâton à Gandalf",
                ActionKind::Talk,
                Some("Gandalf"),
                1,
            ))
            .with_reward(Reward::new("Bénédiction de Gandalf", 25)),
    ]
}

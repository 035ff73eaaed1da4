use paradox_core::{
    Event, Game, GameConfig, GameError, InventoryError, Item, Phase, Position, PuzzleId,
    PuzzleState, config::MIN_CAPACITY,
};

/// Shortest safe route from the default start to the broken loop.
const ROUTE: &[&str] = &[
    "move north",
    "move north",
    "collect research_manual",
    "move south",
    "move south",
    "move east",
    "move east",
    "collect broken_keycard",
    "look broken_keycard",
    "1234",
    "move south",
    "move south",
    "move east",
    "move east",
    "move east",
    "move south",
    "collect power_core",
    "look circuits",
    "power",
    "move north",
    "move north",
    "move north",
    "move north",
    "move north",
    "move west",
    "move west",
    "move west",
    "collect crystal_vial",
    "look recipe_book",
    "thyme",
    "move east",
    "move east",
    "move south",
    "move south",
    "move south",
    "collect strange_flower",
    "look sundial",
    "12:00",
];

fn game_with_capacity(inventory_capacity: usize) -> Game {
    Game::new(&GameConfig {
        inventory_capacity,
        ..GameConfig::default()
    })
}

fn play(game: &mut Game, lines: &[&str]) -> Vec<Event> {
    let mut events = Vec::new();
    for line in lines {
        let turn = game.handle_input(line);
        assert!(
            !turn.iter().any(Event::is_failure),
            "'{line}' failed: {turn:?}"
        );
        events.extend(turn);
    }
    events
}

#[test]
fn test_full_walkthrough_breaks_the_loop() {
    let mut game = Game::new(&GameConfig::default());
    assert_eq!(game.player().position, Position::new(3, 5));

    play(
        &mut game,
        &["move north", "move north", "collect research_manual"],
    );
    assert_eq!(game.current_room().map(|r| r.name), Some("Library"));

    play(
        &mut game,
        &[
            "move south",
            "move south",
            "move east",
            "move east",
            "collect broken_keycard",
            "look broken_keycard",
        ],
    );
    assert_eq!(game.phase(), Phase::Answering(PuzzleId(0)));
    play(&mut game, &["1234"]);
    assert_eq!(game.score(), 10);

    play(
        &mut game,
        &[
            "move south",
            "move south",
            "move east",
            "move east",
            "move east",
            "move south",
            "collect power_core",
            "look circuits",
            "power",
        ],
    );
    assert_eq!(game.chain().state(PuzzleId(1)), PuzzleState::Solved);

    play(
        &mut game,
        &[
            "move north",
            "move north",
            "move north",
            "move north",
            "move north",
            "move west",
            "move west",
            "move west",
            "collect crystal_vial",
            "look recipe_book",
            "Thyme",
        ],
    );
    assert_eq!(game.current_room().map(|r| r.name), Some("Kitchen"));
    assert!(!game.is_won());

    let events = play(
        &mut game,
        &[
            "move east",
            "move east",
            "move south",
            "move south",
            "move south",
            "collect strange_flower",
            "look sundial",
            "12:00",
        ],
    );
    assert_eq!(events.last(), Some(&Event::Victory { score: 40 }));

    assert!(game.is_won());
    assert!(game.is_over());
    assert_eq!(game.score(), 40);
    for item in [
        Item::RepairedKeycard,
        Item::PowerModule,
        Item::TemporalEssence,
        Item::TimeShard,
    ] {
        assert!(game.inventory().contains(item));
    }
    assert!(game.handle_input("move north").is_empty());
    assert_eq!(game.current_room().map(|r| r.name), Some("Garden"));
}

#[test]
fn test_every_gated_room_traps_until_solved() {
    let gated = [
        (5, 5, "broken_keycard"),
        (8, 8, "circuits"),
        (5, 3, "recipe_book"),
        (7, 6, "sundial"),
    ];
    for (x, y, trigger) in gated {
        let mut game = Game::new(&GameConfig {
            start: Position::new(x, y),
            ..GameConfig::default()
        });
        for direction in ["north", "south", "east", "west"] {
            let events = game.handle_input(&format!("move {direction}"));
            assert!(events[0].is_failure());
            assert_eq!(game.player().position, Position::new(x, y));
        }
        let events = game.handle_input(&format!("look {trigger}"));
        assert!(events.iter().any(Event::is_failure));
        assert_eq!(game.phase(), Phase::Exploring);
    }
}

#[test]
fn test_config_file_changes_start_and_capacity() {
    let config =
        GameConfig::from_toml_str("inventory_capacity = 5\n[start]\nx = 3\ny = 3\n").unwrap();
    let mut game = Game::new(&config);
    assert_eq!(game.inventory().capacity(), 5);
    assert!(matches!(
        game.opening(false).last(),
        Some(Event::Room(view)) if view.name == "Library"
    ));
    play(&mut game, &["collect research_manual", "hint"]);
}

#[test]
fn test_smallest_allowed_inventory_still_wins() {
    let mut game = game_with_capacity(MIN_CAPACITY);
    play(&mut game, ROUTE);
    assert!(game.is_won());
    assert!(game.inventory().is_full());
}

#[test]
fn test_one_slot_short_strands_player_in_garden() {
    let mut game = game_with_capacity(MIN_CAPACITY - 1);
    let failures: Vec<GameError> = ROUTE
        .iter()
        .flat_map(|line| game.handle_input(line))
        .filter_map(|event| match event {
            Event::Failed(err) => Some(err),
            _ => None,
        })
        .collect();

    assert!(failures.contains(&GameError::Inventory(InventoryError::Full {
        capacity: MIN_CAPACITY - 1,
    })));
    assert!(!game.is_won());
    assert_eq!(game.current_room().map(|r| r.name), Some("Garden"));
    assert!(game.handle_input("move north")[0].is_failure());
}

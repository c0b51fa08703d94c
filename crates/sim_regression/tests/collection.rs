use core_game::{
    Actor, GameEvent, Item, Player, Position, ScriptedMoves, Stationary, TurnEngine,
};

fn hero() -> Player {
    Player::new("Hero", Position::default(), 100).unwrap()
}

#[test]
fn item_at_start_is_collected_on_turn_one() {
    let gold = Item::new("Gold", Position::default(), 50).unwrap();
    let mut engine = TurnEngine::new(hero(), Vec::new(), vec![gold]);
    engine.step(&mut Stationary);
    assert_eq!(50, engine.player().score());
    assert!(engine.items().is_empty());
}

#[test]
fn returning_to_a_collected_cell_does_not_collect_again() {
    let gold = Item::new("Gold", Position::default(), 50).unwrap();
    let mut engine = TurnEngine::new(hero(), Vec::new(), vec![gold])
        .with_turn_budget(4)
        .unwrap();
    // Away and back, twice.
    let mut moves = ScriptedMoves::new([(1, 0), (-1, 0), (1, 0), (-1, 0)]);
    engine.run(&mut moves);

    let collections = engine
        .log()
        .events()
        .iter()
        .filter(|event| matches!(event, GameEvent::Collected { .. }))
        .count();
    assert_eq!(1, collections);
    assert_eq!(50, engine.player().score());
    assert_eq!(Position::default(), engine.player().position());
}

#[test]
fn items_are_picked_up_after_moving_onto_them() {
    let items = vec![
        Item::new("Gold", Position::new(1, 0), 50).unwrap(),
        Item::new("Health Potion", Position::new(0, 1), 0).unwrap(),
    ];
    let mut engine = TurnEngine::new(hero(), Vec::new(), items);
    let mut moves = ScriptedMoves::new([(1, 0), (-1, 1)]);
    let summary = engine.run(&mut moves);

    assert_eq!(50, summary.final_score);
    assert_eq!(0, summary.items_remaining);
}

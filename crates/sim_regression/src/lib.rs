//! Helpers for deterministic regression tests.

use core_game::{
    Actor, Boss, Enemy, Hostile, Item, MovementSource, Player, Position, TurnEngine,
    DEFAULT_TURNS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scenario::{run_scenario, RunOptions, ScenarioConfig};
use serde_json::json;

pub use core_game::DEFAULT_SEED;

/// Compact outcome of the built-in demo under `seed`, always over the
/// default turn budget.
pub fn demo_trace(seed: u64) -> serde_json::Value {
    let report = run_scenario(
        &ScenarioConfig::demo(),
        &RunOptions::new("regression")
            .with_seed(Some(seed))
            .with_turns(Some(DEFAULT_TURNS)),
    )
    .expect("demo scenario is valid");
    json!({
        "seed": seed,
        "outcome": report.summary.outcome,
        "turns": report.summary.turns_played,
        "score": report.summary.final_score,
        "health": report.summary.final_health,
    })
}

/// A player at the origin facing a single grunt.
pub fn duel(player_health: i32, damage: u32, turns: u32) -> TurnEngine {
    let player = Player::new("Hero", Position::default(), player_health).expect("valid player");
    let grunt = Enemy::new("Goblin", Position::new(1, 1), 50, damage).expect("valid grunt");
    TurnEngine::new(player, vec![grunt.into()], Vec::new())
        .with_turn_budget(turns)
        .expect("positive budget")
}

/// Steps the engine to completion, recording the player's health and score
/// after each resolved turn.
pub fn turn_by_turn(
    engine: &mut TurnEngine,
    moves: &mut impl MovementSource,
) -> Vec<(i32, u32)> {
    let mut trace = Vec::new();
    while !engine.state().is_terminal() {
        engine.step(moves);
        trace.push((engine.player().health(), engine.player().score()));
    }
    trace
}

/// A seeded random encounter: a sturdy player, a few weak hostiles (one of
/// them a boss), and items scattered around the origin.
pub fn random_encounter(seed: u64) -> TurnEngine {
    let mut rng = StdRng::seed_from_u64(seed);
    let player =
        Player::new("Hero", Position::default(), rng.gen_range(40..=200)).expect("valid player");

    let mut hostiles: Vec<Hostile> = (0..rng.gen_range(1..=3))
        .map(|idx| {
            Enemy::new(
                format!("Grunt {idx}"),
                Position::new(rng.gen_range(-3..=3), rng.gen_range(-3..=3)),
                rng.gen_range(0..=40),
                rng.gen_range(0..=12),
            )
            .expect("valid grunt")
            .into()
        })
        .collect();
    hostiles.push(
        Boss::new(
            "Warden",
            Position::new(rng.gen_range(-3..=3), rng.gen_range(-3..=3)),
            rng.gen_range(1..=80),
            rng.gen_range(0..=8),
            rng.gen_range(0..=10),
        )
        .expect("valid boss")
        .into(),
    );

    let items = (0..rng.gen_range(0..=8))
        .map(|idx| {
            Item::new(
                format!("Trinket {idx}"),
                Position::new(rng.gen_range(-2..=2), rng.gen_range(-2..=2)),
                rng.gen_range(0..=25),
            )
            .expect("valid item")
        })
        .collect();

    TurnEngine::new(player, hostiles, items)
        .with_turn_budget(rng.gen_range(1..=12))
        .expect("positive budget")
}

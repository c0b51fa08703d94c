//! Turn resolution.
//!
//! Each turn runs the same phases in a fixed order: player refresh, hostile
//! refresh, item refresh, hostile attacks, item collection, defeat check,
//! player movement. Attacks are decided once per hostile; a player killed by
//! an early attacker still takes hits from the rest of the roster that turn.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entity::Actor;
use crate::error::{GameError, Result};
use crate::event::{GameEvent, GameLog, Refresh};
use crate::hostile::Hostile;
use crate::item::Item;
use crate::player::Player;
use crate::simulation::{MovementSource, DEFAULT_TURNS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    Running,
    Defeated,
    Completed,
}

impl EngineState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Defeated => "defeated",
            Self::Completed => "completed",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: EngineState,
    pub turns_played: u32,
    pub final_score: u32,
    pub final_health: i32,
    pub hostiles_remaining: usize,
    pub items_remaining: usize,
}

/// Owns the player and both rosters for the length of a run.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    player: Player,
    hostiles: Vec<Hostile>,
    items: Vec<Item>,
    turn_budget: u32,
    turns_played: u32,
    state: EngineState,
    log: GameLog,
}

impl TurnEngine {
    pub fn new(player: Player, hostiles: Vec<Hostile>, items: Vec<Item>) -> Self {
        Self {
            player,
            hostiles,
            items,
            turn_budget: DEFAULT_TURNS,
            turns_played: 0,
            state: EngineState::Running,
            log: GameLog::new(),
        }
    }

    pub fn with_turn_budget(mut self, turns: u32) -> Result<Self> {
        if turns == 0 {
            return Err(GameError::InvalidTurnBudget);
        }
        self.turn_budget = turns;
        Ok(self)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hostiles(&self) -> &[Hostile] {
        &self.hostiles
    }

    /// Mutable roster access for loops that drive boss abilities.
    pub fn hostiles_mut(&mut self) -> &mut [Hostile] {
        &mut self.hostiles
    }

    /// Appends to the end of the roster; the newcomer acts from the next
    /// turn's refresh onward.
    pub fn add_hostile(&mut self, hostile: impl Into<Hostile>) {
        self.hostiles.push(hostile.into());
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn turn_budget(&self) -> u32 {
        self.turn_budget
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn into_log(self) -> GameLog {
        self.log
    }

    /// Resolves one turn. A no-op once the engine reached a terminal state.
    pub fn step(&mut self, moves: &mut impl MovementSource) -> EngineState {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.turns_played == 0 {
            self.log.push(GameEvent::GameStarted);
        }
        self.turns_played += 1;
        let turn = self.turns_played;
        self.log.push(GameEvent::TurnStarted { turn });

        self.refresh_all();
        self.resolve_attacks();
        self.collect_items();

        if !self.player.is_alive() {
            self.log.push(GameEvent::Defeated {
                name: self.player.name().to_owned(),
                turn,
            });
            self.finish(EngineState::Defeated);
            return self.state;
        }

        let (dx, dy) = moves.next_move();
        self.player.move_by(dx, dy, &mut self.log);

        info!(
            target: "core_game.turn",
            turn,
            health = self.player.health(),
            score = self.player.score(),
            hostiles = self.hostiles.len(),
            items = self.items.len(),
            "turn resolved"
        );

        if turn >= self.turn_budget {
            self.finish(EngineState::Completed);
        }
        self.state
    }

    /// Steps until the run is defeated or the turn budget is spent.
    pub fn run(&mut self, moves: &mut impl MovementSource) -> GameSummary {
        while !self.state.is_terminal() {
            self.step(moves);
        }
        self.summary()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            outcome: self.state,
            turns_played: self.turns_played,
            final_score: self.player.score(),
            final_health: self.player.health(),
            hostiles_remaining: self.hostiles.len(),
            items_remaining: self.items.len(),
        }
    }

    fn refresh_all(&mut self) {
        self.player.refresh(&mut self.log);
        for hostile in &self.hostiles {
            hostile.refresh(&mut self.log);
        }
        for item in &self.items {
            item.refresh(&mut self.log);
        }
    }

    fn resolve_attacks(&mut self) {
        for hostile in &self.hostiles {
            if hostile.is_alive() {
                hostile.attack(&mut self.player, &mut self.log);
            }
        }
    }

    // Reverse index order so removal never shifts an unvisited item.
    fn collect_items(&mut self) {
        let here = self.player.position();
        for index in (0..self.items.len()).rev() {
            if self.items[index].position() == here {
                let item = self.items.remove(index);
                self.player.collect_item(&item, &mut self.log);
            }
        }
    }

    fn finish(&mut self, outcome: EngineState) {
        self.state = outcome;
        info!(
            target: "core_game.turn",
            outcome = %outcome,
            turns = self.turns_played,
            score = self.player.score(),
            health = self.player.health(),
            "run finished"
        );
        self.log.push(GameEvent::GameEnded { outcome });
        self.log.push(GameEvent::FinalScore {
            score: self.player.score(),
        });
        self.log.push(GameEvent::FinalHealth {
            health: self.player.health(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Position;
    use crate::hostile::{Boss, Enemy};
    use crate::simulation::{ScriptedMoves, Stationary};

    fn hero(health: i32) -> Player {
        Player::new("Hero", Position::default(), health).unwrap()
    }

    fn grunt(name: &str, health: i32, damage: u32) -> Hostile {
        Enemy::new(name, Position::new(1, 1), health, damage)
            .unwrap()
            .into()
    }

    #[test]
    fn zero_turn_budget_is_rejected() {
        let engine = TurnEngine::new(hero(10), Vec::new(), Vec::new());
        assert_eq!(
            Some(GameError::InvalidTurnBudget),
            engine.with_turn_budget(0).err()
        );
    }

    #[test]
    fn completes_after_budget_without_defeat() {
        let mut engine = TurnEngine::new(hero(10), Vec::new(), Vec::new())
            .with_turn_budget(3)
            .unwrap();
        let summary = engine.run(&mut Stationary);
        assert_eq!(EngineState::Completed, summary.outcome);
        assert_eq!(3, summary.turns_played);
        assert_eq!(10, summary.final_health);
    }

    #[test]
    fn every_hostile_attacks_even_after_player_drops() {
        let mut engine = TurnEngine::new(
            hero(15),
            vec![grunt("First", 10, 20), grunt("Second", 10, 5)],
            Vec::new(),
        );
        assert_eq!(EngineState::Defeated, engine.step(&mut Stationary));
        assert_eq!(-10, engine.player().health());
    }

    #[test]
    fn dead_hostiles_skip_their_attack() {
        let mut engine = TurnEngine::new(
            hero(50),
            vec![grunt("Corpse", 0, 40), grunt("Goblin", 10, 10)],
            Vec::new(),
        );
        engine.step(&mut Stationary);
        assert_eq!(40, engine.player().health());
    }

    #[test]
    fn defeat_skips_movement() {
        let mut engine = TurnEngine::new(hero(5), vec![grunt("Ogre", 10, 5)], Vec::new());
        let mut moves = ScriptedMoves::new([(1, 1)]);
        engine.step(&mut moves);
        assert_eq!(Position::default(), engine.player().position());
        assert_eq!(1, moves.remaining());
    }

    #[test]
    fn stepping_a_finished_engine_changes_nothing() {
        let mut engine = TurnEngine::new(hero(5), vec![grunt("Ogre", 10, 5)], Vec::new());
        engine.run(&mut Stationary);
        let events = engine.log().len();
        assert_eq!(EngineState::Defeated, engine.step(&mut Stationary));
        assert_eq!(1, engine.turns_played());
        assert_eq!(events, engine.log().len());
    }

    #[test]
    fn co_located_items_are_all_collected_once() {
        let items = vec![
            Item::new("Gold", Position::default(), 50).unwrap(),
            Item::new("Gem", Position::new(4, 4), 80).unwrap(),
            Item::new("Coin", Position::default(), 5).unwrap(),
        ];
        let mut engine = TurnEngine::new(hero(10), Vec::new(), items);
        engine.step(&mut Stationary);
        assert_eq!(55, engine.player().score());
        assert_eq!(1, engine.items().len());
        assert_eq!("Gem", engine.items()[0].name());

        let collected: Vec<_> = engine
            .log()
            .events()
            .iter()
            .filter_map(|e| match e {
                GameEvent::Collected { item, .. } => Some(item.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(vec!["Coin", "Gold"], collected);
    }

    #[test]
    fn added_hostiles_join_later_turns() {
        let boss = Boss::new("Dragon", Position::new(2, 2), 200, 30, 20).unwrap();
        let mut log = GameLog::new();
        let minion = boss.summon_allies(&mut log);
        let mut engine = TurnEngine::new(hero(100), vec![boss.into()], Vec::new());
        assert_eq!(1, engine.hostiles().len());

        engine.step(&mut Stationary);
        assert_eq!(70, engine.player().health());
        engine.add_hostile(minion);
        engine.step(&mut Stationary);
        assert_eq!(30, engine.player().health());
    }

    #[test]
    fn boss_abilities_through_roster() {
        let boss = Boss::new("Dragon", Position::new(2, 2), 200, 30, 20).unwrap();
        let mut engine = TurnEngine::new(hero(100), vec![boss.into()], Vec::new());
        let mut log = GameLog::new();
        if let Some(boss) = engine.hostiles_mut()[0].as_boss_mut() {
            boss.heal(&mut log);
        }
        assert_eq!(220, engine.hostiles()[0].health());
    }
}

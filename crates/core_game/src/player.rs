use std::fmt;

use crate::entity::{Actor, Combatant, Position};
use crate::error::Result;
use crate::event::{GameEvent, GameLog, Refresh};
use crate::item::Item;

/// The single player character. Score only ever grows, by collecting items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    combatant: Combatant,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, health: i32) -> Result<Self> {
        Ok(Self {
            combatant: Combatant::new(name, position, health)?,
            score: 0,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds the item's value to the score. Leaves roster bookkeeping to the
    /// caller.
    pub fn collect_item(&mut self, item: &Item, log: &mut GameLog) {
        self.score = self.score.saturating_add(item.value());
        log.push(GameEvent::Collected {
            item: item.name().to_owned(),
            score: self.score,
        });
    }

    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.combatant.take_damage(amount);
    }
}

impl Actor for Player {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }
}

impl Refresh for Player {
    fn refresh(&self, log: &mut GameLog) {
        self.combatant.log_status(log);
        log.push(GameEvent::Score {
            name: self.name().to_owned(),
            score: self.score,
        });
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.combatant.fmt(f)
    }
}

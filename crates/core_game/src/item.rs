use std::fmt;

use crate::entity::{Entity, Position};
use crate::error::Result;
use crate::event::{GameEvent, GameLog, Refresh};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    entity: Entity,
    value: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, position: Position, value: u32) -> Result<Self> {
        Ok(Self {
            entity: Entity::new(name, position)?,
            value,
        })
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn position(&self) -> Position {
        self.entity.position()
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Refresh for Item {
    fn refresh(&self, log: &mut GameLog) {
        log.push(GameEvent::AwaitingCollection {
            name: self.entity.name().to_owned(),
        });
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entity.fmt(f)
    }
}

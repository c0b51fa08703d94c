//! Shared shapes: positioned entities and combatants with health.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::event::{GameEvent, GameLog};

/// Grid cell. Coordinates are unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Name plus position; every simulated object embeds one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub(crate) name: String,
    pub(crate) position: Position,
}

impl Entity {
    pub fn new(name: impl Into<String>, position: Position) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::invalid_entity(&name, "name must not be empty"));
        }
        Ok(Self { name, position })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}

/// An entity with health that can move. Health may go negative after a
/// heavy hit; the combatant is alive only while it is above zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub(crate) entity: Entity,
    pub(crate) health: i32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, position: Position, health: i32) -> Result<Self> {
        let entity = Entity::new(name, position)?;
        if health < 0 {
            return Err(GameError::invalid_entity(
                &entity.name,
                "initial health must not be negative",
            ));
        }
        Ok(Self { entity, health })
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn move_by(&mut self, dx: i32, dy: i32, log: &mut GameLog) {
        self.entity.position = self.entity.position.offset(dx, dy);
        log.push(GameEvent::Moved {
            name: self.entity.name.clone(),
            position: self.entity.position,
        });
    }

    /// Base status line every combatant kind opens its refresh with.
    pub fn log_status(&self, log: &mut GameLog) {
        log.push(GameEvent::Status {
            name: self.entity.name.clone(),
            health: self.health,
        });
    }

    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }

    pub(crate) fn restore(&mut self, amount: u32) {
        self.health = self.health.saturating_add_unsigned(amount);
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entity.fmt(f)
    }
}

/// Read access and movement for anything built around a [`Combatant`].
pub trait Actor {
    fn combatant(&self) -> &Combatant;

    fn combatant_mut(&mut self) -> &mut Combatant;

    fn name(&self) -> &str {
        self.combatant().entity.name()
    }

    fn position(&self) -> Position {
        self.combatant().entity.position()
    }

    fn health(&self) -> i32 {
        self.combatant().health()
    }

    fn is_alive(&self) -> bool {
        self.combatant().is_alive()
    }

    fn move_by(&mut self, dx: i32, dy: i32, log: &mut GameLog) {
        self.combatant_mut().move_by(dx, dy, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_name_and_position() {
        let entity = Entity::new("Gold", Position::new(1, -2)).unwrap();
        assert_eq!("Gold at (1, -2)", entity.to_string());
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(
            Entity::new("  ", Position::default()),
            Err(GameError::InvalidEntity { .. })
        ));
        assert!(Entity::new("", Position::default()).is_err());
    }

    #[test]
    fn negative_starting_health_is_rejected() {
        let err = Combatant::new("Ghost", Position::default(), -1).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn liveness_tracks_health_above_zero() {
        let mut c = Combatant::new("Hero", Position::default(), 10).unwrap();
        assert!(c.is_alive());
        c.take_damage(10);
        assert!(!c.is_alive());
        c.take_damage(5);
        assert_eq!(-5, c.health());
    }

    #[test]
    fn move_is_unbounded_and_logged() {
        let mut log = GameLog::new();
        let mut c = Combatant::new("Hero", Position::new(0, 0), 10).unwrap();
        c.move_by(-1, -1, &mut log);
        c.move_by(-1, 0, &mut log);
        assert_eq!(Position::new(-2, -1), c.entity().position());
        assert_eq!(
            Some(&GameEvent::Moved {
                name: "Hero".into(),
                position: Position::new(-2, -1),
            }),
            log.last()
        );
        assert_eq!("Hero moved to (-2, -1)", log.last().unwrap().to_string());
    }
}

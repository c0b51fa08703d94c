//! Hostile combatants: ordinary enemies and bosses.
//!
//! None of the attack or ability methods check the actor's own liveness;
//! callers decide whether a hostile gets to act.

use std::fmt;

use crate::entity::{Actor, Combatant, Entity, Position};
use crate::error::Result;
use crate::event::{GameEvent, GameLog, Refresh};
use crate::player::Player;

pub const MINION_NAME: &str = "Minion";
pub const MINION_HEALTH: i32 = 50;
pub const MINION_DAMAGE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    combatant: Combatant,
    damage: u32,
}

impl Enemy {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        health: i32,
        damage: u32,
    ) -> Result<Self> {
        Ok(Self {
            combatant: Combatant::new(name, position, health)?,
            damage,
        })
    }

    fn minion(position: Position) -> Self {
        Self {
            combatant: Combatant {
                entity: Entity {
                    name: MINION_NAME.to_owned(),
                    position,
                },
                health: MINION_HEALTH,
            },
            damage: MINION_DAMAGE,
        }
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: u32) {
        self.damage = damage;
    }

    pub fn attack(&self, target: &mut Player, log: &mut GameLog) {
        target.take_damage(self.damage);
        log.push(GameEvent::Attacked {
            attacker: self.name().to_owned(),
            target: target.name().to_owned(),
            damage: self.damage,
        });
    }
}

impl Actor for Enemy {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }
}

impl Refresh for Enemy {
    fn refresh(&self, log: &mut GameLog) {
        self.combatant.log_status(log);
        log.push(GameEvent::ReadyToAttack {
            name: self.name().to_owned(),
            damage: self.damage,
        });
    }
}

/// An enemy that can heal itself, hit twice as hard on demand, and call in
/// minions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boss {
    enemy: Enemy,
    heal_amount: u32,
}

impl Boss {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        health: i32,
        damage: u32,
        heal_amount: u32,
    ) -> Result<Self> {
        Ok(Self {
            enemy: Enemy::new(name, position, health, damage)?,
            heal_amount,
        })
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }

    /// Always derived from the current base damage.
    pub fn special_damage(&self) -> u32 {
        self.enemy.damage.saturating_mul(2)
    }

    pub fn attack(&self, target: &mut Player, log: &mut GameLog) {
        self.enemy.attack(target, log);
    }

    pub fn special_attack(&self, target: &mut Player, log: &mut GameLog) {
        let damage = self.special_damage();
        target.take_damage(damage);
        log.push(GameEvent::SpecialAttacked {
            attacker: self.name().to_owned(),
            target: target.name().to_owned(),
            damage,
        });
    }

    pub fn heal(&mut self, log: &mut GameLog) {
        self.enemy.combatant.restore(self.heal_amount);
        log.push(GameEvent::Healed {
            name: self.name().to_owned(),
            amount: self.heal_amount,
            health: self.health(),
        });
    }

    /// Returns a fresh minion one cell down-right of the boss. The caller
    /// owns roster insertion.
    pub fn summon_allies(&self, log: &mut GameLog) -> Enemy {
        let minion = Enemy::minion(self.position().offset(1, 1));
        log.push(GameEvent::Summoned {
            summoner: self.name().to_owned(),
            ally: minion.name().to_owned(),
        });
        minion
    }
}

impl Actor for Boss {
    fn combatant(&self) -> &Combatant {
        &self.enemy.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.enemy.combatant
    }
}

impl Refresh for Boss {
    fn refresh(&self, log: &mut GameLog) {
        self.enemy.refresh(log);
        log.push(GameEvent::PreparingAbilities {
            name: self.name().to_owned(),
        });
    }
}

/// Roster entry. Order in the roster is refresh and attack order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hostile {
    Enemy(Enemy),
    Boss(Boss),
}

impl Hostile {
    pub fn damage(&self) -> u32 {
        match self {
            Self::Enemy(enemy) => enemy.damage(),
            Self::Boss(boss) => boss.enemy.damage(),
        }
    }

    pub fn attack(&self, target: &mut Player, log: &mut GameLog) {
        match self {
            Self::Enemy(enemy) => enemy.attack(target, log),
            Self::Boss(boss) => boss.attack(target, log),
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, Self::Boss(_))
    }

    pub fn as_boss(&self) -> Option<&Boss> {
        match self {
            Self::Boss(boss) => Some(boss),
            Self::Enemy(_) => None,
        }
    }

    pub fn as_boss_mut(&mut self) -> Option<&mut Boss> {
        match self {
            Self::Boss(boss) => Some(boss),
            Self::Enemy(_) => None,
        }
    }
}

impl Actor for Hostile {
    fn combatant(&self) -> &Combatant {
        match self {
            Self::Enemy(enemy) => enemy.combatant(),
            Self::Boss(boss) => boss.combatant(),
        }
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        match self {
            Self::Enemy(enemy) => enemy.combatant_mut(),
            Self::Boss(boss) => boss.combatant_mut(),
        }
    }
}

impl Refresh for Hostile {
    fn refresh(&self, log: &mut GameLog) {
        match self {
            Self::Enemy(enemy) => enemy.refresh(log),
            Self::Boss(boss) => boss.refresh(log),
        }
    }
}

impl From<Enemy> for Hostile {
    fn from(enemy: Enemy) -> Self {
        Self::Enemy(enemy)
    }
}

impl From<Boss> for Hostile {
    fn from(boss: Boss) -> Self {
        Self::Boss(boss)
    }
}

impl fmt::Display for Hostile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.combatant().fmt(f)
    }
}

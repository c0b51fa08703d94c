use std::fs;
use std::path::Path;

use anyhow::{self, Context, Result};
use core_game::{Boss, Enemy, Hostile, Item, Player, Position, TurnEngine};
use serde::{Deserialize, Serialize};

/// A scenario file: who starts where, plus optional run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub player: PlayerConfig,
    #[serde(default)]
    pub hostiles: Vec<HostileConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl ScenarioConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("invalid scenario {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: ScenarioConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Hero, a goblin, a dragon boss, and two items next to the start.
    pub fn demo() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            player: PlayerConfig {
                name: "Hero".into(),
                x: 0,
                y: 0,
                health: 100,
            },
            hostiles: vec![
                HostileConfig {
                    kind: HostileKind::Grunt,
                    name: "Goblin".into(),
                    x: 1,
                    y: 1,
                    health: 50,
                    damage: 10,
                    heal_amount: None,
                },
                HostileConfig {
                    kind: HostileKind::Boss,
                    name: "Dragon".into(),
                    x: 2,
                    y: 2,
                    health: 200,
                    damage: 30,
                    heal_amount: Some(20),
                },
            ],
            items: vec![
                ItemConfig {
                    name: "Gold".into(),
                    x: 1,
                    y: 0,
                    value: 50,
                },
                ItemConfig {
                    name: "Health Potion".into(),
                    x: 0,
                    y: 1,
                    value: 0,
                },
            ],
        }
    }

    /// Builds a fresh engine. `turns` falls back to the default budget when
    /// `None`.
    pub fn build_engine(&self, turns: Option<u32>) -> Result<TurnEngine> {
        let player = self.player.build()?;
        let hostiles = self
            .hostiles
            .iter()
            .enumerate()
            .map(|(idx, cfg)| cfg.build().with_context(|| format!("hostiles[{idx}]")))
            .collect::<Result<Vec<_>>>()?;
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, cfg)| cfg.build().with_context(|| format!("items[{idx}]")))
            .collect::<Result<Vec<_>>>()?;

        let engine = TurnEngine::new(player, hostiles, items);
        match turns {
            Some(turns) => Ok(engine.with_turn_budget(turns)?),
            None => Ok(engine),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub health: i32,
}

impl PlayerConfig {
    fn build(&self) -> Result<Player> {
        Ok(Player::new(
            &self.name,
            Position::new(self.x, self.y),
            self.health,
        )?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostileKind {
    #[default]
    Grunt,
    Boss,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostileConfig {
    #[serde(default)]
    pub kind: HostileKind,
    pub name: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub health: i32,
    pub damage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal_amount: Option<u32>,
}

impl HostileConfig {
    fn build(&self) -> Result<Hostile> {
        let position = Position::new(self.x, self.y);
        let hostile: Hostile = match self.kind {
            HostileKind::Grunt => {
                if self.heal_amount.is_some() {
                    anyhow::bail!("{} is a grunt; only bosses take heal_amount", self.name);
                }
                Enemy::new(&self.name, position, self.health, self.damage)?.into()
            }
            HostileKind::Boss => Boss::new(
                &self.name,
                position,
                self.health,
                self.damage,
                self.heal_amount.unwrap_or(0),
            )?
            .into(),
        };
        Ok(hostile)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub name: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub value: u32,
}

impl ItemConfig {
    fn build(&self) -> Result<Item> {
        Ok(Item::new(&self.name, Position::new(self.x, self.y), self.value)?)
    }
}

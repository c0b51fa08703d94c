//! Turn events and the ordered log that collects them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::EngineState;
use crate::entity::Position;

/// One discrete thing that happened during a run. `Display` renders the
/// human-readable log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted,
    TurnStarted {
        turn: u32,
    },
    Status {
        name: String,
        health: i32,
    },
    Score {
        name: String,
        score: u32,
    },
    ReadyToAttack {
        name: String,
        damage: u32,
    },
    PreparingAbilities {
        name: String,
    },
    AwaitingCollection {
        name: String,
    },
    Moved {
        name: String,
        position: Position,
    },
    Attacked {
        attacker: String,
        target: String,
        damage: u32,
    },
    SpecialAttacked {
        attacker: String,
        target: String,
        damage: u32,
    },
    Healed {
        name: String,
        amount: u32,
        health: i32,
    },
    Summoned {
        summoner: String,
        ally: String,
    },
    Collected {
        item: String,
        score: u32,
    },
    Defeated {
        name: String,
        turn: u32,
    },
    GameEnded {
        outcome: EngineState,
    },
    FinalScore {
        score: u32,
    },
    FinalHealth {
        health: i32,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameStarted => f.write_str("=== GAME START ==="),
            Self::TurnStarted { turn } => write!(f, "--- Turn {turn} ---"),
            Self::Status { name, health } => write!(f, "{name} updated, health: {health}"),
            Self::Score { name, score } => write!(f, "{name} score: {score}"),
            Self::ReadyToAttack { name, damage } => {
                write!(f, "{name} ready to attack with damage: {damage}")
            }
            Self::PreparingAbilities { name } => {
                write!(f, "{name} is preparing to use special abilities")
            }
            Self::AwaitingCollection { name } => write!(f, "Item {name} waiting to be collected"),
            Self::Moved { name, position } => write!(f, "{name} moved to {position}"),
            Self::Attacked {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} attacked {target} for {damage} damage"),
            Self::SpecialAttacked {
                attacker,
                target,
                damage,
            } => write!(
                f,
                "{attacker} used special attack on {target} for {damage} damage"
            ),
            Self::Healed {
                name,
                amount,
                health,
            } => write!(f, "{name} healed for {amount}, current health: {health}"),
            Self::Summoned { summoner, ally } => write!(f, "{summoner} summoned an ally: {ally}"),
            Self::Collected { item, score } => write!(f, "Collected {item}, score: {score}"),
            Self::Defeated { name, turn } => {
                write!(f, "{name} has fallen on turn {turn}! Game over.")
            }
            Self::GameEnded { outcome } => write!(f, "=== GAME END ({outcome}) ==="),
            Self::FinalScore { score } => write!(f, "Final score: {score}"),
            Self::FinalHealth { health } => write!(f, "Player health: {health}"),
        }
    }
}

/// Ordered sink for [`GameEvent`]s. Every pushed event is mirrored to
/// `tracing` under `core_game.log`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameLog {
    events: Vec<GameEvent>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        info!(target: "core_game.log", seq = self.events.len(), "{event}");
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(ToString::to_string)
    }

    /// All lines joined with `\n`, no trailing newline.
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}

/// Per-turn self-update. Each kind appends its own lines after whatever
/// base status line it shares with its parent shape.
pub trait Refresh {
    fn refresh(&self, log: &mut GameLog);
}

//! Core game logic: the entity model and the turn engine that drives it.
//!
//! Runs are fully determined by their inputs plus the injected
//! [`MovementSource`], so a fixed seed always replays the same log.

pub mod engine;
pub mod entity;
pub mod error;
pub mod event;
pub mod hostile;
pub mod item;
pub mod player;
pub mod simulation;

pub use engine::{EngineState, GameSummary, TurnEngine};
pub use entity::{Actor, Combatant, Entity, Position};
pub use error::{GameError, Result};
pub use event::{GameEvent, GameLog, Refresh};
pub use hostile::{Boss, Enemy, Hostile};
pub use item::Item;
pub use player::Player;
pub use simulation::{
    MovementSource, ScriptedMoves, SimulationParams, SimulationRng, Stationary, DEFAULT_SEED,
    DEFAULT_TURNS,
};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use core_game::{GameEvent, GameSummary};
use serde::{Deserialize, Serialize};

/// Everything a finished run produced, in a form that can be stored and
/// replayed as text later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub summary: GameSummary,
    pub events: Vec<GameEvent>,
}

impl RunReport {
    pub fn new(
        id: impl Into<String>,
        seed: u64,
        summary: GameSummary,
        events: Vec<GameEvent>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            summary,
            events,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read report {}", path.display()))?;
        let report = serde_json::from_str(&data)
            .with_context(|| format!("malformed report {}", path.display()))?;
        Ok(report)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        Ok(())
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(ToString::to_string)
    }

    pub fn headline(&self) -> String {
        format!(
            "Report {} -> {} after {} turn(s), score {}, health {} (seed {})",
            self.id,
            self.summary.outcome,
            self.summary.turns_played,
            self.summary.final_score,
            self.summary.final_health,
            self.seed,
        )
    }
}

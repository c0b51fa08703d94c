use anyhow::Result;
use core_game::{SimulationParams, SimulationRng};
use tracing::info;

use crate::config::ScenarioConfig;
use crate::report::RunReport;

/// Per-run overrides. Anything left `None` falls back to the scenario file,
/// then to `SIMULATION_SEED` / `SIMULATION_TURNS`, then to the defaults.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub run_id: String,
    pub seed: Option<u64>,
    pub turns: Option<u32>,
}

impl RunOptions {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_turns(mut self, turns: Option<u32>) -> Self {
        self.turns = turns;
        self
    }

    pub fn resolve(&self, config: &ScenarioConfig) -> SimulationParams {
        let env = SimulationParams::from_env();
        SimulationParams {
            seed: self.seed.or(config.simulation.seed).unwrap_or(env.seed),
            turns: self.turns.or(config.simulation.turns).unwrap_or(env.turns),
        }
    }
}

pub fn run_scenario(config: &ScenarioConfig, options: &RunOptions) -> Result<RunReport> {
    let params = options.resolve(config);
    let mut engine = config.build_engine(Some(params.turns))?;
    let mut rng = SimulationRng::new(params.seed);

    info!(
        target: "scenario",
        run_id = %options.run_id,
        seed = params.seed,
        turns = params.turns,
        hostiles = config.hostiles.len(),
        items = config.items.len(),
        "starting run"
    );
    let summary = engine.run(&mut rng);

    Ok(RunReport::new(
        options.run_id.clone(),
        rng.seed(),
        summary,
        engine.into_log().into_events(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_game::{EngineState, GameEvent};

    #[test]
    fn explicit_options_beat_file_settings() {
        let mut cfg = ScenarioConfig::demo();
        cfg.simulation.seed = Some(1);
        cfg.simulation.turns = Some(2);
        let params = RunOptions::new("t")
            .with_seed(Some(9))
            .with_turns(None)
            .resolve(&cfg);
        assert_eq!(9, params.seed);
        assert_eq!(2, params.turns);
    }

    #[test]
    fn fully_pinned_options_ignore_file_and_env() {
        let mut cfg = ScenarioConfig::demo();
        cfg.simulation.seed = Some(1);
        cfg.simulation.turns = Some(2);
        let options = RunOptions::new("pinned")
            .with_seed(Some(5))
            .with_turns(Some(4));
        assert_eq!(
            SimulationParams { seed: 5, turns: 4 },
            options.resolve(&cfg)
        );

        let report = run_scenario(&cfg, &options).unwrap();
        assert_eq!(5, report.seed);
        assert_eq!(EngineState::Defeated, report.summary.outcome);
        assert_eq!(3, report.summary.turns_played);
    }

    #[test]
    fn same_seed_reproduces_the_demo() {
        let cfg = ScenarioConfig::demo();
        let options = RunOptions::new("a").with_seed(Some(11));
        let first = run_scenario(&cfg, &options).unwrap();
        let second = run_scenario(&cfg, &options).unwrap();
        assert_eq!(first.events, second.events);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn demo_report_ends_with_summary_block() {
        let report = run_scenario(
            &ScenarioConfig::demo(),
            &RunOptions::new("demo").with_seed(Some(42)).with_turns(Some(5)),
        )
        .unwrap();
        let tail = &report.events[report.events.len() - 3..];
        assert!(matches!(tail[0], GameEvent::GameEnded { .. }));
        assert_eq!(
            GameEvent::FinalScore {
                score: report.summary.final_score
            },
            tail[1]
        );
        assert_eq!(
            GameEvent::FinalHealth {
                health: report.summary.final_health
            },
            tail[2]
        );
        // Goblin (10) + Dragon (30) per turn: 100 health lasts three turns.
        assert_eq!(EngineState::Defeated, report.summary.outcome);
        assert_eq!(3, report.summary.turns_played);
        assert_eq!(-20, report.summary.final_health);
    }
}

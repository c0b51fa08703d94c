pub mod config;
pub mod report;
pub mod runner;

pub use config::{
    HostileConfig, HostileKind, ItemConfig, PlayerConfig, ScenarioConfig, SimulationConfig,
};
pub use report::RunReport;
pub use runner::{run_scenario, RunOptions};

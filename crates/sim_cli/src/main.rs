use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use scenario::{run_scenario, RunOptions, RunReport, ScenarioConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Run turn-based encounter simulations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario (the built-in demo if none is given) and print its log.
    Run(RunArgs),
    /// Summarize a stored run report.
    Report(ReportArgs),
    /// Print the built-in demo scenario as TOML.
    DemoScenario,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long)]
    scenario: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    turns: Option<u32>,
    #[arg(long)]
    id: Option<String>,
    /// Also write the full report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Print the report as JSON instead of log lines.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
    /// Replay every logged line, not just the headline.
    #[arg(long)]
    full: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => handle_run(args),
        Commands::Report(args) => handle_report(args),
        Commands::DemoScenario => handle_demo_scenario(),
    }
}

fn handle_run(args: RunArgs) -> Result<()> {
    let config = match args.scenario.as_deref() {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::demo(),
    };

    let run_id = args
        .id
        .unwrap_or_else(|| format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let options = RunOptions::new(run_id)
        .with_seed(args.seed)
        .with_turns(args.turns);

    let report = run_scenario(&config, &options)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }

    if let Some(path) = args.report.as_deref() {
        report.write_to(path)?;
        info!(target: "sim_cli", path = %path.display(), "report written");
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let report = RunReport::from_path(&args.input)?;
    println!("{}", report.headline());
    if args.full {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn handle_demo_scenario() -> Result<()> {
    print!("{}", ScenarioConfig::demo().to_toml()?);
    Ok(())
}

//! radar-replay — drive the heat engine with a recorded chat scenario.

mod scenario;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use radar_core::config::RadarConfig;
use radar_core::traits::{Clock, ManualClock, SystemClock};
use radar_engine::{HeatEngine, PersistentTriggerStore, TriggerBreaker};
use tracing_subscriber::EnvFilter;

use scenario::{parse_scenario, Replay};

#[derive(Parser)]
#[command(name = "radar-replay", about = "Replay a group chat scenario through the heat radar")]
struct Cli {
    /// Scenario file: JSON array of {time_offset, group, user, name, content, score}
    scenario: PathBuf,

    /// TOML config; missing keys use defaults
    #[arg(long, env = "RADAR_CONFIG")]
    config: Option<PathBuf>,

    /// Trigger store to load and update (in-memory if omitted)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Simulated start time in epoch seconds (defaults to now)
    #[arg(long)]
    start: Option<f64>,

    /// Base score for events without one
    #[arg(long, default_value = "1")]
    default_score: u32,

    /// Do not gate triggers through the global breaker
    #[arg(long)]
    no_breaker: bool,

    /// Print each trigger's full context
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            RadarConfig::from_toml(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RadarConfig::default(),
    };

    let raw = std::fs::read_to_string(&cli.scenario)
        .with_context(|| format!("reading scenario {}", cli.scenario.display()))?;
    let events = parse_scenario(&raw).context("parsing scenario")?;

    let clock = Arc::new(ManualClock::new(cli.start.unwrap_or_else(|| SystemClock.now())));
    let store = match &cli.store {
        Some(path) => PersistentTriggerStore::open(path),
        None => PersistentTriggerStore::in_memory(),
    };
    let breaker = (!cli.no_breaker).then(|| TriggerBreaker::new(config.trigger.breaker.clone()));
    let engine = HeatEngine::with_store(config, clock.clone(), store);
    let replay = Replay::new(engine, clock, breaker, cli.default_score);

    println!("replaying {} events from {}", events.len(), cli.scenario.display());
    let triggers = replay.run(&events);

    for t in &triggers {
        let status = if t.dispatched { "dispatched" } else { "breaker-dropped" };
        println!(
            "[{:>8.1}s] {} triggered ({}) with {} buffered messages, {}",
            t.time_offset, t.group, t.reason, t.context_len, status
        );
        if cli.verbose {
            for line in t.history.lines() {
                println!("    {line}");
            }
        }
    }

    let engine = replay.engine();
    let mut groups = engine.group_ids();
    groups.sort();
    for group in groups {
        if let Some(snap) = engine.snapshot(&group) {
            println!(
                "{group}: score {:.1}/{} (threshold {}), cooldown {:.0}s",
                snap.score, snap.max_score_cap, snap.trigger_threshold, snap.remaining_cooldown
            );
        }
    }
    println!("{} trigger(s)", triggers.len());

    // Failures are logged by the engine; a replay still completes.
    let _ = engine.shutdown();
    Ok(())
}

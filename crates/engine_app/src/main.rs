//! # engine_app
//!
//! Demo driver for the ECS world.
//!
//! Builds a [`World`](engine_ecs::World), spawns a handful of moving
//! entities and steps them until the configured step count is reached.
//!
//! ## Startup Sequence
//!
//! 1. Install structured logging (`RUST_LOG` overrides the default filter).
//! 2. Load the world config from `--config`, then `ENGINE_CONFIG`, else defaults.
//! 3. Run the simulation and log a summary.

mod components;
mod simulation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine_ecs::{World, WorldConfig};
use simulation::{Simulation, SimulationConfig};

/// The environment variable used to point at a world config file.
const CONFIG_ENV: &str = "ENGINE_CONFIG";

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Drive an in-memory ECS world")]
struct Args {
    /// Path to a JSON world config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of entities to spawn.
    #[arg(long, default_value_t = 3)]
    entities: u32,

    /// Number of steps to run.
    #[arg(long, default_value_t = 4)]
    steps: u32,
}

fn load_config(path: Option<PathBuf>) -> Result<WorldConfig> {
    let Some(path) = path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)) else {
        return Ok(WorldConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading world config {}", path.display()))?;
    let config = WorldConfig::from_json_str(&json)
        .with_context(|| format!("parsing world config {}", path.display()))?;
    info!(path = %path.display(), "loaded world config");
    Ok(config)
}

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("engine_app=info".parse()?))
        .init();

    let args = Args::parse();
    let config = load_config(args.config)?;
    info!(?config, "engine demo starting");

    let simulation = Simulation::new(
        SimulationConfig {
            entities: args.entities,
            steps: args.steps,
        },
        World::with_config(config),
    )?;
    info!(
        component_types = simulation.world().registry().len(),
        "registered component types"
    );
    let summary = simulation.run()?;

    info!(
        steps = summary.steps,
        created = summary.created,
        added = summary.added,
        removed = summary.removed,
        moving = summary.moving,
        "engine demo finished"
    );
    Ok(())
}

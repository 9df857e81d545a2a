//! Argument groups and setup shared by the planner binaries.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use solar_launch_window::config::{SimulationConfig, load_settings};
use solar_launch_window::orbits::Catalog;
use solar_launch_window::transfer::settings::{self, PlannerSettings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where the catalog and settings come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Planet data text file (name, diameter, mass)
    #[arg(long, default_value = "data/Planetary_Data.txt")]
    pub planets: PathBuf,

    /// Orbital data text file (period, orbital radius)
    #[arg(long, default_value = "data/Solar_System_Data.txt")]
    pub orbits: PathBuf,

    /// Structured YAML/TOML catalog; replaces --planets/--orbits when given
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Simulation settings (TOML); built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let catalog = match &self.catalog {
            Some(path) => solar_launch_window::load_structured_catalog(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
            None => solar_launch_window::load_text_catalog(&self.planets, &self.orbits)
                .with_context(|| {
                    format!(
                        "loading {} and {}",
                        self.planets.display(),
                        self.orbits.display()
                    )
                })?,
        };
        Ok(catalog)
    }

    pub fn load_config(&self) -> anyhow::Result<SimulationConfig> {
        match &self.config {
            Some(path) => load_settings(path).with_context(|| format!("loading {}", path.display())),
            None => Ok(SimulationConfig::default()),
        }
    }

    pub fn load_settings(&self) -> anyhow::Result<PlannerSettings> {
        Ok(settings::from_config(&self.load_config()?))
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings by default).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

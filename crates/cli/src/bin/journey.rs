use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use solar_launch_window::export::report::save_json;
use solar_launch_window::orbits::geometry;
use solar_launch_window::transfer::{SearchControl, WindowPolicy, plan_journey, simulate_to_day};
use tracing::info;

#[path = "../shared.rs"]
mod shared;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find the closest unobstructed launch window between two planets"
)]
struct Cli {
    #[command(flatten)]
    source: shared::SourceArgs,

    /// Departure planet name
    #[arg(long)]
    from: String,

    /// Destination planet name
    #[arg(long)]
    to: String,

    /// Occlusion policy (defaults to the settings file)
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Number of days to search (defaults to the settings file)
    #[arg(long)]
    horizon_days: Option<u32>,

    /// Simulated days elapsed before the search starts (defaults to the settings file)
    #[arg(long)]
    epoch_days: Option<f64>,

    /// Abort the search after this many seconds
    #[arg(long)]
    timeout_secs: Option<f64>,

    /// Write the full journey plan as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PolicyArg {
    Static,
    Moving,
}

fn main() -> anyhow::Result<()> {
    shared::init_tracing();
    let cli = Cli::parse();

    let mut catalog = cli.source.load_catalog()?;
    let mut settings = cli.source.load_settings()?;
    if let Some(policy) = cli.policy {
        settings.search.policy = match policy {
            PolicyArg::Static => WindowPolicy::Static,
            PolicyArg::Moving => WindowPolicy::Moving,
        };
    }
    if let Some(horizon) = cli.horizon_days {
        settings.search.horizon_days = horizon;
    }
    if let Some(epoch) = cli.epoch_days {
        settings.search.epoch_days = epoch;
    }

    let control = match cli.timeout_secs {
        Some(secs) => SearchControl::new().with_timeout(
            Duration::try_from_secs_f64(secs).context("--timeout-secs must be a non-negative number")?,
        ),
        None => SearchControl::new(),
    };

    simulate_to_day(&mut catalog, settings.search.epoch_days)?;
    let current = geometry::distance(catalog.by_name(&cli.from)?, catalog.by_name(&cli.to)?);
    println!(
        "Distance between {} and {} after {} days: {current:.6} AU",
        cli.from, cli.to, settings.search.epoch_days
    );

    let journey = settings.journey(&cli.from, &cli.to);
    let plan = plan_journey(&mut catalog, &journey, &control)?;
    info!(
        obstructed = plan.window.obstructions.len(),
        infeasible = plan.window.infeasible_days.len(),
        "search complete"
    );

    match &plan.window.best {
        Some(window) => {
            println!(
                "Best launch window: day {} ({:.6} AU), {} obstructed candidate(s)",
                window.day,
                window.distance_au,
                plan.window.obstructions.len()
            );
            println!("Angular positions at the window:");
            for (name, angle) in &plan.angles {
                println!("  {name}: {angle:.6}°");
            }
            match &plan.report {
                Some(report) => println!("{report}"),
                None => println!("The bodies are too close for the rocket to reach cruising velocity"),
            }
        }
        None => println!(
            "No unobstructed launch window within {} days",
            plan.window.days_evaluated
        ),
    }

    if let Some(path) = &cli.json {
        save_json(path, &plan).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

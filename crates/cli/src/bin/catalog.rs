use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use solar_launch_window::config::save_planets;
use solar_launch_window::export::report::save_json;
use solar_launch_window::physics::{apply_escape_velocities, departure_profile};
use solar_launch_window::transfer::catalog::to_config;
use tracing::info;

#[path = "../shared.rs"]
mod shared;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Load the planet catalog, compute escape velocities and print departure profiles"
)]
struct Cli {
    #[command(flatten)]
    source: shared::SourceArgs,

    /// Write the enriched catalog as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the catalog back out as structured YAML
    #[arg(long)]
    save_yaml: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    shared::init_tracing();
    let cli = Cli::parse();

    let mut catalog = cli.source.load_catalog()?;
    let settings = cli.source.load_settings()?;
    apply_escape_velocities(&mut catalog, &settings.physics)?;
    info!(bodies = catalog.len(), "catalog loaded");

    let acceleration = settings.rocket.acceleration_m_s2();
    println!("Rocket acceleration: {acceleration:.3} m/s²");
    for planet in catalog.iter() {
        let mass = if planet.is_reference {
            format!("{:e} kg", planet.mass_factor)
        } else {
            format!("{} Earths", planet.mass_factor)
        };
        let orbit = match planet.orbital_period_days {
            Some(period) => format!("period {period} days, orbital radius {} AU", planet.orbital_radius_au),
            None => "no orbital data".to_string(),
        };
        println!("{}: diameter {} km, mass {mass}, {orbit}", planet.name, planet.diameter_km);

        let profile = departure_profile(planet, acceleration)?;
        println!(
            "  escape velocity {:.3} m/s reached after {:.3} s, {:.3} km above the surface ({:.3} km from the center)",
            planet.escape_velocity_m_s.unwrap_or_default(),
            profile.time_s,
            profile.distance_from_surface_m / 1_000.0,
            profile.distance_from_center_m / 1_000.0,
        );
    }

    if let Some(path) = &cli.json {
        save_json(path, &catalog).with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &cli.save_yaml {
        save_planets(path, &to_config(&catalog))?;
        info!(path = %path.display(), "catalog saved");
    }
    Ok(())
}

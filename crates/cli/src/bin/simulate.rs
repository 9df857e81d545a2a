use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use solar_launch_window::export::{positions, writer_for_path};
use solar_launch_window::orbits::playback::{LogScale, Playback};
use solar_launch_window::transfer::simulate_to_day;
use tracing::{debug, info};

#[path = "../shared.rs"]
#[allow(dead_code)]
mod shared;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Jump the system to a simulated day, or stream positions tick by tick"
)]
struct Cli {
    #[command(flatten)]
    source: shared::SourceArgs,

    /// Simulated days elapsed since the reference configuration
    #[arg(long, default_value_t = 0.0)]
    day: f64,

    /// Number of playback ticks to stream after the jump (0 prints angles only)
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Wall-clock seconds per tick
    #[arg(long, default_value_t = 0.05)]
    dt: f64,

    /// Simulated days per wall-clock second
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Compress radii and periods logarithmically for display
    #[arg(long, default_value_t = false)]
    log_scale: bool,

    /// Display radius of the innermost orbit (with --log-scale)
    #[arg(long, default_value_t = 30.0)]
    inner_radius: f64,

    /// Display radius of the outermost orbit (with --log-scale)
    #[arg(long, default_value_t = 300.0)]
    outer_radius: f64,

    /// Output CSV for the position stream (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    shared::init_tracing();
    let cli = Cli::parse();
    if !(cli.dt.is_finite() && cli.dt > 0.0) {
        bail!("--dt must be a positive number of seconds (got {})", cli.dt);
    }

    let mut catalog = cli.source.load_catalog()?;
    if cli.log_scale {
        let scale = LogScale::fit(&catalog, cli.inner_radius, cli.outer_radius, 30.0)
            .context("cannot fit a display scale to an empty catalog")?;
        catalog = scale.apply(&catalog);
        debug!(?scale, "display scale applied");
    }

    let angles = simulate_to_day(&mut catalog, cli.day)?;
    if cli.ticks == 0 {
        println!("Angular positions after {} days:", cli.day);
        for (name, angle) in &angles {
            println!("{name}: {angle:.6}°");
        }
        return Ok(());
    }

    let mut writer = writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    positions::write_header(&mut *writer)?;

    let mut playback = Playback::new([0.0, 0.0], cli.time_scale);
    let mut frame = Vec::with_capacity(catalog.len());
    for tick in 1..=cli.ticks {
        playback.tick(&mut catalog, cli.dt, &mut frame)?;
        let time = cli.day + playback.elapsed();
        for sample in &frame {
            let body = catalog
                .get(sample.body)
                .map(|planet| planet.name.as_str())
                .unwrap_or_default();
            positions::Record {
                tick,
                time,
                body,
                x: sample.x,
                y: sample.y,
            }
            .write_to(&mut *writer)?;
        }
    }
    writer.flush()?;
    info!(ticks = cli.ticks, elapsed = playback.elapsed(), "playback finished");
    Ok(())
}

//! Journey planning orchestrator that chains escape velocities, the launch window search, and
//! the travel report at the chosen window.

pub mod travel;
pub mod window;

use serde::Serialize;
use solar_orbits::{Catalog, OrbitError};
use solar_physics::{PhysicsConstants, PhysicsError, apply_escape_velocities};
use tracing::warn;

use self::travel::{TravelPlanner, TravelReport};
use self::window::{SearchControl, WindowError, WindowRequest, WindowSearchConfig, WindowSearchReport};

/// Outcome of planning a journey between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyPlan {
    pub window: WindowSearchReport,
    /// Travel report at the accepted window; `None` when no window was found or the window is
    /// too close for the travel profile (possible under the static policy).
    pub report: Option<TravelReport>,
    /// Angular position of every body at the window (or at the end of the horizon).
    pub angles: Vec<(String, f64)>,
}

/// Top-level journey planning error.
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    #[error("catalog error: {0}")]
    Orbit(#[from] OrbitError),
    #[error("physics error: {0}")]
    Physics(#[from] PhysicsError),
    #[error("window search failed: {0}")]
    Window(#[from] WindowError),
}

/// Inputs for an end-to-end journey.
#[derive(Debug, Clone)]
pub struct JourneyConfig<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub physics: PhysicsConstants,
    pub planner: TravelPlanner,
    pub search: WindowSearchConfig,
}

/// Find the launch window between two bodies and report the transfer at that window.
///
/// Escape velocities are computed first when any body still lacks one. The catalog is left at
/// the accepted window. The static policy never checks travel feasibility, so its window may be
/// closer than the burns need; the plan then carries the window with no report.
pub fn plan_journey(
    catalog: &mut Catalog,
    config: &JourneyConfig<'_>,
    control: &SearchControl,
) -> Result<JourneyPlan, JourneyError> {
    // resolve names before any work so a typo fails fast
    catalog.index_of(config.origin)?;
    catalog.index_of(config.destination)?;

    if catalog.iter().any(|p| p.escape_velocity_m_s.is_none()) {
        apply_escape_velocities(catalog, &config.physics)?;
    }

    let request = WindowRequest {
        origin: config.origin,
        destination: config.destination,
        planner: &config.planner,
        config: &config.search,
    };
    let window = window::find_launch_window(catalog, &request, control)?;

    let report = match window.best {
        Some(best) => {
            let origin = catalog.by_name(config.origin)?;
            let destination = catalog.by_name(config.destination)?;
            match config.planner.report(origin, destination) {
                Ok(report) => Some(report),
                Err(err @ PhysicsError::InfeasibleTravelWindow { .. }) => {
                    warn!(day = best.day, %err, "launch window too close for the travel profile");
                    None
                }
                Err(err) => return Err(err.into()),
            }
        }
        None => None,
    };

    Ok(JourneyPlan {
        window,
        report,
        angles: snapshot_angles(catalog),
    })
}

/// Jump every body to `day` simulated days and return the resulting angles.
pub fn simulate_to_day(catalog: &mut Catalog, day: f64) -> Result<Vec<(String, f64)>, OrbitError> {
    catalog.advance_all_to(day)?;
    Ok(snapshot_angles(catalog))
}

fn snapshot_angles(catalog: &Catalog) -> Vec<(String, f64)> {
    catalog
        .angles()
        .map(|(name, angle)| (name.to_string(), angle))
        .collect()
}

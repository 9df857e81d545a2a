//! Launch window search: step the whole system forward one day at a time and keep the closest
//! approach between two bodies whose connecting path is not blocked by a third body.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use solar_core::time::seconds_to_days;
use solar_orbits::geometry::{self, DEFAULT_OCCLUSION_TOLERANCE};
use solar_orbits::{Catalog, OrbitError};
use solar_physics::PhysicsError;
use tracing::{info, trace};

use super::travel::TravelPlanner;

/// How occlusion is checked for a candidate day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPolicy {
    /// Only the departure configuration is checked.
    Static,
    /// The departure configuration and every sub-step of the implied transit are checked.
    Moving,
}

/// Search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSearchConfig {
    pub horizon_days: u32,
    /// Simulated days already elapsed before day 1 of the search.
    pub epoch_days: f64,
    /// Transit sub-step for the moving policy, in seconds.
    pub substep_seconds: f64,
    /// Slack allowed when deciding that a body sits on the path.
    pub occlusion_tolerance: f64,
    pub policy: WindowPolicy,
}

impl Default for WindowSearchConfig {
    fn default() -> Self {
        Self {
            horizon_days: 3_650,
            epoch_days: 0.0,
            substep_seconds: 4_080.0,
            occlusion_tolerance: DEFAULT_OCCLUSION_TOLERANCE,
            policy: WindowPolicy::Static,
        }
    }
}

/// Cancellation flag and optional deadline, checked once per day and once per transit sub-step.
///
/// Clones share the flag, so a clone handed to another thread can stop a running search.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now. A timeout past the clock's range leaves no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Bodies and parameters of one search.
#[derive(Debug, Clone)]
pub struct WindowRequest<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub planner: &'a TravelPlanner,
    pub config: &'a WindowSearchConfig,
}

/// A rejected candidate day and the body that blocked it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstruction {
    pub day: u32,
    pub body: String,
    /// Seconds after departure at which the transit was blocked; `None` at departure.
    pub transit_offset_s: Option<f64>,
}

/// The accepted closest approach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchWindow {
    pub day: u32,
    pub distance_au: f64,
    /// Travel time used to validate the transit (moving policy only).
    pub travel_time_s: Option<f64>,
}

/// Result of a search. `best` is `None` when no day improved on the initial infinite distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSearchReport {
    pub origin: String,
    pub destination: String,
    pub policy: WindowPolicy,
    pub best: Option<LaunchWindow>,
    pub obstructions: Vec<Obstruction>,
    /// Candidate days rejected because the travel profile could not fit the distance.
    pub infeasible_days: Vec<u32>,
    pub days_evaluated: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error(transparent)]
    Orbit(#[from] OrbitError),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("origin and destination are both '{0}'")]
    SameBody(String),
    #[error("transit sub-step must be positive (got {0} s)")]
    InvalidSubstep(f64),
    #[error("search cancelled on day {day}")]
    Cancelled { day: u32 },
}

/// Search `request.config.horizon_days` days for the closest unobstructed configuration.
///
/// The catalog is advanced in place with absolute updates. On return it is positioned at the
/// accepted window, or at the last evaluated day when none was found. The moving policy runs its
/// transit sub-steps on a scratch copy allocated once per search, so the primary timeline is
/// never disturbed.
pub fn find_launch_window(
    catalog: &mut Catalog,
    request: &WindowRequest<'_>,
    control: &SearchControl,
) -> Result<WindowSearchReport, WindowError> {
    let from = catalog.index_of(request.origin)?;
    let to = catalog.index_of(request.destination)?;
    if from == to {
        return Err(WindowError::SameBody(request.origin.to_string()));
    }
    let config = request.config;
    if config.policy == WindowPolicy::Moving
        && !(config.substep_seconds.is_finite() && config.substep_seconds > 0.0)
    {
        return Err(WindowError::InvalidSubstep(config.substep_seconds));
    }

    let mut scratch = (config.policy == WindowPolicy::Moving).then(|| catalog.clone());
    let mut best: Option<LaunchWindow> = None;
    let mut best_distance = f64::INFINITY;
    let mut obstructions = Vec::new();
    let mut infeasible_days = Vec::new();
    let mut days_evaluated = 0;

    for day in 1..=config.horizon_days {
        if control.is_cancelled() {
            return Err(WindowError::Cancelled { day });
        }
        let elapsed = config.epoch_days + f64::from(day);
        catalog.advance_all_to(elapsed)?;
        days_evaluated = day;

        let bodies = catalog.as_slice();
        let distance = geometry::distance(&bodies[from], &bodies[to]);
        if distance >= best_distance {
            continue;
        }
        trace!(day, distance, "candidate window");

        if let Some(blocker) = geometry::first_occluder(bodies, from, to, config.occlusion_tolerance) {
            trace!(day, body = %bodies[blocker].name, "trajectory intersects body");
            obstructions.push(Obstruction {
                day,
                body: bodies[blocker].name.clone(),
                transit_offset_s: None,
            });
            continue;
        }

        let travel_time_s = match scratch.as_mut() {
            None => None,
            Some(scratch) => {
                let travel_time = match request.planner.travel_time(distance, &bodies[from], &bodies[to]) {
                    Ok(seconds) => seconds,
                    Err(PhysicsError::InfeasibleTravelWindow { .. }) => {
                        trace!(day, "travel profile does not fit; skipping");
                        infeasible_days.push(day);
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };
                let transit = Transit {
                    day,
                    departure_elapsed: elapsed,
                    travel_time_s: travel_time,
                    from,
                    to,
                };
                if let Some(obstruction) = transit.first_obstruction(scratch, catalog, config, control)? {
                    trace!(day, body = %obstruction.body, "transit intersects body");
                    obstructions.push(obstruction);
                    continue;
                }
                Some(travel_time)
            }
        };

        best_distance = distance;
        best = Some(LaunchWindow {
            day,
            distance_au: distance,
            travel_time_s,
        });
    }

    if let Some(window) = &best {
        catalog.advance_all_to(config.epoch_days + f64::from(window.day))?;
    }

    let origin = catalog.as_slice()[from].name.clone();
    let destination = catalog.as_slice()[to].name.clone();
    match &best {
        Some(window) => info!(
            %origin, %destination, day = window.day, distance_au = window.distance_au,
            obstructed = obstructions.len(), "launch window found"
        ),
        None => info!(%origin, %destination, days_evaluated, "no launch window within horizon"),
    }

    Ok(WindowSearchReport {
        origin,
        destination,
        policy: config.policy,
        best,
        obstructions,
        infeasible_days,
        days_evaluated,
    })
}

/// A candidate transit sub-stepped on a scratch catalog.
struct Transit {
    day: u32,
    departure_elapsed: f64,
    travel_time_s: f64,
    from: usize,
    to: usize,
}

impl Transit {
    fn first_obstruction(
        &self,
        scratch: &mut Catalog,
        primary: &Catalog,
        config: &WindowSearchConfig,
        control: &SearchControl,
    ) -> Result<Option<Obstruction>, WindowError> {
        let ticks = (self.travel_time_s / config.substep_seconds).round() as u64;
        scratch.clone_from(primary);
        for tick in 1..=ticks {
            if control.is_cancelled() {
                return Err(WindowError::Cancelled { day: self.day });
            }
            let offset_s = tick as f64 * config.substep_seconds;
            scratch.advance_all_to(self.departure_elapsed + seconds_to_days(offset_s))?;
            let bodies = scratch.as_slice();
            if let Some(blocker) = geometry::first_occluder(bodies, self.from, self.to, config.occlusion_tolerance) {
                return Ok(Some(Obstruction {
                    day: self.day,
                    body: bodies[blocker].name.clone(),
                    transit_offset_s: Some(offset_s),
                }));
            }
        }
        Ok(None)
    }
}

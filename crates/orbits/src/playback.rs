//! Continuous playback for display sinks and the logarithmic mapping used to fit a whole system
//! on screen.

use solar_core::time::days_to_years;
use solar_core::vector::Vector2;

use crate::OrbitError;
use crate::catalog::{Catalog, PositionSample};

/// Drives incremental updates from wall-clock deltas and emits one position frame per tick.
#[derive(Debug, Clone)]
pub struct Playback {
    center: Vector2,
    time_scale: f64,
    elapsed: f64,
}

impl Playback {
    /// `time_scale` converts wall-clock seconds into simulated time units.
    pub fn new(center: Vector2, time_scale: f64) -> Self {
        Self {
            center,
            time_scale,
            elapsed: 0.0,
        }
    }

    /// Simulated time accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Advance every body by `wall_delta_s` and overwrite `frame` with the new positions.
    pub fn tick(
        &mut self,
        catalog: &mut Catalog,
        wall_delta_s: f64,
        frame: &mut Vec<PositionSample>,
    ) -> Result<(), OrbitError> {
        let delta = wall_delta_s * self.time_scale;
        catalog.advance_all_by(delta)?;
        self.elapsed += delta;
        frame.clear();
        frame.extend(catalog.positions(&self.center));
        Ok(())
    }
}

/// Logarithmic radius and period compression for drawing a system whose orbits span two orders
/// of magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub period_factor: f64,
    log_min: f64,
    log_max: f64,
}

impl LogScale {
    /// Fit the radius mapping to the smallest and largest orbit in `catalog`.
    pub fn fit(catalog: &Catalog, inner_radius: f64, outer_radius: f64, period_factor: f64) -> Option<Self> {
        let (min, max) = catalog.iter().map(|p| p.orbital_radius_au).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((f64::min(lo, r), f64::max(hi, r))),
        })?;
        Some(Self {
            inner_radius,
            outer_radius,
            period_factor,
            // shifted by one so sub-AU orbits stay positive
            log_min: (min + 1.0).ln(),
            log_max: (max + 1.0).ln(),
        })
    }

    /// Display radius for an orbit of `radius_au`.
    pub fn radius(&self, radius_au: f64) -> f64 {
        let span = self.log_max - self.log_min;
        if span <= 0.0 {
            return self.outer_radius;
        }
        let ratio = ((radius_au + 1.0).ln() - self.log_min) / span;
        self.inner_radius + ratio * (self.outer_radius - self.inner_radius)
    }

    /// Display period for an orbit of `period_days`.
    pub fn period(&self, period_days: f64) -> f64 {
        self.period_factor * (days_to_years(period_days) + 1.0).ln()
    }

    /// Scaled copy of `catalog` with every body reset to the reference direction.
    pub fn apply(&self, catalog: &Catalog) -> Catalog {
        let mut scaled = catalog.clone();
        for planet in scaled.iter_mut() {
            planet.orbital_radius_au = self.radius(planet.orbital_radius_au);
            planet.orbital_period_days = planet.orbital_period_days.map(|p| self.period(p));
            planet.angular_position_deg = 0.0;
        }
        scaled
    }
}

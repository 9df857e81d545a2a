//! Point-to-point travel under an accelerate / cruise / decelerate rocket model.
//!
//! The rocket accelerates away from the origin until it reaches the larger of the two escape
//! velocities, cruises at that speed, and decelerates near the destination down to the smaller
//! one. Both burns use the same constant acceleration.

use std::fmt;

use serde::Serialize;
use solar_core::constants::AU_M;
use solar_core::{time, units};
use solar_orbits::PlanetRecord;
use solar_orbits::geometry;
use solar_physics::{Phase, PhysicsError, constant_acceleration_phase, stored_escape_velocity};
use solar_propulsion::Rocket;

/// Travel-time calculator bound to one rocket and one AU length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelPlanner {
    pub acceleration_m_s2: f64,
    pub au_m: f64,
}

impl TravelPlanner {
    pub fn new(rocket: &Rocket, au_m: f64) -> Self {
        Self {
            acceleration_m_s2: rocket.acceleration_m_s2(),
            au_m,
        }
    }

    /// Every phase of a transfer covering `distance_au` between `origin` and `destination`.
    pub fn profile(
        &self,
        distance_au: f64,
        origin: &PlanetRecord,
        destination: &PlanetRecord,
    ) -> Result<TravelProfile, PhysicsError> {
        let v_origin = stored_escape_velocity(origin)?;
        let v_destination = stored_escape_velocity(destination)?;
        let max_velocity = v_origin.max(v_destination);
        let min_velocity = v_origin.min(v_destination);

        let acceleration = constant_acceleration_phase(max_velocity, self.acceleration_m_s2)?;
        let deceleration = constant_acceleration_phase(min_velocity, self.acceleration_m_s2)?;

        let distance_m = units::au_to_m(distance_au, self.au_m);
        let required_m = acceleration.distance_m + deceleration.distance_m;
        let cruise_distance_m = distance_m - required_m;
        if !(cruise_distance_m >= 0.0) {
            return Err(PhysicsError::InfeasibleTravelWindow {
                distance_m,
                required_m,
            });
        }
        let cruise_time_s = cruise_distance_m / max_velocity;

        Ok(TravelProfile {
            distance_m,
            max_velocity_m_s: max_velocity,
            min_velocity_m_s: min_velocity,
            acceleration,
            deceleration,
            cruise_distance_m,
            cruise_time_s,
            total_time_s: cruise_time_s + acceleration.time_s + deceleration.time_s,
        })
    }

    /// Total travel time in seconds for `distance_au`.
    pub fn travel_time(
        &self,
        distance_au: f64,
        origin: &PlanetRecord,
        destination: &PlanetRecord,
    ) -> Result<f64, PhysicsError> {
        Ok(self.profile(distance_au, origin, destination)?.total_time_s)
    }

    /// Distance and travel report for the bodies' current positions.
    pub fn report(&self, origin: &PlanetRecord, destination: &PlanetRecord) -> Result<TravelReport, PhysicsError> {
        let distance_au = geometry::distance(origin, destination);
        let profile = self.profile(distance_au, origin, destination)?;
        Ok(TravelReport {
            origin: origin.name.clone(),
            destination: destination.name.clone(),
            distance_au,
            distance_km: units::m_to_km(profile.distance_m),
            acceleration_time_s: profile.acceleration.time_s,
            acceleration_distance_m: profile.acceleration.distance_m,
            cruise_distance_m: profile.cruise_distance_m,
            cruise_distance_au: units::m_to_au(profile.cruise_distance_m, self.au_m),
            deceleration_distance_m: profile.deceleration.distance_m,
            deceleration_time_s: profile.deceleration.time_s,
            total: TravelDuration::from_seconds(profile.total_time_s),
        })
    }
}

impl Default for TravelPlanner {
    fn default() -> Self {
        Self::new(&Rocket::default(), AU_M)
    }
}

/// Breakdown of a single transfer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelProfile {
    pub distance_m: f64,
    pub max_velocity_m_s: f64,
    pub min_velocity_m_s: f64,
    pub acceleration: Phase,
    pub deceleration: Phase,
    pub cruise_distance_m: f64,
    pub cruise_time_s: f64,
    pub total_time_s: f64,
}

/// A duration expressed in the units reports are read in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelDuration {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
}

impl TravelDuration {
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds,
            minutes: time::seconds_to_minutes(seconds),
            hours: time::seconds_to_hours(seconds),
            days: time::seconds_to_days(seconds),
        }
    }
}

/// Distance and timing summary between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelReport {
    pub origin: String,
    pub destination: String,
    pub distance_au: f64,
    pub distance_km: f64,
    pub acceleration_time_s: f64,
    pub acceleration_distance_m: f64,
    pub cruise_distance_m: f64,
    pub cruise_distance_au: f64,
    pub deceleration_distance_m: f64,
    pub deceleration_time_s: f64,
    pub total: TravelDuration,
}

impl fmt::Display for TravelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Distance between {} and {}: {:.6} AU ({:.3} km)",
            self.origin, self.destination, self.distance_au, self.distance_km
        )?;
        writeln!(
            f,
            "Cruising velocity reached after {:.3} s, {:.3} m ({:.3} km) from the surface of {}",
            self.acceleration_time_s,
            self.acceleration_distance_m,
            units::m_to_km(self.acceleration_distance_m),
            self.origin
        )?;
        writeln!(
            f,
            "Cruise: {:.3} m ({:.3} km, {:.3} AU)",
            self.cruise_distance_m,
            units::m_to_km(self.cruise_distance_m),
            self.cruise_distance_au
        )?;
        writeln!(
            f,
            "Deceleration starts {:.3} m ({:.3} km) from the surface of {} and lasts {:.3} s",
            self.deceleration_distance_m,
            units::m_to_km(self.deceleration_distance_m),
            self.destination,
            self.deceleration_time_s
        )?;
        write!(
            f,
            "Total travel time: {:.3} s, {:.3} min, {:.3} h, {:.3} days",
            self.total.seconds, self.total.minutes, self.total.hours, self.total.days
        )
    }
}

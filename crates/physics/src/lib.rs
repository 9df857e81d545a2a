//! Escape-velocity and constant-acceleration physics for surface departures.

use serde::Serialize;
use solar_core::constants::{GRAVITATIONAL_CONSTANT, REFERENCE_MASS_KG};
use solar_orbits::{Catalog, PlanetRecord};
use tracing::debug;

/// Constants feeding the escape-velocity formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    pub gravitational_constant: f64,
    /// Absolute mass of the reference body; every other mass is a multiple of it.
    pub reference_mass_kg: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            reference_mass_kg: REFERENCE_MASS_KG,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    #[error("planet '{name}' is missing {missing}")]
    IncompletePlanetData { name: String, missing: &'static str },
    #[error(
        "travel window infeasible: {distance_m:.3} m between bodies but accelerating and decelerating need {required_m:.3} m"
    )]
    InfeasibleTravelWindow { distance_m: f64, required_m: f64 },
    #[error("acceleration must be positive (got {0} m/s²)")]
    InvalidAcceleration(f64),
}

/// Time and distance covered while accelerating from rest to a target velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Phase {
    pub time_s: f64,
    pub distance_m: f64,
}

/// Constant-acceleration climb from rest to `velocity_m_s`: `t = v/a`, `d = a t² / 2`.
pub fn constant_acceleration_phase(velocity_m_s: f64, acceleration_m_s2: f64) -> Result<Phase, PhysicsError> {
    if !(acceleration_m_s2.is_finite() && acceleration_m_s2 > 0.0) {
        return Err(PhysicsError::InvalidAcceleration(acceleration_m_s2));
    }
    let time_s = velocity_m_s / acceleration_m_s2;
    Ok(Phase {
        time_s,
        distance_m: acceleration_m_s2 * time_s.powi(2) / 2.0,
    })
}

/// Absolute mass of `planet` in kilograms.
pub fn absolute_mass_kg(planet: &PlanetRecord, constants: &PhysicsConstants) -> Result<f64, PhysicsError> {
    let mass = if planet.is_reference {
        constants.reference_mass_kg
    } else {
        planet.mass_factor * constants.reference_mass_kg
    };
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(incomplete(planet, "a positive mass"))
    }
}

/// Surface escape velocity `sqrt(2 G M / r)` in m/s.
pub fn escape_velocity(planet: &PlanetRecord, constants: &PhysicsConstants) -> Result<f64, PhysicsError> {
    if !(planet.diameter_km.is_finite() && planet.diameter_km > 0.0) {
        return Err(incomplete(planet, "a positive diameter"));
    }
    let mass = absolute_mass_kg(planet, constants)?;
    Ok((2.0 * constants.gravitational_constant * mass / planet.radius_m()).sqrt())
}

/// Compute and store the escape velocity of every body in `catalog`.
pub fn apply_escape_velocities(catalog: &mut Catalog, constants: &PhysicsConstants) -> Result<(), PhysicsError> {
    for planet in catalog.iter_mut() {
        let velocity = escape_velocity(planet, constants)?;
        debug!(planet = %planet.name, velocity_m_s = velocity, "escape velocity");
        planet.escape_velocity_m_s = Some(velocity);
    }
    Ok(())
}

/// Escape velocity previously stored on `planet`.
pub fn stored_escape_velocity(planet: &PlanetRecord) -> Result<f64, PhysicsError> {
    planet
        .escape_velocity_m_s
        .ok_or_else(|| incomplete(planet, "an escape velocity (compute it first)"))
}

/// Leaving the surface at constant acceleration until escape velocity is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartureProfile {
    pub time_s: f64,
    pub distance_from_surface_m: f64,
    pub distance_from_center_m: f64,
}

/// Departure profile for `planet` under `acceleration_m_s2`.
pub fn departure_profile(planet: &PlanetRecord, acceleration_m_s2: f64) -> Result<DepartureProfile, PhysicsError> {
    let velocity = stored_escape_velocity(planet)?;
    let phase = constant_acceleration_phase(velocity, acceleration_m_s2)?;
    Ok(DepartureProfile {
        time_s: phase.time_s,
        distance_from_surface_m: phase.distance_m,
        distance_from_center_m: planet.radius_m() + phase.distance_m,
    })
}

fn incomplete(planet: &PlanetRecord, missing: &'static str) -> PhysicsError {
    PhysicsError::IncompletePlanetData {
        name: planet.name.clone(),
        missing,
    }
}

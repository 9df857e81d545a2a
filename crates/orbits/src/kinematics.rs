//! Angular-position updates for circular orbits.
//!
//! Two update modes exist. Absolute mode recomputes the angle from a total elapsed time and is
//! what day-stepped simulations and the window search use. Incremental mode adds the angle swept
//! during a time delta and drives continuous playback. Both mutate the record in place and return
//! the new angle.

use solar_core::constants::FULL_TURN_DEG;
use solar_core::vector::{self, Vector2};

use crate::OrbitError;
use crate::body::PlanetRecord;

/// Map any finite angle into `[0, 360)`.
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid of a tiny negative value rounds up to exactly 360
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}

/// Orbital period of `planet`, rejecting values that cannot serve as a divisor.
pub fn period_days(planet: &PlanetRecord) -> Result<f64, OrbitError> {
    match planet.orbital_period_days {
        Some(period) if period.is_finite() && period > 0.0 => Ok(period),
        other => Err(OrbitError::InvalidOrbitalData {
            name: planet.name.clone(),
            period: other,
        }),
    }
}

/// Angle a body reaches after `elapsed` time units from the reference direction.
pub fn angle_at(planet: &PlanetRecord, elapsed: f64) -> Result<f64, OrbitError> {
    let period = period_days(planet)?;
    check_time(elapsed)?;
    Ok(normalize_degrees(FULL_TURN_DEG * (elapsed / period)))
}

/// Absolute mode: set the angle from the total elapsed time.
pub fn advance(planet: &mut PlanetRecord, elapsed: f64) -> Result<f64, OrbitError> {
    let angle = angle_at(planet, elapsed)?;
    planet.angular_position_deg = angle;
    Ok(angle)
}

/// Incremental mode: add the angle swept during `delta`.
pub fn advance_by(planet: &mut PlanetRecord, delta: f64) -> Result<f64, OrbitError> {
    let period = period_days(planet)?;
    check_time(delta)?;
    let angle = normalize_degrees(planet.angular_position_deg + FULL_TURN_DEG * (delta / period));
    planet.angular_position_deg = angle;
    Ok(angle)
}

/// Cartesian position of the body on its orbit around `center`.
pub fn position(planet: &PlanetRecord, center: &Vector2) -> Vector2 {
    vector::from_polar(center, planet.orbital_radius_au, planet.angular_position_deg)
}

fn check_time(value: f64) -> Result<(), OrbitError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OrbitError::NonFiniteTime(value))
    }
}

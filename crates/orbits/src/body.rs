//! Per-planet record shared by every stage of the planner.

use serde::{Deserialize, Serialize};

/// A single body on a circular orbit.
///
/// Records are created from the planet data source (name, diameter, mass), enriched with
/// escape velocity and orbital data, and then mutated in place as simulated time advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub diameter_km: f64,
    /// Multiple of the reference mass, or kilograms when `is_reference` is set.
    pub mass_factor: f64,
    #[serde(default)]
    pub is_reference: bool,
    #[serde(default)]
    pub escape_velocity_m_s: Option<f64>,
    #[serde(default)]
    pub orbital_period_days: Option<f64>,
    #[serde(default)]
    pub orbital_radius_au: f64,
    #[serde(default)]
    pub angular_position_deg: f64,
}

impl PlanetRecord {
    /// Build a record from physical attributes; orbital data is filled in later.
    pub fn new(name: &str, diameter_km: f64, mass_factor: f64) -> Self {
        Self {
            name: normalize_name(name).to_string(),
            diameter_km,
            mass_factor,
            is_reference: false,
            escape_velocity_m_s: None,
            orbital_period_days: None,
            orbital_radius_au: 0.0,
            angular_position_deg: 0.0,
        }
    }

    /// Build the reference body; `mass_kg` is its absolute mass.
    pub fn reference(name: &str, diameter_km: f64, mass_kg: f64) -> Self {
        Self {
            is_reference: true,
            ..Self::new(name, diameter_km, mass_kg)
        }
    }

    /// Attach orbital period and radius.
    pub fn with_orbit(mut self, period_days: f64, radius_au: f64) -> Self {
        self.orbital_period_days = Some(period_days);
        self.orbital_radius_au = radius_au;
        self
    }

    /// Set the starting angular position.
    pub fn at_angle(mut self, angle_deg: f64) -> Self {
        self.angular_position_deg = crate::kinematics::normalize_degrees(angle_deg);
        self
    }

    /// Radius of the body itself in metres.
    pub fn radius_m(&self) -> f64 {
        solar_core::units::km_to_m(self.diameter_km / 2.0)
    }
}

/// Canonical form of a planet name: surrounding whitespace and trailing punctuation removed.
///
/// Data files label bodies as `Earth:`; every insertion and lookup goes through this.
pub fn normalize_name(name: &str) -> &str {
    name.trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
}

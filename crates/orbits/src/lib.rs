//! Planet catalog, circular-orbit kinematics, and inter-body geometry.
//!
//! Orbits are coplanar circles around a common origin with constant angular velocity,
//! so a body's state reduces to an orbital radius, a period, and an angular position.

pub mod body;
pub mod catalog;
pub mod geometry;
pub mod kinematics;
pub mod playback;

pub use body::{PlanetRecord, normalize_name};
pub use catalog::{Catalog, PositionSample};

/// Errors raised by catalog lookups and kinematic updates.
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    #[error("planet '{name}' has no usable orbital period (got {period:?})")]
    InvalidOrbitalData { name: String, period: Option<f64> },
    #[error("planet '{0}' not found in catalog")]
    UnknownPlanet(String),
    #[error("planet '{0}' is already present in the catalog")]
    DuplicatePlanet(String),
    #[error("simulated time must be finite (got {0})")]
    NonFiniteTime(f64),
}

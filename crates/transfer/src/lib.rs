//! Transfer façade crate consolidating journey planning and exposing supporting crates.

pub mod mission;

pub use facade::*;
pub use solar_physics as physics;
pub use solar_propulsion as propulsion;

mod facade;

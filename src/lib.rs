//! Launch window planner for a simplified, circular-orbit solar system.
//!
//! The engine lives in the workspace crates; this façade re-exports them and offers a couple of
//! loaders that wire the input boundary to a ready-to-use catalog, so front-ends (CLI, GUI, web)
//! share one entry point.

use std::path::Path;

pub use solar_config as config;
pub use solar_core as common;
pub use solar_export as export;
pub use solar_importer as importer;
pub use solar_orbits as orbits;
pub use solar_physics as physics;
pub use solar_propulsion as propulsion;
pub use solar_transfer as transfer;

use solar_orbits::{Catalog, OrbitError};

/// Errors raised while assembling a catalog from files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] solar_config::ConfigError),
    #[error(transparent)]
    Import(#[from] solar_importer::ImportError),
    #[error(transparent)]
    Catalog(#[from] OrbitError),
}

/// Load the flat-text planet data file and merge the orbital data file into it.
pub fn load_text_catalog<P, Q>(planets: P, orbits: Q) -> Result<Catalog, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut catalog = importer::load_planetary_data(planets)?;
    importer::load_orbital_data(orbits, &mut catalog)?;
    Ok(catalog)
}

/// Load a structured (YAML/TOML) catalog.
pub fn load_structured_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Error> {
    let configs = config::load_planets(path)?;
    Ok(transfer::catalog::from_config(&configs)?)
}

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Configuration models and loaders for the launch window planner.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solar_core::constants::{AU_M, GRAVITATIONAL_CONSTANT, REFERENCE_MASS_KG};
use thiserror::Error;

/// Planet entry of a structured catalog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlanetConfig {
    pub name: String,
    pub diameter_km: f64,
    /// Multiple of the reference mass, or kilograms for the reference body.
    pub mass_factor: f64,
    #[serde(default)]
    pub reference: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_period_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_radius_au: Option<f64>,
}

/// Complete simulation settings; every section and field falls back to its default.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub rocket: RocketConfig,
    pub search: SearchConfig,
}

/// Physical constants.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: f64,
    pub reference_mass_kg: f64,
    pub au_m: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            reference_mass_kg: REFERENCE_MASS_KG,
            au_m: AU_M,
        }
    }
}

/// Rocket used for every transfer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RocketConfig {
    pub engines: u32,
    pub acceleration_per_engine_m_s2: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            engines: 4,
            acceleration_per_engine_m_s2: 10.0,
        }
    }
}

/// Launch window search parameters.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub horizon_days: u32,
    /// Simulated days already elapsed when the search starts.
    pub epoch_days: f64,
    pub substep_seconds: f64,
    pub occlusion_tolerance_au: f64,
    pub policy: PolicyConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            horizon_days: 3_650,
            epoch_days: 36_500.0,
            substep_seconds: 4_080.0,
            occlusion_tolerance_au: 1e-9,
            policy: PolicyConfig::Moving,
        }
    }
}

/// Occlusion policy selector.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolicyConfig {
    Static,
    #[default]
    Moving,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialize TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Load planet entries from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_planets<P: AsRef<Path>>(path: P) -> Result<Vec<PlanetConfig>, ConfigError> {
    load_records(path)
}

/// Write planet entries as a YAML sequence.
pub fn save_planets<P: AsRef<Path>>(path: P, planets: &[PlanetConfig]) -> Result<(), ConfigError> {
    let writer = File::create(path)?;
    serde_yaml::to_writer(writer, planets)?;
    Ok(())
}

/// Load simulation settings from a TOML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_settings(&contents)
}

/// Parse simulation settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<SimulationConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Render simulation settings as TOML text.
pub fn render_settings(config: &SimulationConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

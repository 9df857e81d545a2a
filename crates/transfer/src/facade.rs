//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::travel::{TravelDuration, TravelPlanner, TravelProfile, TravelReport};
pub use crate::mission::window::{
    LaunchWindow, Obstruction, SearchControl, WindowError, WindowPolicy, WindowRequest,
    WindowSearchConfig, WindowSearchReport, find_launch_window,
};
pub use crate::mission::{JourneyConfig, JourneyError, JourneyPlan, plan_journey, simulate_to_day};
pub use solar_physics::PhysicsConstants;
pub use solar_propulsion::Rocket;

pub mod settings {
    use solar_config::{PolicyConfig, SimulationConfig};
    use solar_physics::PhysicsConstants;
    use solar_propulsion::Rocket;

    use crate::mission::JourneyConfig;
    use crate::mission::travel::TravelPlanner;
    use crate::mission::window::{WindowPolicy, WindowSearchConfig};

    /// Runtime form of the simulation settings.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PlannerSettings {
        pub physics: PhysicsConstants,
        pub rocket: Rocket,
        pub au_m: f64,
        pub search: WindowSearchConfig,
    }

    impl PlannerSettings {
        pub fn planner(&self) -> TravelPlanner {
            TravelPlanner::new(&self.rocket, self.au_m)
        }

        /// Journey inputs for a pair of bodies under these settings.
        pub fn journey<'a>(&self, origin: &'a str, destination: &'a str) -> JourneyConfig<'a> {
            JourneyConfig {
                origin,
                destination,
                physics: self.physics,
                planner: self.planner(),
                search: self.search.clone(),
            }
        }
    }

    impl Default for PlannerSettings {
        fn default() -> Self {
            from_config(&SimulationConfig::default())
        }
    }

    /// Convert a `SimulationConfig` into runtime settings.
    pub fn from_config(config: &SimulationConfig) -> PlannerSettings {
        PlannerSettings {
            physics: PhysicsConstants {
                gravitational_constant: config.physics.gravitational_constant,
                reference_mass_kg: config.physics.reference_mass_kg,
            },
            rocket: Rocket::new(config.rocket.engines, config.rocket.acceleration_per_engine_m_s2),
            au_m: config.physics.au_m,
            search: WindowSearchConfig {
                horizon_days: config.search.horizon_days,
                epoch_days: config.search.epoch_days,
                substep_seconds: config.search.substep_seconds,
                occlusion_tolerance: config.search.occlusion_tolerance_au,
                policy: match config.search.policy {
                    PolicyConfig::Static => WindowPolicy::Static,
                    PolicyConfig::Moving => WindowPolicy::Moving,
                },
            },
        }
    }
}

pub mod catalog {
    use solar_config::PlanetConfig;
    use solar_orbits::{Catalog, OrbitError, PlanetRecord};

    /// Convert a `PlanetConfig` into a runtime record.
    pub fn record_from_config(config: &PlanetConfig) -> PlanetRecord {
        let mut record = if config.reference {
            PlanetRecord::reference(&config.name, config.diameter_km, config.mass_factor)
        } else {
            PlanetRecord::new(&config.name, config.diameter_km, config.mass_factor)
        };
        record.orbital_period_days = config.orbital_period_days;
        record.orbital_radius_au = config.orbital_radius_au.unwrap_or(0.0);
        record
    }

    /// Build a catalog from structured planet entries.
    pub fn from_config(configs: &[PlanetConfig]) -> Result<Catalog, OrbitError> {
        Catalog::from_records(configs.iter().map(record_from_config))
    }

    /// Structured entries for every body in `catalog`.
    pub fn to_config(catalog: &Catalog) -> Vec<PlanetConfig> {
        catalog
            .iter()
            .map(|planet| PlanetConfig {
                name: planet.name.clone(),
                diameter_km: planet.diameter_km,
                mass_factor: planet.mass_factor,
                reference: planet.is_reference,
                orbital_period_days: planet.orbital_period_days,
                orbital_radius_au: (planet.orbital_period_days.is_some()
                    || planet.orbital_radius_au != 0.0)
                    .then_some(planet.orbital_radius_au),
            })
            .collect()
    }
}

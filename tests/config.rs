use std::fs;

use solar_launch_window::config::{
    PlanetConfig, PolicyConfig, SimulationConfig, load_planets, load_settings, parse_settings, render_settings,
    save_planets,
};
use solar_launch_window::transfer::WindowPolicy;
use solar_launch_window::transfer::catalog::{from_config, to_config};
use solar_launch_window::transfer::settings;

#[test]
fn empty_settings_fall_back_to_defaults() {
    let config = parse_settings("").unwrap();
    assert_eq!(config, SimulationConfig::default());
    assert_eq!(config.rocket.engines, 4);
    assert_eq!(config.search.epoch_days, 36_500.0);
    assert_eq!(config.search.substep_seconds, 4_080.0);
    assert_eq!(config.search.policy, PolicyConfig::Moving);
}

#[test]
fn partial_settings_override_only_named_fields() {
    let config = parse_settings(
        r#"
[rocket]
engines = 2

[search]
policy = "static"
horizon_days = 10
"#,
    )
    .unwrap();
    assert_eq!(config.rocket.engines, 2);
    assert_eq!(config.rocket.acceleration_per_engine_m_s2, 10.0);
    assert_eq!(config.search.policy, PolicyConfig::Static);
    assert_eq!(config.search.horizon_days, 10);
    assert_eq!(config.physics, SimulationConfig::default().physics);

    let runtime = settings::from_config(&config);
    assert_eq!(runtime.rocket.acceleration_m_s2(), 20.0);
    assert_eq!(runtime.search.policy, WindowPolicy::Static);
    assert_eq!(runtime.planner().acceleration_m_s2, 20.0);
}

#[test]
fn rendered_settings_parse_back() {
    let mut config = SimulationConfig::default();
    config.search.occlusion_tolerance_au = 1e-6;
    config.physics.reference_mass_kg = 6e24;
    let text = render_settings(&config).unwrap();
    assert_eq!(parse_settings(&text).unwrap(), config);
}

#[test]
fn bundled_settings_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/simulation.toml");
    let config = load_settings(path).unwrap();
    assert_eq!(config, SimulationConfig::default());
}

#[test]
fn bundled_yaml_catalog_marks_reference_body() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.yaml");
    let catalog = solar_launch_window::load_structured_catalog(path).unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.reference_body().unwrap().name, "Earth");
    assert_eq!(catalog.by_name("Jupiter").unwrap().orbital_period_days, Some(4333.0));
}

#[test]
fn yaml_catalog_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    let planets = vec![
        PlanetConfig {
            name: "Earth".into(),
            diameter_km: 12742.0,
            mass_factor: 5.972e24,
            reference: true,
            orbital_period_days: Some(365.0),
            orbital_radius_au: Some(1.0),
        },
        PlanetConfig {
            name: "Ceres".into(),
            diameter_km: 939.0,
            mass_factor: 0.00016,
            reference: false,
            orbital_period_days: None,
            orbital_radius_au: None,
        },
    ];
    save_planets(&path, &planets).unwrap();
    let loaded = load_planets(&path).unwrap();
    assert_eq!(loaded, planets);

    let catalog = from_config(&loaded).unwrap();
    assert!(catalog.by_name("Earth").unwrap().is_reference);
    assert_eq!(catalog.by_name("Ceres").unwrap().orbital_period_days, None);
    assert_eq!(to_config(&catalog), planets);
}

#[test]
fn toml_directory_holds_one_planet_per_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("mars.toml"),
        "name = \"Mars\"\ndiameter_km = 6779.0\nmass_factor = 0.107\norbital_period_days = 687.0\norbital_radius_au = 1.52\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("venus.toml"),
        "name = \"Venus\"\ndiameter_km = 12104.0\nmass_factor = 0.815\n",
    )
    .unwrap();
    let mut planets = load_planets(dir.path()).unwrap();
    planets.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].orbital_radius_au, Some(1.52));
    assert_eq!(planets[1].orbital_period_days, None);
}

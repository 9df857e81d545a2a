use solar_launch_window::orbits::kinematics::{advance, advance_by, angle_at, normalize_degrees, position};
use solar_launch_window::orbits::{Catalog, OrbitError, PlanetRecord};

fn approx(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
}

#[test]
fn half_orbit_after_two_and_a_half_periods() {
    let mut planet = PlanetRecord::new("Earth", 12742.0, 1.0).with_orbit(365.0, 1.0);
    let angle = advance(&mut planet, 2.5 * 365.0).expect("advance");
    approx(angle, 180.0, 1e-9);
    approx(planet.angular_position_deg, 180.0, 1e-9);
}

#[test]
fn whole_periods_return_to_reference_direction() {
    let planet = PlanetRecord::new("Mars", 6779.0, 0.107).with_orbit(687.0, 1.52);
    assert_eq!(angle_at(&planet, 687.0).unwrap(), 0.0);
    assert_eq!(angle_at(&planet, 3.0 * 687.0).unwrap(), 0.0);
    assert_eq!(angle_at(&planet, 0.0).unwrap(), 0.0);
}

#[test]
fn normalization_stays_in_range() {
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(720.0), 0.0);
    approx(normalize_degrees(-90.0), 270.0, 1e-12);
    assert_eq!(normalize_degrees(-1e-18), 0.0);
    for raw in [-1234.5, -0.25, 0.0, 59.9, 359.999, 1e6] {
        let angle = normalize_degrees(raw);
        assert!((0.0..360.0).contains(&angle), "{raw} -> {angle}");
    }
}

#[test]
fn incremental_mode_accumulates() {
    let mut planet = PlanetRecord::new("Venus", 12104.0, 0.815).with_orbit(225.0, 0.72);
    for _ in 0..9 {
        advance_by(&mut planet, 25.0).unwrap();
    }
    // nine steps of 40 degrees
    assert!(planet.angular_position_deg < 1e-9 || planet.angular_position_deg > 360.0 - 1e-9);

    let mut stepped = PlanetRecord::new("Venus", 12104.0, 0.815).with_orbit(225.0, 0.72);
    advance_by(&mut stepped, 50.0).unwrap();
    advance_by(&mut stepped, 50.0).unwrap();
    approx(stepped.angular_position_deg, angle_at(&stepped, 100.0).unwrap(), 1e-9);
}

#[test]
fn zero_or_missing_period_is_rejected() {
    let mut zero = PlanetRecord::new("Sun", 1_392_700.0, 333_000.0).with_orbit(0.0, 0.0);
    assert!(matches!(
        advance(&mut zero, 10.0),
        Err(OrbitError::InvalidOrbitalData { period: Some(p), .. }) if p == 0.0
    ));

    let mut missing = PlanetRecord::new("Rogue", 1000.0, 0.01);
    assert!(matches!(
        advance(&mut missing, 10.0),
        Err(OrbitError::InvalidOrbitalData { period: None, .. })
    ));
}

#[test]
fn non_finite_time_is_rejected() {
    let mut planet = PlanetRecord::new("Earth", 12742.0, 1.0).with_orbit(365.0, 1.0);
    assert!(matches!(advance(&mut planet, f64::NAN), Err(OrbitError::NonFiniteTime(_))));
    assert!(matches!(advance_by(&mut planet, f64::INFINITY), Err(OrbitError::NonFiniteTime(_))));
    assert_eq!(planet.angular_position_deg, 0.0);
}

#[test]
fn failed_catalog_update_leaves_every_body_untouched() {
    let mut catalog = Catalog::from_records([
        PlanetRecord::new("Earth", 12742.0, 1.0).with_orbit(365.0, 1.0),
        PlanetRecord::new("Broken", 1000.0, 0.1).with_orbit(-5.0, 2.0),
    ])
    .unwrap();
    assert!(catalog.advance_all_to(100.0).is_err());
    assert!(catalog.iter().all(|p| p.angular_position_deg == 0.0));
}

#[test]
fn position_follows_polar_convention() {
    let planet = PlanetRecord::new("Earth", 12742.0, 1.0)
        .with_orbit(365.0, 2.0)
        .at_angle(90.0);
    let [x, y] = position(&planet, &[10.0, -5.0]);
    approx(x, 10.0, 1e-12);
    approx(y, -3.0, 1e-12);
}

#[test]
fn short_period_reaches_opposite_side() {
    let mut planet = PlanetRecord::new("Quick", 1000.0, 0.1).with_orbit(10.0, 0.3);
    assert_eq!(advance(&mut planet, 25.0).unwrap(), 180.0);
}

#[test]
fn absolute_mode_is_linear_in_time() {
    let planet = PlanetRecord::new("Mars", 6779.0, 0.107).with_orbit(687.0, 1.52);
    for (t1, t2) in [(10.0, 20.0), (100.5, 250.25), (600.0, 700.0)] {
        let whole = angle_at(&planet, t1 + t2).unwrap();
        let split = normalize_degrees(angle_at(&planet, t1).unwrap() + angle_at(&planet, t2).unwrap());
        let diff = (whole - split).abs();
        assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "t1={t1} t2={t2}: {whole} vs {split}");
    }
}

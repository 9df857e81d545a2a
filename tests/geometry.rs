use solar_launch_window::orbits::PlanetRecord;
use solar_launch_window::orbits::geometry::{DEFAULT_OCCLUSION_TOLERANCE, distance, first_occluder, occludes};

fn body(name: &str, radius: f64, angle: f64) -> PlanetRecord {
    PlanetRecord::new(name, 1000.0, 1.0)
        .with_orbit(365.0, radius)
        .at_angle(angle)
}

#[test]
fn aligned_bodies_differ_by_radius() {
    let earth = body("Earth", 1.0, 0.0);
    let mars = body("Mars", 1.52, 0.0);
    assert!((distance(&earth, &mars) - 0.52).abs() < 1e-12);
    assert_eq!(distance(&earth, &mars), distance(&mars, &earth));
}

#[test]
fn opposite_bodies_sum_their_radii() {
    let earth = body("Earth", 1.0, 0.0);
    let mars = body("Mars", 1.52, 180.0);
    assert!((distance(&earth, &mars) - 2.52).abs() < 1e-12);
}

#[test]
fn quarter_turn_uses_pythagoras() {
    let a = body("A", 3.0, 0.0);
    let b = body("B", 4.0, 90.0);
    assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
}

#[test]
fn body_between_aligned_pair_occludes() {
    let a = body("A", 1.0, 0.0);
    let b = body("B", 2.0, 0.0);
    let c = body("C", 3.0, 0.0);
    assert!(occludes(&a, &c, &b, DEFAULT_OCCLUSION_TOLERANCE));
    // beyond the segment
    assert!(!occludes(&a, &b, &c, DEFAULT_OCCLUSION_TOLERANCE));
}

#[test]
fn body_off_the_segment_does_not_occlude() {
    let a = body("A", 1.0, 0.0);
    let c = body("C", 3.0, 0.0);
    let off = body("Off", 2.0, 30.0);
    assert!(!occludes(&a, &c, &off, DEFAULT_OCCLUSION_TOLERANCE));
    // crossing the sun on the far side
    let across = body("Across", 1.0, 180.0);
    let inner = body("Inner", 0.5, 0.0);
    assert!(occludes(&a, &across, &inner, DEFAULT_OCCLUSION_TOLERANCE));
}

#[test]
fn first_occluder_skips_endpoints_and_reports_index() {
    let bodies = vec![
        body("Inner", 1.0, 0.0),
        body("Far", 5.0, 90.0),
        body("Middle", 2.0, 0.0),
        body("Outer", 3.0, 0.0),
    ];
    assert_eq!(first_occluder(&bodies, 0, 3, DEFAULT_OCCLUSION_TOLERANCE), Some(2));
    assert_eq!(first_occluder(&bodies, 0, 2, DEFAULT_OCCLUSION_TOLERANCE), None);
    assert_eq!(first_occluder(&bodies[..2], 0, 1, DEFAULT_OCCLUSION_TOLERANCE), None);
}

#[test]
fn distance_is_symmetric_off_axis() {
    let radii = [0.39, 0.72, 1.0, 1.52, 5.2, 9.54, 19.2, 30.06, 39.5];
    let mut pairs = 0;
    for (i, &r1) in radii.iter().enumerate() {
        for &r2 in &radii[i..] {
            for step in 0..24 {
                let a1 = step as f64 * 15.0 + 0.25;
                let a2 = (step as f64 * 37.0 + 101.5) % 360.0;
                let p1 = body("P1", r1, a1);
                let p2 = body("P2", r2, a2);
                assert_ne!(p1.angular_position_deg, p2.angular_position_deg);
                assert_eq!(distance(&p1, &p2), distance(&p2, &p1), "r1={r1} a1={a1} r2={r2} a2={a2}");
                pairs += 1;
            }
        }
    }
    assert!(pairs > 1_000);
}

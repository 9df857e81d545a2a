//! Distances between bodies and the line-of-sight occlusion test.

use solar_core::vector::{self, Vector2};

use crate::body::PlanetRecord;
use crate::kinematics::position;

const ORIGIN: Vector2 = [0.0, 0.0];

/// Default slack, in orbital-radius units, when deciding that a body sits on a transfer path.
pub const DEFAULT_OCCLUSION_TOLERANCE: f64 = 1e-9;

/// Straight-line distance between two bodies orbiting a common origin.
///
/// Bodies sharing an angular position are collinear with the origin, so the distance is the
/// difference of their radii; this branch is exact and skips the trigonometry.
pub fn distance(p1: &PlanetRecord, p2: &PlanetRecord) -> f64 {
    if p1.angular_position_deg == p2.angular_position_deg {
        return (p2.orbital_radius_au - p1.orbital_radius_au).abs();
    }
    let a = position(p1, &ORIGIN);
    let b = position(p2, &ORIGIN);
    vector::norm(&vector::sub(&b, &a))
}

/// Whether `candidate` lies on the segment joining `a` and `b`.
///
/// A point on the segment makes the triangle inequality tight, so the detour through the
/// candidate exceeds the direct distance by no more than `tolerance`.
pub fn occludes(a: &PlanetRecord, b: &PlanetRecord, candidate: &PlanetRecord, tolerance: f64) -> bool {
    let direct = distance(a, b);
    let detour = distance(a, candidate) + distance(b, candidate);
    detour - direct <= tolerance
}

/// First body (other than `from` and `to`) blocking the path between them.
pub fn first_occluder(
    bodies: &[PlanetRecord],
    from: usize,
    to: usize,
    tolerance: f64,
) -> Option<usize> {
    let (a, b) = (&bodies[from], &bodies[to]);
    bodies
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != from && *idx != to)
        .find(|(_, body)| occludes(a, b, body, tolerance))
        .map(|(idx, _)| idx)
}

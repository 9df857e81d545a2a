//! Core units, constants, and shared primitives for the launch window planner workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (N·m²/kg²).
    pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;
    /// Mass of the reference body (Earth) in kilograms.
    pub const REFERENCE_MASS_KG: f64 = 5.972e24;
    /// Metres per astronomical unit.
    pub const AU_M: f64 = 149_597_870_700.0;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per (simulated) year.
    pub const DAYS_PER_YEAR: f64 = 365.0;
    /// Degrees in one full revolution.
    pub const FULL_TURN_DEG: f64 = 360.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert astronomical units to metres using the supplied AU length.
    #[inline]
    pub fn au_to_m(v: f64, au_m: f64) -> f64 {
        v * au_m
    }

    /// Convert metres to astronomical units using the supplied AU length.
    #[inline]
    pub fn m_to_au(v: f64, au_m: f64) -> f64 {
        v / au_m
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(seconds: f64) -> f64 {
        seconds / 60.0
    }

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / 3_600.0
    }

    /// Convert days to (365-day) years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}

/// Minimal planar vector helpers; orbits are coplanar circles so two components suffice.
pub mod vector {
    /// Alias for a 2D vector in whatever length unit the caller works in.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
        a[0] * b[0] + a[1] * b[1]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Polar to Cartesian conversion around `center`, angle in degrees.
    #[inline]
    pub fn from_polar(center: &Vector2, radius: f64, angle_deg: f64) -> Vector2 {
        let theta = angle_deg.to_radians();
        [center[0] + radius * theta.cos(), center[1] + radius * theta.sin()]
    }
}

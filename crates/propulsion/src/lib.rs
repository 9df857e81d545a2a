//! Rocket descriptor used by the constant-acceleration travel model.

/// Engines fired together, each contributing the same acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rocket {
    pub engines: u32,
    pub acceleration_per_engine_m_s2: f64,
}

impl Rocket {
    pub fn new(engines: u32, acceleration_per_engine_m_s2: f64) -> Self {
        Self {
            engines,
            acceleration_per_engine_m_s2,
        }
    }

    /// Combined acceleration of all engines (m/s²).
    pub fn acceleration_m_s2(&self) -> f64 {
        f64::from(self.engines) * self.acceleration_per_engine_m_s2
    }
}

impl Default for Rocket {
    /// Four engines at 10 m/s² each.
    fn default() -> Self {
        Self::new(4, 10.0)
    }
}

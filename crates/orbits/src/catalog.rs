//! Owned collection of planet records with name-based lookup and whole-system updates.

use serde::{Deserialize, Serialize};
use solar_core::vector::Vector2;
use tracing::debug;

use crate::OrbitError;
use crate::body::{PlanetRecord, normalize_name};
use crate::kinematics;

/// Position of one body at the current simulated instant, keyed by catalog index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    pub body: usize,
    pub x: f64,
    pub y: f64,
}

/// The working set of bodies for a session.
///
/// Names are unique after normalization. Searches take the catalog by `&mut` so only one writer
/// advances it at a time; what-if runs should work on a `clone()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlanetRecord>", into = "Vec<PlanetRecord>")]
pub struct Catalog {
    planets: Vec<PlanetRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate names.
    pub fn from_records<I>(records: I) -> Result<Self, OrbitError>
    where
        I: IntoIterator<Item = PlanetRecord>,
    {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// Add a record; its name is normalized first.
    pub fn insert(&mut self, mut record: PlanetRecord) -> Result<usize, OrbitError> {
        let normalized = normalize_name(&record.name);
        if normalized.len() != record.name.len() {
            record.name = normalized.to_string();
        }
        if self.position_of(&record.name).is_some() {
            return Err(OrbitError::DuplicatePlanet(record.name));
        }
        self.planets.push(record);
        Ok(self.planets.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn as_slice(&self) -> &[PlanetRecord] {
        &self.planets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanetRecord> {
        self.planets.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, PlanetRecord> {
        self.planets.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&PlanetRecord> {
        self.planets.get(index)
    }

    /// Index of the body called `name` (normalized before comparison).
    pub fn index_of(&self, name: &str) -> Result<usize, OrbitError> {
        self.position_of(normalize_name(name))
            .ok_or_else(|| OrbitError::UnknownPlanet(name.to_string()))
    }

    pub fn by_name(&self, name: &str) -> Result<&PlanetRecord, OrbitError> {
        let idx = self.index_of(name)?;
        Ok(&self.planets[idx])
    }

    pub fn by_name_mut(&mut self, name: &str) -> Result<&mut PlanetRecord, OrbitError> {
        let idx = self.index_of(name)?;
        Ok(&mut self.planets[idx])
    }

    /// The body flagged as the mass reference, if any.
    pub fn reference_body(&self) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.is_reference)
    }

    /// Attach orbital data to a named body. Unknown names are ignored and reported as `false`.
    pub fn apply_orbital_data(&mut self, name: &str, period_days: f64, radius_au: f64) -> bool {
        match self.position_of(normalize_name(name)) {
            Some(idx) => {
                let planet = &mut self.planets[idx];
                planet.orbital_period_days = Some(period_days);
                planet.orbital_radius_au = radius_au;
                true
            }
            None => {
                debug!(name, "orbital data has no matching planet; skipping");
                false
            }
        }
    }

    /// Absolute mode for every body. Nothing is modified unless every period is usable.
    pub fn advance_all_to(&mut self, elapsed: f64) -> Result<(), OrbitError> {
        self.validate_periods()?;
        for planet in &mut self.planets {
            kinematics::advance(planet, elapsed)?;
        }
        Ok(())
    }

    /// Incremental mode for every body. Nothing is modified unless every period is usable.
    pub fn advance_all_by(&mut self, delta: f64) -> Result<(), OrbitError> {
        self.validate_periods()?;
        for planet in &mut self.planets {
            kinematics::advance_by(planet, delta)?;
        }
        Ok(())
    }

    /// Current Cartesian position of every body around `center`.
    pub fn positions<'a>(&'a self, center: &'a Vector2) -> impl Iterator<Item = PositionSample> + 'a {
        self.planets.iter().enumerate().map(move |(body, planet)| {
            let [x, y] = kinematics::position(planet, center);
            PositionSample { body, x, y }
        })
    }

    /// `(name, angle)` pairs in catalog order.
    pub fn angles(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.planets
            .iter()
            .map(|p| (p.name.as_str(), p.angular_position_deg))
    }

    fn position_of(&self, normalized: &str) -> Option<usize> {
        self.planets.iter().position(|p| p.name == normalized)
    }

    fn validate_periods(&self) -> Result<(), OrbitError> {
        for planet in &self.planets {
            kinematics::period_days(planet)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<PlanetRecord>> for Catalog {
    type Error = OrbitError;

    fn try_from(records: Vec<PlanetRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<Catalog> for Vec<PlanetRecord> {
    fn from(catalog: Catalog) -> Self {
        catalog.planets
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PlanetRecord;
    type IntoIter = std::slice::Iter<'a, PlanetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.planets.iter()
    }
}

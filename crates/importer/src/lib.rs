//! Flat-text planet and orbital data import utilities.
//!
//! Both files hold one body per line: a `Name:` label followed by `key = value unit` groups.
//!
//! ```text
//! Earth: diameter = 12742 km mass = 5.972e24 kg
//! Mars: diameter = 6779 km mass = 0.107 Earths
//! ```
//!
//! ```text
//! Earth: period = 365 days orbital radius = 1 AU
//! ```
//!
//! A mass given in `kg` marks the reference body; every other mass is a multiple of it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use solar_orbits::{Catalog, OrbitError, PlanetRecord, normalize_name};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Catalog(#[from] OrbitError),
}

/// Outcome of merging orbital data into a catalog.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrbitalImport {
    pub matched: usize,
    pub unmatched: Vec<String>,
}

/// Read planet records from a planet data file.
pub fn load_planetary_data<P: AsRef<Path>>(path: P) -> Result<Catalog, ImportError> {
    read_planetary_data(BufReader::new(File::open(path)?))
}

/// Merge an orbital data file into `catalog`.
pub fn load_orbital_data<P: AsRef<Path>>(path: P, catalog: &mut Catalog) -> Result<OrbitalImport, ImportError> {
    read_orbital_data(BufReader::new(File::open(path)?), catalog)
}

/// Parse planet records (name, diameter, mass) into a fresh catalog.
pub fn read_planetary_data<R: BufRead>(reader: R) -> Result<Catalog, ImportError> {
    let mut catalog = Catalog::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let number = idx + 1;
        let Some(tokens) = tokenize(&line) else {
            continue;
        };
        let name = tokens[0];
        let (diameter, _) = required(&tokens, &["diameter"], number)?;
        let (mass, unit) = required(&tokens, &["mass"], number)?;
        let record = if unit.is_some_and(|u| u.eq_ignore_ascii_case("kg")) {
            PlanetRecord::reference(name, diameter, mass)
        } else {
            PlanetRecord::new(name, diameter, mass)
        };
        catalog.insert(record)?;
    }
    debug!(planets = catalog.len(), "planet data imported");
    Ok(catalog)
}

/// Merge orbital period and radius into matching catalog entries; unknown names are skipped.
pub fn read_orbital_data<R: BufRead>(reader: R, catalog: &mut Catalog) -> Result<OrbitalImport, ImportError> {
    let mut outcome = OrbitalImport::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let number = idx + 1;
        let Some(tokens) = tokenize(&line) else {
            continue;
        };
        let (period, _) = required(&tokens, &["period"], number)?;
        let (radius, _) = required(&tokens, &["orbital", "radius"], number)?;
        if catalog.apply_orbital_data(tokens[0], period, radius) {
            outcome.matched += 1;
        } else {
            outcome.unmatched.push(normalize_name(tokens[0]).to_string());
        }
    }
    Ok(outcome)
}

/// Write the planet data file for `catalog`.
pub fn write_planetary_data<W: Write>(catalog: &Catalog, mut writer: W) -> io::Result<()> {
    for planet in catalog {
        check_name(&planet.name)?;
        let unit = if planet.is_reference { "kg" } else { "Earths" };
        writeln!(
            writer,
            "{}: diameter = {} km mass = {} {}",
            planet.name, planet.diameter_km, planet.mass_factor, unit
        )?;
    }
    Ok(())
}

/// Write the orbital data file for every body that has a period.
pub fn write_orbital_data<W: Write>(catalog: &Catalog, mut writer: W) -> io::Result<()> {
    for planet in catalog {
        let Some(period) = planet.orbital_period_days else {
            continue;
        };
        check_name(&planet.name)?;
        writeln!(
            writer,
            "{}: period = {} days orbital radius = {} AU",
            planet.name, period, planet.orbital_radius_au
        )?;
    }
    Ok(())
}

fn tokenize(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.split_whitespace().collect())
}

/// Value (and trailing unit, if any) following `key`, with an optional `=` in between.
fn field<'a>(tokens: &[&'a str], key: &[&str]) -> Option<(&'a str, Option<&'a str>)> {
    let start = tokens[1..]
        .windows(key.len())
        .position(|window| window == key)?
        + 1;
    let mut rest = tokens[start + key.len()..].iter().copied();
    let mut value = rest.next()?;
    if value == "=" {
        value = rest.next()?;
    }
    Some((value.trim_end_matches(','), rest.next()))
}

fn required<'a>(tokens: &[&'a str], key: &[&str], line: usize) -> Result<(f64, Option<&'a str>), ImportError> {
    let label = key.join(" ");
    let (raw, unit) = field(tokens, key).ok_or_else(|| ImportError::Parse {
        line,
        message: format!("missing '{label}'"),
    })?;
    let value = raw.parse::<f64>().map_err(|err| ImportError::Parse {
        line,
        message: format!("invalid {label} '{raw}': {err}"),
    })?;
    Ok((value, unit.map(|u| u.trim_end_matches(','))))
}

fn check_name(name: &str) -> io::Result<()> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("planet name '{name}' cannot be written as a single token"),
        ));
    }
    Ok(())
}

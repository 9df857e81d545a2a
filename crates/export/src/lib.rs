//! Export helpers for CSV position streams and JSON reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod positions {
    use std::io::{self, Write};

    const HEADER: &str = "tick,time,body,x,y";

    /// Write the position stream CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One body's position at one simulated tick.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub tick: u64,
        pub time: f64,
        pub body: &'a str,
        pub x: f64,
        pub y: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{},{:.9},{:.9}",
                self.tick, self.time, self.body, self.x, self.y
            )
        }
    }
}

pub mod report {
    use serde::Serialize;
    use std::io::{self, Write};
    use std::path::Path;

    /// Pretty-print any serializable report as JSON.
    pub fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }

    /// Write a JSON report to `path` (`-` for stdout).
    pub fn save_json<T: Serialize>(path: &Path, report: &T) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        write_json(&mut *writer, report)?;
        writer.flush()
    }
}

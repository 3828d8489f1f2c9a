//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

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

pub mod drag {
    use std::io::Write;

    use flight_core::DragTable;
    use serde::Serialize;

    use super::ExportError;

    const TABLE_HEADER: [&str; 2] = ["year", "cd"];

    /// Write serializable rows as CSV, with a header taken from the field names.
    pub fn write_records_csv<W: Write, T: Serialize>(
        writer: W,
        records: &[T],
    ) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write a per-season table as `year,cd` rows in ascending year order.
    pub fn write_table_csv<W: Write>(writer: W, table: &DragTable) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(TABLE_HEADER)?;
        for (year, cd) in table.iter() {
            csv.write_record([year.to_string(), format!("{cd:.6}")])?;
        }
        csv.flush()?;
        Ok(())
    }
}

pub mod report {
    use std::io::Write;
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::{ExportError, writer_for_path};

    /// Air and force readings computed for one ballpark.
    #[derive(Debug, Clone, Serialize)]
    pub struct ConditionsReport {
        pub ballpark: String,
        pub temperature_k: f64,
        pub pressure_pa: f64,
        pub relative_humidity: f64,
        pub vapor_pressure_pa: f64,
        pub air_density_kg_m3: f64,
        pub wind_m_s: [f64; 2],
        pub wind_speed_m_s: f64,
        /// Zero in calm air.
        pub wind_direction_rad: f64,
        pub drag: Option<DragReport>,
    }

    /// Drag acting on a ball at the requested velocity.
    #[derive(Debug, Clone, Serialize)]
    pub struct DragReport {
        pub velocity_m_s: [f64; 3],
        pub drag_coefficient: f64,
        pub area_m2: f64,
        pub force_n: [f64; 3],
        pub force_magnitude_n: f64,
    }

    /// Write the report as pretty JSON to `path` (`-` for stdout).
    pub fn write_report(path: &Path, report: &ConditionsReport) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_core::DragTable;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        year: i32,
        cd: f64,
        n: u64,
    }

    #[test]
    fn records_csv_uses_field_names() {
        let mut out = Vec::new();
        drag::write_records_csv(
            &mut out,
            &[
                Row { year: 2023, cd: 0.35, n: 10 },
                Row { year: 2024, cd: 0.34, n: 12 },
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "year,cd,n\n2023,0.35,10\n2024,0.34,12\n"
        );
    }

    #[test]
    fn table_csv_is_sorted() {
        let table: DragTable = [(2024, 0.34), (2023, 0.345)].into_iter().collect();
        let mut out = Vec::new();
        drag::write_table_csv(&mut out, &table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "year,cd\n2023,0.345000\n2024,0.340000\n"
        );
    }

    #[test]
    fn report_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        let report = report::ConditionsReport {
            ballpark: "Coors Field".into(),
            temperature_k: 297.0,
            pressure_pa: 84_300.0,
            relative_humidity: 0.3,
            vapor_pressure_pa: 900.0,
            air_density_kg_m3: 0.98,
            wind_m_s: [0.0, 4.0],
            wind_speed_m_s: 4.0,
            wind_direction_rad: 1.57,
            drag: None,
        };
        report::write_report(&path, &report).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["ballpark"], "Coors Field");
        assert!(json["drag"].is_null());
        assert_eq!(json["wind_m_s"][1], 4.0);
    }
}

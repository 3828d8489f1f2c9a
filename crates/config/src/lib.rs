//! Configuration models and loaders for ballpark conditions and drag tables.

use std::fs::File;
use std::path::{Path, PathBuf};

use flight_core::DragTable;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Ambient conditions at a ballpark, parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BallparkConfig {
    pub name: String,
    pub temperature: f64,
    #[serde(default = "default_temperature_unit")]
    pub temperature_unit: String,
    pub pressure_hpa: f64,
    /// Fraction in `[0, 1]`.
    #[serde(default)]
    pub relative_humidity: f64,
    #[serde(default)]
    pub wind: Option<WindConfig>,
}

/// Wind speed and heading (degrees from the +x axis, towards +y).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WindConfig {
    pub speed_m_s: f64,
    pub direction_deg: f64,
}

fn default_temperature_unit() -> String {
    "fahrenheit".to_string()
}

#[derive(Debug, Deserialize)]
struct DragRow {
    year: i32,
    cd: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read drag table: {0}")]
    Csv(#[from] csv::Error),
}

/// Load ballpark configurations from a YAML list, a TOML file or a directory of TOML files.
pub fn load_ballparks<P: AsRef<Path>>(path: P) -> Result<Vec<BallparkConfig>, ConfigError> {
    let path = path.as_ref();
    let mut parks: Vec<BallparkConfig> = load_records(path)?;
    for park in &mut parks {
        park.temperature_unit = park.temperature_unit.to_ascii_lowercase();
    }
    debug!("loaded {} ballparks from {}", parks.len(), path.display());
    Ok(parks)
}

/// Find a ballpark by case-insensitive name.
pub fn find_ballpark<'a>(parks: &'a [BallparkConfig], name: &str) -> Option<&'a BallparkConfig> {
    parks.iter().find(|park| park.name.eq_ignore_ascii_case(name))
}

/// Load a `year,cd` CSV into a per-season drag table.
pub fn load_drag_table<P: AsRef<Path>>(path: P) -> Result<DragTable, ConfigError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let mut table = DragTable::new();
    for row in reader.deserialize() {
        let row: DragRow = row?;
        table.insert(row.year, row.cd);
    }
    debug!("loaded {} drag seasons from {}", table.len(), path.display());
    Ok(table)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

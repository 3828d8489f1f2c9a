//! Drag-coefficient import from the Baseball Savant drag dashboard.
//!
//! The dashboard page embeds its data set as a single script line of the form
//! `const serverVals = {...};`. Records inside `binnedData` and `scatterData`
//! are read positionally, so both JSON arrays and (ordered) objects work.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use flight_core::DragTable;
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Season-by-season drag dashboard.
pub const DRAG_DASHBOARD_URL: &str = "https://baseballsavant.mlb.com/drag-dashboard";

const SERVER_VALUES_PREFIX: &str = "const serverVals = ";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("page does not embed `const serverVals = ...;`")]
    MissingServerValues,
    #[error("failed to parse dashboard data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dashboard data has no `{0}` array")]
    MissingField(&'static str),
}

/// One drag-coefficient bin of one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinnedRecord {
    pub year: i32,
    pub cd: f64,
    pub total_pitches: u64,
    pub n: u64,
    pub freq: f64,
}

/// Mean drag coefficient over the games of one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterRecord {
    pub date: NaiveDate,
    pub n: u64,
    pub games: u64,
    pub mean_cd: f64,
}

/// Parsed `serverVals` payload of the drag dashboard.
#[derive(Debug, Clone)]
pub struct DragDashboard {
    data: Value,
}

impl DragDashboard {
    /// Extract the embedded data set from the dashboard HTML.
    pub fn from_html(html: &str) -> Result<Self, ImportError> {
        let payload = html
            .lines()
            .find_map(server_values)
            .ok_or(ImportError::MissingServerValues)?;
        Self::from_json(payload)
    }

    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(Self {
            data: serde_json::from_str(json)?,
        })
    }

    /// Rows of `(Year, CD, TotalPitches, n, freq)`.
    pub fn binned_data(&self) -> Result<Vec<BinnedRecord>, ImportError> {
        self.records("binnedData", |values| {
            Some(BinnedRecord {
                year: number(values.first()?)? as i32,
                cd: number(values.get(1)?)?,
                total_pitches: number(values.get(2)?)? as u64,
                n: number(values.get(3)?)? as u64,
                freq: number(values.get(4)?)?,
            })
        })
    }

    /// Rows of `(Date, n, Games, MeanCD)`.
    pub fn scatter_data(&self) -> Result<Vec<ScatterRecord>, ImportError> {
        self.records("scatterData", |values| {
            Some(ScatterRecord {
                date: date(values.first()?)?,
                n: number(values.get(1)?)? as u64,
                games: number(values.get(2)?)? as u64,
                mean_cd: number(values.get(3)?)?,
            })
        })
    }

    fn records<T>(
        &self,
        field: &'static str,
        parse: impl Fn(&[&Value]) -> Option<T>,
    ) -> Result<Vec<T>, ImportError> {
        let rows = self
            .data
            .get(field)
            .and_then(Value::as_array)
            .ok_or(ImportError::MissingField(field))?;
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match row_values(row).and_then(|values| parse(&values)) {
                Some(record) => records.push(record),
                None => warn!("skipping malformed {field} row {index}: {row}"),
            }
        }
        debug!("parsed {} of {} {field} rows", records.len(), rows.len());
        Ok(records)
    }
}

/// Download and parse the drag dashboard.
pub fn fetch_drag_dashboard() -> Result<DragDashboard, ImportError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    debug!("fetching {DRAG_DASHBOARD_URL}");
    let html = client
        .get(DRAG_DASHBOARD_URL)
        .send()?
        .error_for_status()?
        .text()?;
    DragDashboard::from_html(&html)
}

/// Collapse binned rows into one `n`-weighted mean coefficient per season.
pub fn drag_table(records: &[BinnedRecord]) -> DragTable {
    let mut sums: BTreeMap<i32, (f64, f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.year).or_default();
        entry.0 += record.cd * record.n as f64;
        entry.1 += record.n as f64;
        entry.2 += 1;
    }
    sums.into_iter()
        .filter_map(|(year, (weighted, weight, count))| {
            if weight > 0.0 {
                Some((year, weighted / weight))
            } else {
                let mean = records
                    .iter()
                    .filter(|r| r.year == year)
                    .map(|r| r.cd)
                    .sum::<f64>()
                    / count as f64;
                mean.is_finite().then_some((year, mean))
            }
        })
        .collect()
}

fn server_values(line: &str) -> Option<&str> {
    let start = line.find(SERVER_VALUES_PREFIX)?;
    let rest = &line[start + SERVER_VALUES_PREFIX.len()..];
    let end = rest.rfind(';')?;
    Some(rest[..end].trim())
}

fn row_values(row: &Value) -> Option<Vec<&Value>> {
    match row {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) => Some(map.values().collect()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Object(map) => map.get("value").and_then(date),
        Value::String(s) => NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok(),
        _ => None,
    }
}

//! Report air density, wind and (optionally) drag for a ballpark from the catalog.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use baseball_flight::config::{find_ballpark, load_ballparks, load_drag_table};
use baseball_flight::drag::{DragCoefficientSource, DragTable};
use baseball_flight::environment::Environment;
use baseball_flight::export::report::write_report;
use baseball_flight::quantity::Velocity;
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Air density, wind and drag at a ballpark")]
struct Cli {
    /// Ballpark catalog (YAML list, TOML file or directory of TOML files)
    #[arg(long, default_value = "configs/ballparks.yaml")]
    catalog: PathBuf,

    /// Ballpark name (case-insensitive)
    #[arg(long)]
    park: String,

    /// Ball velocity relative to the ground in m/s
    #[arg(long, num_args = 1.., value_names = ["VX", "VY", "VZ"], allow_negative_numbers = true)]
    velocity: Option<Vec<f64>>,

    /// Drag coefficient used regardless of season
    #[arg(long, conflicts_with = "drag_table")]
    cd: Option<f64>,

    /// Per-season drag table (`year,cd` CSV, as written by fetch_drag)
    #[arg(long)]
    drag_table: Option<PathBuf>,

    /// Season to look up in the drag table (defaults to the latest one)
    #[arg(long)]
    year: Option<i32>,

    /// Write a JSON report to this path (`-` for stdout)
    #[arg(long)]
    report: Option<PathBuf>,
}

enum Coefficients {
    Constant(f64),
    Table(DragTable),
}

impl DragCoefficientSource for Coefficients {
    fn drag_coefficient(&self, year: i32) -> Option<f64> {
        match self {
            Coefficients::Constant(cd) => cd.drag_coefficient(year),
            Coefficients::Table(table) => table.drag_coefficient(year),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let parks = load_ballparks(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;
    let park = find_ballpark(&parks, &cli.park)
        .ok_or_else(|| anyhow!("Ballpark '{}' not found in catalog", cli.park))?;
    let env = Environment::from_config(park)?;
    info!("evaluating conditions at {}", env.name);

    let drag = match &cli.velocity {
        Some(components) => {
            let velocity = Velocity::try_from(components.clone())
                .context("--velocity takes exactly three components")?;
            let (source, year) = coefficients(&cli)?;
            Some(env.drag_on(&velocity, &source, year)?)
        }
        None => None,
    };

    let report = env.report(drag.as_ref())?;

    println!("=== Ballpark Conditions ===");
    println!("Ballpark        : {}", report.ballpark);
    println!(
        "Temperature     : {:.2} K ({:.1} °F)",
        report.temperature_k,
        env.air.temperature.fahrenheit()
    );
    println!("Pressure        : {:.0} Pa", report.pressure_pa);
    println!(
        "Humidity        : {:.0} % (p_v = {:.1} Pa)",
        report.relative_humidity * 100.0,
        report.vapor_pressure_pa
    );
    println!("Air density     : {:.4} kg/m³", report.air_density_kg_m3);
    println!(
        "Wind            : {:.3} m/s at {:.1}° ({})",
        report.wind_speed_m_s,
        report.wind_direction_rad.to_degrees(),
        env.wind
    );
    if let Some(sample) = &drag {
        println!(
            "Drag            : cd = {:.3}, A = {:.5} m², air-relative {}",
            sample.drag_coefficient, sample.area_m2, sample.air_velocity
        );
        println!(
            "                  {} (|F| = {:.4} N)",
            sample.force,
            sample.force.norm()
        );
    }

    if let Some(path) = &cli.report {
        write_report(path, &report)?;
    }

    Ok(())
}

fn coefficients(cli: &Cli) -> anyhow::Result<(Coefficients, i32)> {
    if let Some(cd) = cli.cd {
        return Ok((Coefficients::Constant(cd), cli.year.unwrap_or_default()));
    }
    let path = cli
        .drag_table
        .as_ref()
        .ok_or_else(|| anyhow!("--velocity requires --cd or --drag-table"))?;
    let table = load_drag_table(path)
        .with_context(|| format!("loading drag table {}", path.display()))?;
    let year = match cli.year {
        Some(year) => year,
        None => table
            .latest()
            .map(|(year, _)| year)
            .ok_or_else(|| anyhow!("drag table {} is empty", path.display()))?,
    };
    Ok((Coefficients::Table(table), year))
}

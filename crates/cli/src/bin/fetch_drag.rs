//! Download the Baseball Savant drag dashboard and summarise drag coefficients by season.

use std::path::PathBuf;

use anyhow::Context;
use baseball_flight::export::drag::{write_records_csv, write_table_csv};
use baseball_flight::export::writer_for_path;
use baseball_flight::importer::{self, DRAG_DASHBOARD_URL, DragDashboard};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Fetch season drag coefficients")]
struct Cli {
    /// Write the binned dashboard rows as CSV (`-` for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the per-season mean table (`year,cd`) as CSV
    #[arg(long)]
    table_output: Option<PathBuf>,

    /// Parse a saved copy of the dashboard page instead of downloading it
    #[arg(long)]
    html: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dashboard = match &cli.html {
        Some(path) => {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            DragDashboard::from_html(&html)?
        }
        None => {
            info!("downloading {DRAG_DASHBOARD_URL}");
            importer::fetch_drag_dashboard()?
        }
    };

    let binned = dashboard.binned_data()?;
    let table = importer::drag_table(&binned);

    println!("Season drag coefficients ({} bins):", binned.len());
    for (year, cd) in table.iter() {
        println!("  {year}  {cd:.4}");
    }

    if let Some(path) = &cli.output {
        write_records_csv(writer_for_path(path)?, &binned)?;
        info!("wrote binned rows to {}", path.display());
    }
    if let Some(path) = &cli.table_output {
        write_table_csv(writer_for_path(path)?, &table)?;
        info!("wrote season table to {}", path.display());
    }

    Ok(())
}

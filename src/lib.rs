//! Physical quantities for modelling the flight of a pitched or batted baseball.
//!
//! The numeric core (vectors, coordinate systems, quantities) lives in
//! `flight_core`; this crate ties it to air physics, ballpark catalogs, the
//! drag-dashboard importer and exporters so front-ends share one entry point.

pub mod environment;

pub use flight_atmosphere as atmosphere;
pub use flight_config as config;
pub use flight_core::{ball, constants, coordinates, drag, quantity, vector};
pub use flight_export as export;
pub use flight_importer as importer;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! CSV ingestion for airport and flight data.
//!
//! Real-world route dumps are messy: headers carry stray spaces or `#`
//! prefixes, IATA columns go by several names, and rows are missing
//! fields or carry zero distances. Loading is therefore tolerant —
//! headers are trimmed and aliased, unparseable rows and non-positive
//! distances are skipped with a count — and only structural problems
//! (missing file, broken CSV framing) are errors.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use flightgraph::{Airport, Flight};

use crate::error::{CliError, Result};

/// One row of the airports CSV, before normalization.
#[derive(Debug, Deserialize)]
struct NodeRecord {
    #[serde(alias = "# id")]
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
    #[serde(default, alias = "IATA/FAA", alias = "IATA")]
    iata: String,
    #[serde(default, alias = "ICAO")]
    icao: String,
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
    #[serde(default)]
    altitude: i32,
}

/// One row of the flights CSV, before normalization.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    #[serde(alias = "# source")]
    source: u32,
    #[serde(default)]
    target: u32,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    airline: String,
    #[serde(default)]
    airline_code: u32,
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(File::open(path)?))
}

/// Load airports from a CSV file.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    let mut reader = open_reader(path)?;
    let mut airports = Vec::new();
    let mut skipped = 0usize;

    for record in reader.deserialize::<NodeRecord>() {
        match record {
            Ok(row) => airports.push(
                Airport::new(row.id, row.name)
                    .with_city(row.city)
                    .with_country(row.country)
                    .with_iata(row.iata)
                    .with_icao(row.icao)
                    .with_coordinates(row.latitude, row.longitude)
                    .with_altitude(row.altitude),
            ),
            Err(err) => {
                debug!(%err, "skipping unparseable airport row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, loaded = airports.len(), "some airport rows were skipped");
    }
    Ok(airports)
}

/// Load flights from a CSV file.
///
/// Rows with a non-positive distance are dropped here, before graph
/// construction, the same way zero-distance rows are dropped from the
/// source data feeds.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>> {
    let mut reader = open_reader(path)?;
    let mut flights = Vec::new();
    let mut skipped = 0usize;

    for record in reader.deserialize::<EdgeRecord>() {
        match record {
            Ok(row) if row.distance > 0.0 && row.distance.is_finite() => {
                flights.push(
                    Flight::new(row.source, row.target, row.distance)
                        .with_airline(row.airline, row.airline_code),
                );
            }
            Ok(_) => skipped += 1,
            Err(err) => {
                debug!(%err, "skipping unparseable flight row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, loaded = flights.len(), "some flight rows were skipped");
    }
    Ok(flights)
}

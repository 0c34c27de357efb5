//! Error types for the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// Required input file was not supplied.
    #[error("no {0} file specified. Use --{0} or set FLIGHTGRAPH_{1} environment variable")]
    MissingInput(&'static str, &'static str),

    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Graph construction error.
    #[error("graph error: {0}")]
    Graph(#[from] flightgraph::GraphError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An airport lookup found nothing.
    #[error("airport not found: {0}")]
    AirportNotFound(String),

    /// No route exists between two airports.
    #[error("no route found from {from} to {to}")]
    NoRoute {
        /// Origin as given on the command line.
        from: String,
        /// Destination as given on the command line.
        to: String,
    },
}

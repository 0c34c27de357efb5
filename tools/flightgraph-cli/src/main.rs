//! flightgraph command line interface
//!
//! Loads airport and flight CSVs, builds the route network, and exposes
//! the analytics engine: full analysis runs, point-to-point route
//! queries, and free-text airport search.

mod error;
mod ingest;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flightgraph::{Airport, AnalysisConfig, Graph, NetworkAnalysis};

use crate::error::{CliError, Result};

/// flightgraph command line interface
///
/// Directed weighted-graph analytics over an air-route network.
#[derive(Parser, Debug)]
#[command(name = "flightgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the airports CSV
    #[arg(long, env = "FLIGHTGRAPH_NODES", global = true)]
    pub nodes: Option<PathBuf>,

    /// Path to the flights CSV
    #[arg(long, env = "FLIGHTGRAPH_EDGES", global = true)]
    pub edges: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The full report as JSON
    Json,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis suite and print the results
    Analyze {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Number of hubs to list in the text summary
        #[arg(long, default_value = "10")]
        top: usize,

        /// Disable every sampling cap (slow on large networks)
        #[arg(long)]
        exact: bool,
    },

    /// Find the shortest route between two airports
    Route {
        /// Origin airport (IATA/ICAO code, numeric id, or name fragment)
        #[arg(long)]
        from: String,

        /// Destination airport (IATA/ICAO code, numeric id, or name fragment)
        #[arg(long)]
        to: String,
    },

    /// Free-text search over airport names, cities, countries, and codes
    Search {
        /// The search query
        query: String,

        /// Maximum number of hits to print
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Analyze { format, top, exact } => {
            let graph = load_graph(&cli)?;
            let config =
                if *exact { AnalysisConfig::new().exact() } else { AnalysisConfig::default() };
            let report = NetworkAnalysis::run_with_config(&graph, &config);
            match format {
                OutputFormat::Text => output::print_summary(&graph, &report, *top),
                OutputFormat::Json => output::print_json(&report)?,
            }
            Ok(())
        }
        Commands::Route { from, to } => {
            let graph = load_graph(&cli)?;
            let source = resolve_airport(&graph, from)?;
            let target = resolve_airport(&graph, to)?;
            let path = graph.shortest_path(source, target);
            if !path.is_reachable() {
                return Err(CliError::NoRoute { from: from.clone(), to: to.clone() });
            }
            output::print_route(&graph, &path);
            Ok(())
        }
        Commands::Search { query, limit } => {
            let nodes = require_nodes(&cli)?;
            let airports = ingest::load_airports(nodes)?;
            let hits = search_airports(&airports, query, *limit);
            if hits.is_empty() {
                return Err(CliError::AirportNotFound(query.clone()));
            }
            for airport in hits {
                println!("{}", output::airport_label(airport));
            }
            Ok(())
        }
    }
}

fn require_nodes(cli: &Cli) -> Result<&PathBuf> {
    cli.nodes.as_ref().ok_or(CliError::MissingInput("nodes", "NODES"))
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    let nodes = require_nodes(cli)?;
    let edges = cli.edges.as_ref().ok_or(CliError::MissingInput("edges", "EDGES"))?;
    let airports = ingest::load_airports(nodes)?;
    let flights = ingest::load_flights(edges)?;
    Ok(Graph::build(airports, &flights)?)
}

/// Resolve a user-supplied airport reference to a node index: numeric id
/// first, then exact IATA/ICAO match, then the first name hit.
fn resolve_airport(graph: &Graph, query: &str) -> Result<usize> {
    if let Ok(id) = query.parse::<u32>() {
        if let Some(index) = graph.index_of(id) {
            return Ok(index);
        }
    }

    let upper = query.to_uppercase();
    for (index, airport) in graph.airports().iter().enumerate() {
        if airport.iata == upper || airport.icao == upper {
            return Ok(index);
        }
    }

    let lower = query.to_lowercase();
    for (index, airport) in graph.airports().iter().enumerate() {
        if airport.name.to_lowercase().contains(&lower) {
            return Ok(index);
        }
    }

    Err(CliError::AirportNotFound(query.to_owned()))
}

/// Case-insensitive free-text match over the descriptive fields.
fn search_airports<'a>(airports: &'a [Airport], query: &str, limit: usize) -> Vec<&'a Airport> {
    let q = query.to_lowercase();
    airports
        .iter()
        .filter(|airport| {
            airport.name.to_lowercase().contains(&q)
                || airport.city.to_lowercase().contains(&q)
                || airport.country.to_lowercase().contains(&q)
                || airport.iata.to_lowercase().contains(&q)
                || airport.icao.to_lowercase().contains(&q)
        })
        .take(limit)
        .collect()
}

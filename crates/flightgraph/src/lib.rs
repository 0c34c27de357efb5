//! `flightgraph`
//!
//! A directed, weighted-graph analytics engine for air-route networks:
//! airports are nodes, flights are directed weighted edges (weight =
//! distance), and the engine computes the structural and route-level
//! metrics used to rank and explain network importance.
//!
//! # Modules
//!
//! - [`store`] - Graph construction and adjacency/shortest-path queries
//! - [`traversal`] - Reusable BFS and Dijkstra kernels
//! - [`analytics`] - Degree, components, centralities, connectivity,
//!   community detection
//! - [`airline`] - Domain metrics: hub ranking, route efficiency,
//!   regional connectivity, redundancy
//! - [`analysis`] - The [`analysis::NetworkAnalysis`] entry point that
//!   runs the full suite and returns one [`analysis::AnalysisReport`]
//!
//! The graph is built once from node and edge data and is read-only for
//! the lifetime of any analysis run; every analysis borrows it.

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod airline;
pub mod analysis;
pub mod analytics;
pub mod store;
pub mod traversal;

pub use analysis::{AnalysisConfig, AnalysisReport, NetworkAnalysis};
pub use store::{Airport, Connection, Flight, Graph, GraphError, GraphResult};
pub use traversal::PathResult;

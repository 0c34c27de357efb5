//! Airline-domain metrics.
//!
//! Built on top of the structural analyses:
//!
//! - [`HubRanking`] - composite hub importance scores
//! - [`RegionalConnectivity`] - internal vs external routing per world
//!   region
//! - [`RouteEfficiency`] - how close direct flights run to the optimal
//!   routing
//! - [`Redundancy`] - the fraction of sampled routes that survive a
//!   single-edge failure

mod hubs;
mod regions;
mod routes;

pub use hubs::{HubRanking, HubScore};
pub use regions::{Region, RegionStats, RegionalConnectivity};
pub use routes::{
    EfficiencyConfig, Redundancy, RedundancyConfig, RouteEfficiency, RouteEfficiencyEstimate,
    RedundancyEstimate,
};

//! Route efficiency and single-edge redundancy.
//!
//! # Efficiency
//!
//! For a direct flight, efficiency is the shortest-path distance between
//! its endpoints divided by the direct distance. The value is at most 1
//! and equals 1 exactly when the direct flight is the optimal routing;
//! an efficiency of 0.67 means a connecting itinerary would be a third
//! shorter than the nonstop.
//!
//! # Redundancy
//!
//! For each sampled flight, probe whether its endpoints stay connected
//! when that single edge is excluded from traversal. The redundancy
//! estimate is the surviving fraction: 1 means every sampled city pair
//! has an alternate routing, 0 means every sampled flight is a single
//! point of failure.
//!
//! Both metrics bound their cost by sampling the out-edges of the first
//! `origin_cap` origin indices.

use serde::Serialize;

use crate::store::Graph;
use crate::traversal::{bfs, Dijkstra, ExcludedEdge};

/// Configuration for the route efficiency estimate.
#[derive(Debug, Clone)]
pub struct EfficiencyConfig {
    /// Maximum number of origin nodes whose out-edges are sampled.
    /// `None` samples every origin.
    /// Default: 200
    pub origin_cap: Option<usize>,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self { origin_cap: Some(200) }
    }
}

impl EfficiencyConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin sample cap. `None` disables sampling.
    pub const fn with_origin_cap(mut self, cap: Option<usize>) -> Self {
        self.origin_cap = cap;
        self
    }
}

/// Result of the route efficiency estimate.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEfficiencyEstimate {
    /// Mean efficiency over the sampled flights, 0 when none were
    /// sampled.
    pub mean: f64,
    /// Number of flights that entered the mean.
    pub sampled_routes: usize,
    /// Whether the origin set was capped below the node count.
    pub approximate: bool,
}

/// Route efficiency metric implementation.
pub struct RouteEfficiency;

impl RouteEfficiency {
    /// Estimate mean route efficiency over the sampled origins.
    pub fn compute(graph: &Graph, config: &EfficiencyConfig) -> RouteEfficiencyEstimate {
        let n = graph.node_count();
        let origins = config.origin_cap.map_or(n, |cap| cap.min(n));

        let mut total = 0.0_f64;
        let mut sampled_routes = 0usize;

        for origin in 0..origins {
            for connection in graph.neighbors(origin) {
                let shortest = Dijkstra::shortest_path(graph, origin, connection.target);
                if shortest.total_distance.is_finite() {
                    total += shortest.total_distance / connection.distance;
                    sampled_routes += 1;
                }
            }
        }

        let mean = if sampled_routes > 0 { total / sampled_routes as f64 } else { 0.0 };

        RouteEfficiencyEstimate { mean, sampled_routes, approximate: origins < n }
    }
}

/// Configuration for the redundancy estimate.
#[derive(Debug, Clone)]
pub struct RedundancyConfig {
    /// Maximum number of origin nodes whose out-edges are probed.
    /// `None` probes every origin.
    /// Default: 100
    pub origin_cap: Option<usize>,
}

impl Default for RedundancyConfig {
    fn default() -> Self {
        Self { origin_cap: Some(100) }
    }
}

impl RedundancyConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin sample cap. `None` disables sampling.
    pub const fn with_origin_cap(mut self, cap: Option<usize>) -> Self {
        self.origin_cap = cap;
        self
    }
}

/// Result of the redundancy estimate.
#[derive(Debug, Clone, Serialize)]
pub struct RedundancyEstimate {
    /// Fraction of sampled flights whose endpoints stay connected
    /// without that flight, 0 when none were sampled.
    pub fraction: f64,
    /// Number of flights probed.
    pub sampled_edges: usize,
    /// Of those, how many had an alternate routing.
    pub redundant_edges: usize,
    /// Whether the origin set was capped below the node count.
    pub approximate: bool,
}

/// Redundancy metric implementation.
pub struct Redundancy;

impl Redundancy {
    /// Estimate single-edge redundancy over the sampled origins.
    pub fn compute(graph: &Graph, config: &RedundancyConfig) -> RedundancyEstimate {
        let n = graph.node_count();
        let origins = config.origin_cap.map_or(n, |cap| cap.min(n));

        let mut sampled_edges = 0usize;
        let mut redundant_edges = 0usize;

        for origin in 0..origins {
            for (slot, connection) in graph.neighbors(origin).iter().enumerate() {
                sampled_edges += 1;
                let excluded = ExcludedEdge { source: origin, slot };
                if bfs::is_reachable_without(graph, origin, connection.target, excluded) {
                    redundant_edges += 1;
                }
            }
        }

        let fraction =
            if sampled_edges > 0 { redundant_edges as f64 / sampled_edges as f64 } else { 0.0 };

        RedundancyEstimate { fraction, sampled_edges, redundant_edges, approximate: origins < n }
    }
}

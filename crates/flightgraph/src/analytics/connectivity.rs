//! Network-level connectivity metrics: diameter estimate and degree
//! assortativity.
//!
//! # Diameter
//!
//! The true diameter needs all-pairs shortest paths; instead Dijkstra
//! runs from a bounded sample of sources and the maximum finite distance
//! seen is reported. On graphs larger than the sample this is a lower
//! bound, not the exact diameter, and is flagged as approximate.
//!
//! # Assortativity
//!
//! Newman's degree correlation over all directed edges, using each
//! endpoint's total degree. Positive values mean high-degree airports
//! tend to connect to other high-degree airports; hub-and-spoke route
//! networks typically come out negative.

use serde::Serialize;

use crate::store::Graph;
use crate::traversal::Dijkstra;

/// Configuration for the diameter estimate.
#[derive(Debug, Clone)]
pub struct DiameterConfig {
    /// Maximum number of Dijkstra sources, taken deterministically as
    /// the first indices. `None` runs every source.
    /// Default: 100
    pub source_cap: Option<usize>,
}

impl Default for DiameterConfig {
    fn default() -> Self {
        Self { source_cap: Some(100) }
    }
}

impl DiameterConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source sample cap. `None` disables sampling.
    pub const fn with_source_cap(mut self, cap: Option<usize>) -> Self {
        self.source_cap = cap;
        self
    }
}

/// Result of a diameter estimate.
#[derive(Debug, Clone, Serialize)]
pub struct DiameterResult {
    /// Maximum finite shortest-path distance observed.
    pub value: f64,
    /// Number of Dijkstra sources sampled.
    pub sources: usize,
    /// Whether the estimate is a sampling lower bound rather than the
    /// exact diameter.
    pub approximate: bool,
}

/// Connectivity metric implementations.
pub struct Connectivity;

impl Connectivity {
    /// Estimate the diameter from a bounded sample of sources.
    pub fn diameter(graph: &Graph, config: &DiameterConfig) -> DiameterResult {
        let n = graph.node_count();
        let sources = config.source_cap.map_or(n, |cap| cap.min(n));

        let mut diameter = 0.0_f64;
        for s in 0..sources {
            for &d in &Dijkstra::distances(graph, s) {
                if d.is_finite() && d > diameter {
                    diameter = d;
                }
            }
        }

        DiameterResult { value: diameter, sources, approximate: sources < n }
    }

    /// Degree assortativity over all directed edges.
    ///
    /// `total_degrees` is the per-node total degree (see
    /// [`super::DegreeStats`]). Returns 0 when the graph has no edges or
    /// the degree variance is degenerate.
    pub fn assortativity(graph: &Graph, total_degrees: &[usize]) -> f64 {
        let mut product_sum = 0.0_f64;
        let mut mean_sum = 0.0_f64;
        let mut square_sum = 0.0_f64;
        let mut edges = 0usize;

        for i in 0..graph.node_count() {
            let ki = total_degrees[i] as f64;
            for connection in graph.neighbors(i) {
                let kj = total_degrees[connection.target] as f64;
                product_sum += ki * kj;
                mean_sum += (ki + kj) / 2.0;
                square_sum += (ki * ki + kj * kj) / 2.0;
                edges += 1;
            }
        }

        if edges == 0 {
            return 0.0;
        }

        let m = edges as f64;
        let product_mean = product_sum / m;
        let mean_squared = (mean_sum / m).powi(2);
        let square_mean = square_sum / m;

        let denominator = square_mean - mean_squared;
        if denominator == 0.0 {
            return 0.0;
        }
        (product_mean - mean_squared) / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::DegreeStats;
    use crate::store::{Airport, Flight};

    fn graph(n: u32, flights: &[Flight]) -> Graph {
        let airports = (0..n).map(|i| Airport::new(i, format!("A{i}"))).collect();
        Graph::build(airports, flights).expect("valid graph")
    }

    #[test]
    fn config_defaults() {
        let config = DiameterConfig::default();
        assert_eq!(config.source_cap, Some(100));
    }

    #[test]
    fn diameter_of_weighted_chain() {
        let g = graph(3, &[Flight::new(0, 1, 100.0), Flight::new(1, 2, 250.0)]);
        let result = Connectivity::diameter(&g, &DiameterConfig::default());
        assert!((result.value - 350.0).abs() < f64::EPSILON);
        assert!(!result.approximate);
    }

    #[test]
    fn diameter_ignores_unreachable_pairs() {
        let g = graph(4, &[Flight::new(0, 1, 10.0), Flight::new(2, 3, 5.0)]);
        let result = Connectivity::diameter(&g, &DiameterConfig::default());
        assert!((result.value - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn diameter_sampling_is_flagged() {
        let g = graph(3, &[Flight::new(2, 0, 40.0)]);
        let result = Connectivity::diameter(&g, &DiameterConfig::new().with_source_cap(Some(1)));
        assert!(result.approximate);
        assert_eq!(result.sources, 1);
        // The long edge starts at an unsampled source
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn assortativity_zero_without_edges() {
        let g = graph(3, &[]);
        let degrees = DegreeStats::compute(&g);
        assert_eq!(Connectivity::assortativity(&g, &degrees.total_degrees), 0.0);
    }

    #[test]
    fn assortativity_zero_for_uniform_degrees() {
        // Directed cycle: every node has total degree 2, zero variance
        let g = graph(
            3,
            &[Flight::new(0, 1, 1.0), Flight::new(1, 2, 1.0), Flight::new(2, 0, 1.0)],
        );
        let degrees = DegreeStats::compute(&g);
        assert_eq!(Connectivity::assortativity(&g, &degrees.total_degrees), 0.0);
    }

    #[test]
    fn star_is_disassortative() {
        // Spokes only connect to the high-degree center
        let g = graph(
            4,
            &[
                Flight::new(0, 1, 1.0),
                Flight::new(1, 0, 1.0),
                Flight::new(0, 2, 1.0),
                Flight::new(2, 0, 1.0),
                Flight::new(0, 3, 1.0),
                Flight::new(3, 0, 1.0),
            ],
        );
        let degrees = DegreeStats::compute(&g);
        assert!(Connectivity::assortativity(&g, &degrees.total_degrees) < 0.0);
    }
}

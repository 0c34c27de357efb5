//! Closeness centrality over weighted shortest paths.
//!
//! # Formula
//!
//! CC(v) = (reachable count - 1) / Σ d(v, u) over all reachable u,
//! with d the Dijkstra distance; 0 when nothing is reachable.
//!
//! # Sampling
//!
//! A full computation needs one Dijkstra run per node. Sources are
//! capped to the first `source_cap` node indices; nodes outside the
//! sample keep a closeness of 0 and the result is flagged approximate.
//! Scores are reported raw and max-normalized like every centrality in
//! this engine.

use serde::Serialize;

use super::NodeScores;
use crate::store::Graph;
use crate::traversal::Dijkstra;

/// Configuration for closeness centrality.
#[derive(Debug, Clone)]
pub struct ClosenessConfig {
    /// Maximum number of source nodes to run Dijkstra from, taken
    /// deterministically as the first indices. `None` runs every source.
    /// Default: 200
    pub source_cap: Option<usize>,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self { source_cap: Some(200) }
    }
}

impl ClosenessConfig {
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

/// Result of a closeness centrality computation.
#[derive(Debug, Clone, Serialize)]
pub struct ClosenessResult {
    /// Closeness scores, raw and max-normalized. Unsampled nodes hold 0.
    pub scores: NodeScores,
    /// Number of source nodes Dijkstra ran from.
    pub sources: usize,
    /// Whether the source set was capped below the node count.
    pub approximate: bool,
}

/// Closeness centrality algorithm implementation.
pub struct ClosenessCentrality;

impl ClosenessCentrality {
    /// Compute closeness centrality over the sampled source set.
    pub fn compute(graph: &Graph, config: &ClosenessConfig) -> ClosenessResult {
        let n = graph.node_count();
        let sources = config.source_cap.map_or(n, |cap| cap.min(n));

        let mut closeness = vec![0.0_f64; n];

        for s in 0..sources {
            let distances = Dijkstra::distances(graph, s);

            let mut total_distance = 0.0_f64;
            let mut reachable = 0usize;
            for (t, &d) in distances.iter().enumerate() {
                if t != s && d.is_finite() {
                    total_distance += d;
                    reachable += 1;
                }
            }

            if reachable > 0 && total_distance > 0.0 {
                closeness[s] = reachable as f64 / total_distance;
            }
        }

        ClosenessResult {
            scores: NodeScores::from_values(closeness),
            sources,
            approximate: sources < n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Airport, Flight};

    fn graph(n: u32, flights: &[Flight]) -> Graph {
        let airports = (0..n).map(|i| Airport::new(i, format!("A{i}"))).collect();
        Graph::build(airports, flights).expect("valid graph")
    }

    #[test]
    fn config_defaults() {
        let config = ClosenessConfig::default();
        assert_eq!(config.source_cap, Some(200));
    }

    #[test]
    fn closer_nodes_score_higher() {
        // 0 -> 1 -> 2: node 0 reaches both at 10 + 20, node 1 reaches one at 10
        let g = graph(3, &[Flight::new(0, 1, 10.0), Flight::new(1, 2, 10.0)]);
        let result = ClosenessCentrality::compute(&g, &ClosenessConfig::default());

        // CC(0) = 2 / 30, CC(1) = 1 / 10, CC(2) = 0 (reaches nothing)
        assert!((result.scores.values[0] - 2.0 / 30.0).abs() < 1e-12);
        assert!((result.scores.values[1] - 0.1).abs() < 1e-12);
        assert_eq!(result.scores.values[2], 0.0);
        assert_eq!(result.scores.normalized[1], 1.0);
    }

    #[test]
    fn no_reachable_nodes_scores_zero() {
        let g = graph(2, &[]);
        let result = ClosenessCentrality::compute(&g, &ClosenessConfig::default());
        assert_eq!(result.scores.values, vec![0.0, 0.0]);
        assert!(!result.approximate);
    }

    #[test]
    fn unsampled_sources_stay_zero() {
        let g = graph(
            3,
            &[Flight::new(0, 1, 1.0), Flight::new(1, 0, 1.0), Flight::new(2, 0, 1.0)],
        );
        let result =
            ClosenessCentrality::compute(&g, &ClosenessConfig::new().with_source_cap(Some(2)));
        assert!(result.approximate);
        assert_eq!(result.sources, 2);
        assert_eq!(result.scores.values[2], 0.0);
        assert!(result.scores.values[0] > 0.0);
    }
}

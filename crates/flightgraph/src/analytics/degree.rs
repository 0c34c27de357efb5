//! Degree statistics and degree centrality.
//!
//! Out-degree is a node's outgoing edge count; in-degree is the count of
//! edges elsewhere targeting it, read from the reverse adjacency index
//! built at graph construction so the whole pass stays O(V + E). Totals
//! include parallel edges and self-loops.
//!
//! Degree centrality is the total degree normalized by the maximum
//! observed total degree (0 when the maximum is 0).

use std::collections::BTreeMap;

use serde::Serialize;

use super::NodeScores;
use crate::store::Graph;

/// Degree distributions of the network.
#[derive(Debug, Clone, Serialize)]
pub struct DegreeStats {
    /// Outgoing edge count per node.
    pub out_degrees: Vec<usize>,
    /// Incoming edge count per node.
    pub in_degrees: Vec<usize>,
    /// Total (in + out) degree per node.
    pub total_degrees: Vec<usize>,
    /// Histogram: total degree -> number of nodes with that degree.
    pub distribution: BTreeMap<usize, usize>,
    /// Directed edge count of the graph the stats were computed from.
    pub edge_count: usize,
}

impl DegreeStats {
    /// Compute degree statistics in one pass over the adjacency.
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut out_degrees = Vec::with_capacity(n);
        let mut in_degrees = Vec::with_capacity(n);
        let mut total_degrees = Vec::with_capacity(n);
        let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

        for i in 0..n {
            let out = graph.out_degree(i);
            let inc = graph.in_degree(i);
            out_degrees.push(out);
            in_degrees.push(inc);
            total_degrees.push(out + inc);
            *distribution.entry(out + inc).or_insert(0) += 1;
        }

        Self { out_degrees, in_degrees, total_degrees, distribution, edge_count: graph.edge_count() }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.total_degrees.len()
    }

    /// Graph density: E / (V * (V - 1)), 0 when V <= 1.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n <= 1 {
            return 0.0;
        }
        self.edge_count as f64 / (n * (n - 1)) as f64
    }

    /// Mean total degree, 0 for an empty graph.
    pub fn average(&self) -> f64 {
        if self.total_degrees.is_empty() {
            return 0.0;
        }
        self.total_degrees.iter().sum::<usize>() as f64 / self.total_degrees.len() as f64
    }

    /// Maximum total degree, 0 for an empty graph.
    pub fn max(&self) -> usize {
        self.total_degrees.iter().copied().max().unwrap_or(0)
    }

    /// Minimum total degree, 0 for an empty graph.
    pub fn min(&self) -> usize {
        self.total_degrees.iter().copied().min().unwrap_or(0)
    }

    /// Degree centrality: total degree normalized by the maximum.
    pub fn centrality(&self) -> NodeScores {
        NodeScores::from_values(self.total_degrees.iter().map(|&d| d as f64).collect())
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
    fn degrees_count_both_directions() {
        let g = graph(3, &[Flight::new(0, 1, 1.0), Flight::new(2, 1, 1.0)]);
        let stats = DegreeStats::compute(&g);

        assert_eq!(stats.out_degrees, vec![1, 0, 1]);
        assert_eq!(stats.in_degrees, vec![0, 2, 0]);
        assert_eq!(stats.total_degrees, vec![1, 2, 1]);
        assert_eq!(stats.max(), 2);
        assert_eq!(stats.min(), 1);
        assert!((stats.average() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn degree_sums_equal_edge_count() {
        let g = graph(
            4,
            &[Flight::new(0, 1, 1.0), Flight::new(0, 1, 1.0), Flight::new(2, 3, 1.0)],
        );
        let stats = DegreeStats::compute(&g);

        assert_eq!(stats.out_degrees.iter().sum::<usize>(), g.edge_count());
        assert_eq!(stats.in_degrees.iter().sum::<usize>(), g.edge_count());
    }

    #[test]
    fn density_bounds() {
        let empty = DegreeStats::compute(&graph(0, &[]));
        assert_eq!(empty.density(), 0.0);

        let single = DegreeStats::compute(&graph(1, &[]));
        assert_eq!(single.density(), 0.0);

        // Complete directed graph on 3 nodes
        let g = graph(
            3,
            &[
                Flight::new(0, 1, 1.0),
                Flight::new(0, 2, 1.0),
                Flight::new(1, 0, 1.0),
                Flight::new(1, 2, 1.0),
                Flight::new(2, 0, 1.0),
                Flight::new(2, 1, 1.0),
            ],
        );
        let stats = DegreeStats::compute(&g);
        assert!((stats.density() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_histogram() {
        let g = graph(3, &[Flight::new(0, 1, 1.0), Flight::new(2, 1, 1.0)]);
        let stats = DegreeStats::compute(&g);
        assert_eq!(stats.distribution.get(&1), Some(&2));
        assert_eq!(stats.distribution.get(&2), Some(&1));
    }

    #[test]
    fn centrality_normalized_by_max() {
        let g = graph(3, &[Flight::new(0, 1, 1.0), Flight::new(2, 1, 1.0)]);
        let centrality = DegreeStats::compute(&g).centrality();
        assert_eq!(centrality.normalized, vec![0.5, 1.0, 0.5]);
    }
}

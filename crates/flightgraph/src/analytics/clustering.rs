//! Clustering coefficient.
//!
//! The local clustering coefficient of a node measures how connected its
//! neighbors are to each other:
//!
//! ```text
//! C(v) = closed pairs among v's neighbors / possible pairs
//! ```
//!
//! Neighbors are the distinct out-targets of `v` (self-loops excluded);
//! a pair counts as closed when an edge exists between the two neighbors
//! in either direction. Only nodes with at least two neighbors have a
//! defined coefficient; the global value is the mean over those nodes
//! (0 if none qualify).

use std::collections::HashSet;

use serde::Serialize;

use crate::store::Graph;

/// Result of a clustering coefficient computation.
#[derive(Debug, Clone, Serialize)]
pub struct ClusteringResult {
    /// Local coefficient per node; 0 for nodes with fewer than two
    /// distinct neighbors.
    pub coefficients: Vec<f64>,
    /// Mean coefficient over nodes with at least two neighbors.
    pub global: f64,
    /// Number of nodes that had a defined coefficient.
    pub qualifying_nodes: usize,
}

impl ClusteringResult {
    /// Local coefficient of a node, if in range.
    pub fn coefficient(&self, node: usize) -> Option<f64> {
        self.coefficients.get(node).copied()
    }
}

/// Clustering coefficient algorithm implementation.
pub struct ClusteringCoefficient;

impl ClusteringCoefficient {
    /// Compute local and global clustering coefficients.
    pub fn compute(graph: &Graph) -> ClusteringResult {
        let n = graph.node_count();

        // Distinct out-neighbor sets, used both for pair enumeration and
        // the O(1) closure probes
        let neighbor_sets: Vec<HashSet<usize>> = (0..n)
            .map(|i| {
                graph.neighbors(i).iter().map(|c| c.target).filter(|&t| t != i).collect()
            })
            .collect();

        let mut coefficients = vec![0.0_f64; n];
        let mut qualifying_nodes = 0usize;
        let mut total = 0.0_f64;

        for i in 0..n {
            let neighbors: Vec<usize> = neighbor_sets[i].iter().copied().collect();
            let k = neighbors.len();
            if k < 2 {
                continue;
            }

            let mut closed = 0usize;
            for a in 0..k {
                for b in (a + 1)..k {
                    let (v1, v2) = (neighbors[a], neighbors[b]);
                    if neighbor_sets[v1].contains(&v2) || neighbor_sets[v2].contains(&v1) {
                        closed += 1;
                    }
                }
            }

            let possible = k * (k - 1) / 2;
            coefficients[i] = closed as f64 / possible as f64;
            total += coefficients[i];
            qualifying_nodes += 1;
        }

        let global = if qualifying_nodes > 0 { total / qualifying_nodes as f64 } else { 0.0 };

        ClusteringResult { coefficients, global, qualifying_nodes }
    }
}

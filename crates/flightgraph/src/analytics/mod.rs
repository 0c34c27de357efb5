//! Graph analytics algorithms.
//!
//! This module provides the structural and centrality analyses of the
//! engine:
//!
//! # Centrality Measures
//!
//! - [`PageRank`] - Iterative power method for node importance ranking
//! - [`BetweennessCentrality`] - Brandes algorithm over a bounded source
//!   sample for bridge/bottleneck detection
//! - [`ClosenessCentrality`] - Distance-based centrality over a bounded
//!   source sample
//! - Degree centrality via [`DegreeStats::centrality`]
//!
//! # Structure
//!
//! - [`DegreeStats`] - Degree distributions and density
//! - [`ConnectedComponents`] - Weak connectivity components
//! - [`ClusteringCoefficient`] - Local and global clustering
//! - [`Connectivity`] - Sampled diameter estimate and degree
//!   assortativity
//! - [`CommunityDetection`] - Greedy modularity local search
//!
//! Every analysis takes a borrowed [`crate::store::Graph`] and returns a
//! plain result value; degenerate graphs (no nodes, no edges) degrade to
//! zero/empty results rather than errors.

mod centrality;
mod closeness;
mod clustering;
mod community;
mod connected;
mod connectivity;
mod degree;
mod pagerank;

pub use centrality::{BetweennessCentrality, BetweennessConfig, BetweennessResult};
pub use closeness::{ClosenessCentrality, ClosenessConfig, ClosenessResult};
pub use clustering::{ClusteringCoefficient, ClusteringResult};
pub use community::{CommunityConfig, CommunityDetection, CommunityResult};
pub use connected::{ComponentResult, ConnectedComponents};
pub use connectivity::{Connectivity, DiameterConfig, DiameterResult};
pub use degree::DegreeStats;
pub use pagerank::{PageRank, PageRankConfig, PageRankResult};

use serde::Serialize;

/// Per-node scores paired with their max-normalized form.
///
/// Every centrality in this engine is reported both raw and normalized
/// by the maximum observed value (all zeros when the maximum is 0), so
/// downstream consumers such as the hub ranking can mix measures on a
/// common scale.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeScores {
    /// Raw score per node index.
    pub values: Vec<f64>,
    /// Scores divided by the maximum observed value; zeros if that
    /// maximum is 0.
    pub normalized: Vec<f64>,
}

impl NodeScores {
    /// Wrap raw values, deriving the normalized form.
    pub fn from_values(values: Vec<f64>) -> Self {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        let normalized = if max > 0.0 {
            values.iter().map(|v| v / max).collect()
        } else {
            vec![0.0; values.len()]
        };
        Self { values, normalized }
    }

    /// Number of scored nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether any nodes were scored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw score of a node, if in range.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Normalized score of a node, if in range.
    pub fn normalized(&self, index: usize) -> Option<f64> {
        self.normalized.get(index).copied()
    }

    /// The highest-scoring node and its raw score.
    pub fn max(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Node indices sorted by raw score, descending.
    pub fn sorted(&self) -> Vec<(usize, f64)> {
        let mut pairs: Vec<_> = self.values.iter().copied().enumerate().collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs
    }

    /// The top N nodes by raw score.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.sorted().into_iter().take(n).collect()
    }

    /// Mean raw score, 0 for an empty score set.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

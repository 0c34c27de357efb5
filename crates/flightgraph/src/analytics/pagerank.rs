//! PageRank via the iterative power method.
//!
//! # Algorithm
//!
//! Ranks start uniform at 1/N. Each iteration every node pushes
//! `damping * rank / out_degree` to each successor (one push per edge,
//! so parallel flights weigh double) on top of a `(1 - damping) / N`
//! teleport share given to every node.
//!
//! # Dangling nodes
//!
//! A node with no outgoing edges contributes nothing forward: its
//! retained mass is NOT redistributed, so the global rank sum drifts
//! below 1 while any sink exists. Consumers read the max-normalized
//! scores, which the leak does not disturb.
//!
//! The iteration count is fixed rather than convergence-tested — 20
//! rounds is well past stationary on route-network topologies.

use serde::Serialize;

use super::NodeScores;
use crate::store::Graph;

/// Configuration for PageRank.
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Number of power iterations to run.
    /// Default: 20
    pub iterations: usize,

    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85
    pub damping: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { iterations: 20, damping: 0.85 }
    }
}

impl PageRankConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration count.
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the damping factor. Common values are 0.85 or 0.9.
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }
}

/// Result of a PageRank computation.
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Rank scores, raw and max-normalized.
    pub scores: NodeScores,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// PageRank algorithm implementation.
pub struct PageRank;

impl PageRank {
    /// Compute PageRank scores for all nodes.
    pub fn compute(graph: &Graph, config: &PageRankConfig) -> PageRankResult {
        let n = graph.node_count();
        if n == 0 {
            return PageRankResult { scores: NodeScores::default(), iterations: 0 };
        }

        let d = config.damping;
        let base = (1.0 - d) / n as f64;

        let mut ranks = vec![1.0 / n as f64; n];
        let mut next = vec![0.0_f64; n];

        for _ in 0..config.iterations {
            next.fill(base);

            for i in 0..n {
                let out = graph.neighbors(i);
                if out.is_empty() {
                    continue;
                }
                let share = d * ranks[i] / out.len() as f64;
                for connection in out {
                    next[connection.target] += share;
                }
            }

            std::mem::swap(&mut ranks, &mut next);
        }

        PageRankResult { scores: NodeScores::from_values(ranks), iterations: config.iterations }
    }
}

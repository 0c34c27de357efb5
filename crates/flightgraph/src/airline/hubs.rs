//! Composite hub ranking.
//!
//! A hub score blends raw connectivity with two normalized centrality
//! measures:
//!
//! ```text
//! score = 0.4 * total_degree
//!       + 0.3 * (100 * degree_centrality)
//!       + 0.3 * (100 * pagerank)
//! ```
//!
//! Degree centrality and PageRank enter max-normalized (scaled to 100 to
//! sit in the same range as typical hub degrees), so the ranking rewards
//! airports that are both heavily connected and structurally important.

use serde::Serialize;

use crate::analytics::{DegreeStats, NodeScores};

const DEGREE_WEIGHT: f64 = 0.4;
const DEGREE_CENTRALITY_WEIGHT: f64 = 0.3;
const PAGERANK_WEIGHT: f64 = 0.3;

/// One airport's hub score and its contributing factors.
#[derive(Debug, Clone, Serialize)]
pub struct HubScore {
    /// Node index of the airport.
    pub index: usize,
    /// Composite score.
    pub score: f64,
    /// Total degree.
    pub total_degree: usize,
    /// Outgoing edge count.
    pub out_degree: usize,
    /// Incoming edge count.
    pub in_degree: usize,
    /// Max-normalized degree centrality.
    pub degree_centrality: f64,
    /// Max-normalized PageRank.
    pub pagerank: f64,
}

/// Hub scores for every airport, ranked descending.
#[derive(Debug, Clone, Serialize)]
pub struct HubRanking {
    /// All airports ordered by score, best first.
    pub ranked: Vec<HubScore>,
}

impl HubRanking {
    /// Score and rank every airport.
    ///
    /// `degree_centrality` and `pagerank` must cover the same node set
    /// as `degrees` (they all come from the same graph in practice).
    pub fn compute(
        degrees: &DegreeStats,
        degree_centrality: &NodeScores,
        pagerank: &NodeScores,
    ) -> Self {
        let n = degrees.node_count();
        let mut ranked = Vec::with_capacity(n);

        for index in 0..n {
            let centrality = degree_centrality.normalized(index).unwrap_or(0.0);
            let rank = pagerank.normalized(index).unwrap_or(0.0);
            let total_degree = degrees.total_degrees[index];

            let score = DEGREE_WEIGHT * total_degree as f64
                + DEGREE_CENTRALITY_WEIGHT * (100.0 * centrality)
                + PAGERANK_WEIGHT * (100.0 * rank);

            ranked.push(HubScore {
                index,
                score,
                total_degree,
                out_degree: degrees.out_degrees[index],
                in_degree: degrees.in_degrees[index],
                degree_centrality: centrality,
                pagerank: rank,
            });
        }

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        Self { ranked }
    }

    /// The top `n` hubs.
    pub fn top(&self, n: usize) -> &[HubScore] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// The ten highest-scoring hubs.
    pub fn top10(&self) -> &[HubScore] {
        self.top(10)
    }

    /// The fifty highest-scoring hubs.
    pub fn top50(&self) -> &[HubScore] {
        self.top(50)
    }

    /// The full ranking.
    pub fn all(&self) -> &[HubScore] {
        &self.ranked
    }

    /// The best hub, if the network is non-empty.
    pub fn best(&self) -> Option<&HubScore> {
        self.ranked.first()
    }
}

//! Community detection by greedy modularity optimization.
//!
//! A single-level local search: every node starts in its own community,
//! and sweeps over the nodes move each one into the neighboring
//! community with the best strictly-positive modularity gain until a
//! sweep makes no move or the pass cap is reached. This is a fast
//! heuristic, not exact modularity maximization.
//!
//! # Modularity
//!
//! Scoring uses the Newman-Girvan Q over the symmetrized view of the
//! network (each directed edge ties both endpoints, weight 1; node
//! strength is the total degree; m is the directed edge count):
//!
//! ```text
//! Q = (1/2m) * sum_ij[ (A_ij - k_i * k_j / 2m) * delta(c_i, c_j) ]
//! ```
//!
//! Under this view the trivial everyone-in-one-community partition
//! scores exactly 0. Both the per-move gain and the final score iterate
//! edges and per-community strength sums, never node pairs, so a sweep
//! is linear in the edge count.
//!
//! The per-move gain for switching node `i` into community `c`:
//!
//! ```text
//! dQ = (k_i,c - k_i,cur) / m - k_i * (S_c - S_cur) / (2m^2)
//! ```
//!
//! where `k_i,c` is the weight between `i` and community `c` and `S_c`
//! is the strength sum of `c` (excluding `i` for its own community).

use std::collections::HashMap;

use serde::Serialize;

use crate::store::Graph;

/// Configuration for community detection.
#[derive(Debug, Clone)]
pub struct CommunityConfig {
    /// Maximum number of sweeps over all nodes.
    /// Default: 10
    pub max_passes: usize,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self { max_passes: 10 }
    }
}

impl CommunityConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sweep cap.
    pub const fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// Result of community detection.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityResult {
    /// Community assignment per node index; ids are dense in 0..k.
    pub assignments: Vec<usize>,
    /// Number of distinct communities.
    pub num_communities: usize,
    /// Community sizes, indexed by community id.
    pub sizes: Vec<usize>,
    /// Newman-Girvan modularity of the final partition.
    pub modularity: f64,
    /// Number of sweeps performed.
    pub passes: usize,
    /// Whether a sweep completed without any reassignment.
    pub converged: bool,
}

impl CommunityResult {
    /// The community id of a node, if in range.
    pub fn community(&self, node: usize) -> Option<usize> {
        self.assignments.get(node).copied()
    }

    /// Size of the largest community, 0 when there are none.
    pub fn largest(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

/// The symmetrized adjacency the detector operates on: per node, merged
/// neighbor indices and edge weights covering both directions.
struct UndirectedView {
    neighbors: Vec<Vec<usize>>,
    weights: Vec<Vec<f64>>,
    strength: Vec<f64>,
}

impl UndirectedView {
    fn build(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut neighbors: Vec<Vec<usize>> = Vec::with_capacity(n);
        let mut weights: Vec<Vec<f64>> = Vec::with_capacity(n);
        let mut strength = Vec::with_capacity(n);

        for i in 0..n {
            let mut merged: HashMap<usize, f64> = HashMap::new();
            for connection in graph.neighbors(i) {
                *merged.entry(connection.target).or_insert(0.0) += 1.0;
            }
            for &source in graph.in_neighbors(i) {
                *merged.entry(source).or_insert(0.0) += 1.0;
            }

            let mut node_neighbors = Vec::with_capacity(merged.len());
            let mut node_weights = Vec::with_capacity(merged.len());
            let mut total = 0.0;
            for (j, w) in merged {
                node_neighbors.push(j);
                node_weights.push(w);
                total += w;
            }
            neighbors.push(node_neighbors);
            weights.push(node_weights);
            strength.push(total);
        }

        Self { neighbors, weights, strength }
    }
}

/// Community detection algorithm implementation.
pub struct CommunityDetection;

impl CommunityDetection {
    /// Detect communities with greedy modularity local search.
    pub fn compute(graph: &Graph, config: &CommunityConfig) -> CommunityResult {
        let n = graph.node_count();
        let m = graph.edge_count() as f64;

        if n == 0 || m == 0.0 {
            // No edges: every node keeps its singleton community
            return CommunityResult {
                assignments: (0..n).collect(),
                num_communities: n,
                sizes: vec![1; n],
                modularity: 0.0,
                passes: 0,
                converged: true,
            };
        }

        let view = UndirectedView::build(graph);

        let mut community: Vec<usize> = (0..n).collect();
        // Strength sum per community id, maintained across moves so each
        // gain evaluation stays O(neighbor communities)
        let mut community_strength: Vec<f64> = view.strength.clone();

        let mut passes = 0;
        let mut converged = false;

        while passes < config.max_passes {
            passes += 1;
            let mut moved = false;

            for i in 0..n {
                let current = community[i];
                let ki = view.strength[i];

                // Edge weight from i into each neighboring community
                let mut link_weights: HashMap<usize, f64> = HashMap::new();
                for (idx, &j) in view.neighbors[i].iter().enumerate() {
                    if j == i {
                        continue;
                    }
                    *link_weights.entry(community[j]).or_insert(0.0) += view.weights[i][idx];
                }

                let ki_current = link_weights.get(&current).copied().unwrap_or(0.0);
                let sigma_current = community_strength[current] - ki;

                let mut best_community = current;
                let mut best_gain = 0.0;
                for (&c, &ki_c) in &link_weights {
                    if c == current {
                        continue;
                    }
                    let sigma_c = community_strength[c];
                    let gain = (ki_c - ki_current) / m
                        - ki * (sigma_c - sigma_current) / (2.0 * m * m);
                    if gain > best_gain {
                        best_gain = gain;
                        best_community = c;
                    }
                }

                if best_community != current {
                    community_strength[current] -= ki;
                    community_strength[best_community] += ki;
                    community[i] = best_community;
                    moved = true;
                }
            }

            if !moved {
                converged = true;
                break;
            }
        }

        // Relabel community ids to be contiguous from 0
        let mut relabel: HashMap<usize, usize> = HashMap::new();
        for c in &mut community {
            let next = relabel.len();
            *c = *relabel.entry(*c).or_insert(next);
        }
        let num_communities = relabel.len();

        let mut sizes = vec![0usize; num_communities];
        for &c in &community {
            sizes[c] += 1;
        }

        let modularity = Self::modularity(&view, &community, num_communities, m);

        CommunityResult { assignments: community, num_communities, sizes, modularity, passes, converged }
    }

    /// Score an arbitrary partition of the graph.
    ///
    /// `assignments` maps each node index to a community id (any dense
    /// or sparse labeling). Returns 0 for graphs without edges.
    pub fn score(graph: &Graph, assignments: &[usize]) -> f64 {
        let m = graph.edge_count() as f64;
        if m == 0.0 || assignments.len() != graph.node_count() {
            return 0.0;
        }
        let view = UndirectedView::build(graph);
        let num_communities = assignments.iter().copied().max().map_or(0, |c| c + 1);
        Self::modularity(&view, assignments, num_communities, m)
    }

    /// Newman-Girvan Q over edges and community strength sums.
    fn modularity(view: &UndirectedView, community: &[usize], num_communities: usize, m: f64) -> f64 {
        let two_m = 2.0 * m;

        let mut intra = 0.0_f64;
        for (i, neighbors) in view.neighbors.iter().enumerate() {
            for (idx, &j) in neighbors.iter().enumerate() {
                if community[i] == community[j] {
                    intra += view.weights[i][idx];
                }
            }
        }

        let mut community_strength = vec![0.0_f64; num_communities];
        for (i, &c) in community.iter().enumerate() {
            community_strength[c] += view.strength[i];
        }
        let expected: f64 = community_strength.iter().map(|k| k * k).sum::<f64>() / two_m;

        (intra - expected) / two_m
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

    /// All six directed edges among three nodes.
    fn triangle(a: u32, b: u32, c: u32) -> Vec<Flight> {
        [(a, b), (b, a), (b, c), (c, b), (a, c), (c, a)]
            .iter()
            .map(|&(s, t)| Flight::new(s, t, 1.0))
            .collect()
    }

    #[test]
    fn config_defaults() {
        let config = CommunityConfig::default();
        assert_eq!(config.max_passes, 10);
    }

    #[test]
    fn edgeless_graph_stays_singleton() {
        let result = CommunityDetection::compute(&graph(3, &[]), &CommunityConfig::default());
        assert_eq!(result.num_communities, 3);
        assert_eq!(result.sizes, vec![1, 1, 1]);
        assert_eq!(result.modularity, 0.0);
        assert!(result.converged);
    }

    #[test]
    fn one_community_partition_scores_zero() {
        let g = graph(3, &triangle(0, 1, 2));
        let q = CommunityDetection::score(&g, &[0, 0, 0]);
        assert!(q.abs() < 1e-12);
    }

    #[test]
    fn singleton_partition_scores_negative_with_edges() {
        let g = graph(3, &triangle(0, 1, 2));
        let q = CommunityDetection::score(&g, &[0, 1, 2]);
        assert!(q < 0.0);
    }

    #[test]
    fn two_cliques_split_cleanly() {
        let mut flights = triangle(0, 1, 2);
        flights.extend(triangle(3, 4, 5));
        // Single weak bridge between the cliques
        flights.push(Flight::new(2, 3, 1.0));
        let g = graph(6, &flights);

        let result = CommunityDetection::compute(&g, &CommunityConfig::default());

        assert!(result.converged);
        assert_eq!(result.num_communities, 2);
        assert_eq!(result.community(0), result.community(1));
        assert_eq!(result.community(0), result.community(2));
        assert_eq!(result.community(3), result.community(4));
        assert_ne!(result.community(0), result.community(3));
        assert!(result.modularity > 0.0);
    }

    #[test]
    fn discovered_partition_beats_singletons() {
        let mut flights = triangle(0, 1, 2);
        flights.extend(triangle(3, 4, 5));
        let g = graph(6, &flights);

        let result = CommunityDetection::compute(&g, &CommunityConfig::default());
        let singleton_q = CommunityDetection::score(&g, &[0, 1, 2, 3, 4, 5]);

        assert!(result.modularity >= singleton_q);
        // Two clean triangles: Q = 1/2
        assert!((result.modularity - 0.5).abs() < 1e-12);
    }

    #[test]
    fn assignments_are_densely_labeled() {
        let mut flights = triangle(0, 1, 2);
        flights.extend(triangle(3, 4, 5));
        let g = graph(6, &flights);

        let result = CommunityDetection::compute(&g, &CommunityConfig::default());
        let max_id = result.assignments.iter().copied().max().unwrap_or(0);
        assert_eq!(max_id + 1, result.num_communities);
        assert_eq!(result.sizes.iter().sum::<usize>(), 6);
        assert_eq!(result.largest(), 3);
    }
}

//! Dijkstra's algorithm for weighted shortest path finding.
//!
//! Two forms are provided: a single-pair query with path reconstruction
//! (used by the route query surface and the efficiency metric) and a
//! single-source distance vector (used by closeness centrality and the
//! diameter estimate, which invoke it once per sampled source).
//!
//! Both use a binary heap with lazy deletion, so a call is
//! O((V + E) log V) and repeated single-source runs stay cheap. Edge
//! weights are validated positive at graph construction, so the
//! non-negativity precondition always holds here.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::store::Graph;

/// A weighted path through the network, from source to target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node indices along the path, source first. Empty when the target
    /// is unreachable.
    pub nodes: Vec<usize>,
    /// Total accumulated distance; infinite when unreachable.
    pub total_distance: f64,
}

impl PathResult {
    /// A path for a single node (source == target).
    pub fn single_node(node: usize) -> Self {
        Self { nodes: vec![node], total_distance: 0.0 }
    }

    /// The unreachable result: empty path, infinite distance.
    pub const fn unreachable() -> Self {
        Self { nodes: Vec::new(), total_distance: f64::INFINITY }
    }

    /// Whether the target was reached.
    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of edges in the path (0 for unreachable or single-node).
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Entry in the priority queue, ordered so the smallest distance pops
/// first.
#[derive(Debug, Clone, PartialEq)]
struct DijkstraEntry {
    node: usize,
    distance: f64,
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Dijkstra shortest-path kernels.
pub struct Dijkstra;

impl Dijkstra {
    /// Find the shortest weighted path between two nodes.
    ///
    /// Returns [`PathResult::unreachable`] when no path exists or either
    /// index is out of range, and a zero-distance single-node path when
    /// `source == target`.
    pub fn shortest_path(graph: &Graph, source: usize, target: usize) -> PathResult {
        let n = graph.node_count();
        if source >= n || target >= n {
            return PathResult::unreachable();
        }
        if source == target {
            return PathResult::single_node(source);
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut heap: BinaryHeap<DijkstraEntry> = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(DijkstraEntry { node: source, distance: 0.0 });

        while let Some(DijkstraEntry { node: current, distance: current_dist }) = heap.pop() {
            if finalized[current] {
                continue;
            }
            if current == target {
                return Self::reconstruct(&prev, source, target, current_dist);
            }
            finalized[current] = true;

            for connection in graph.neighbors(current) {
                let next = connection.target;
                if finalized[next] {
                    continue;
                }
                let alt = current_dist + connection.distance;
                if alt < dist[next] {
                    dist[next] = alt;
                    prev[next] = Some(current);
                    heap.push(DijkstraEntry { node: next, distance: alt });
                }
            }
        }

        PathResult::unreachable()
    }

    /// Compute shortest distances from `source` to every node.
    ///
    /// Unreachable nodes (and every node, if `source` is out of range)
    /// hold `f64::INFINITY`; the source holds 0.
    pub fn distances(graph: &Graph, source: usize) -> Vec<f64> {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        if source >= n {
            return dist;
        }

        let mut finalized = vec![false; n];
        let mut heap: BinaryHeap<DijkstraEntry> = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(DijkstraEntry { node: source, distance: 0.0 });

        while let Some(DijkstraEntry { node: current, distance: current_dist }) = heap.pop() {
            if finalized[current] {
                continue;
            }
            finalized[current] = true;

            for connection in graph.neighbors(current) {
                let next = connection.target;
                if finalized[next] {
                    continue;
                }
                let alt = current_dist + connection.distance;
                if alt < dist[next] {
                    dist[next] = alt;
                    heap.push(DijkstraEntry { node: next, distance: alt });
                }
            }
        }

        dist
    }

    /// Trace the parent chain back from target to source.
    fn reconstruct(
        prev: &[Option<usize>],
        source: usize,
        target: usize,
        total_distance: f64,
    ) -> PathResult {
        let mut nodes = vec![target];
        let mut current = target;
        while let Some(parent) = prev[current] {
            nodes.push(parent);
            current = parent;
            if current == source {
                break;
            }
        }
        nodes.reverse();
        PathResult { nodes, total_distance }
    }
}

//! Breadth-first traversal kernels.
//!
//! Route networks are analyzed for weak connectivity: two airports
//! belong to the same component if a path exists ignoring edge
//! direction. [`weak_component`] therefore expands both the forward and
//! the reverse adjacency; the reverse index built at graph construction
//! keeps the whole components pass O(V + E).
//!
//! [`is_reachable_without`] is the directed reachability probe behind
//! the redundancy metric, a depth-first search with an explicit stack:
//! instead of deleting an edge from a copied adjacency, the probe
//! carries an [`ExcludedEdge`] overlay and skips that one adjacency
//! slot during expansion.

use std::collections::VecDeque;

use crate::store::Graph;

/// A single adjacency slot to ignore during traversal, identified by its
/// source node index and its position in that node's outgoing list.
/// Identifying the slot rather than the (source, target) pair keeps
/// parallel edges distinct: excluding one of two parallel flights still
/// leaves the other traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludedEdge {
    /// Source node index of the excluded edge.
    pub source: usize,
    /// Position of the edge in the source node's outgoing adjacency.
    pub slot: usize,
}

/// Collect the weak component containing `start`.
///
/// Expands forward and reverse adjacency from `start`, marking every
/// discovered node in `visited`. Nodes already marked are skipped, so
/// calling this once per unvisited node enumerates all components with
/// each node visited exactly once overall.
pub fn weak_component(graph: &Graph, start: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut component = Vec::new();
    if start >= visited.len() || visited[start] {
        return component;
    }

    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        component.push(node);

        for connection in graph.neighbors(node) {
            if !visited[connection.target] {
                visited[connection.target] = true;
                queue.push_back(connection.target);
            }
        }
        for &source in graph.in_neighbors(node) {
            if !visited[source] {
                visited[source] = true;
                queue.push_back(source);
            }
        }
    }

    component
}

/// Whether `target` stays reachable from `source` along directed edges
/// when one adjacency slot is excluded. Depth-first with an explicit
/// stack; the exclusion overlay is checked per slot during expansion.
pub fn is_reachable_without(
    graph: &Graph,
    source: usize,
    target: usize,
    excluded: ExcludedEdge,
) -> bool {
    let n = graph.node_count();
    if source >= n || target >= n {
        return false;
    }
    if source == target {
        return true;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![source];
    visited[source] = true;

    while let Some(node) = stack.pop() {
        for (slot, connection) in graph.neighbors(node).iter().enumerate() {
            if node == excluded.source && slot == excluded.slot {
                continue;
            }
            if connection.target == target {
                return true;
            }
            if !visited[connection.target] {
                visited[connection.target] = true;
                stack.push(connection.target);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Airport, Flight, Graph};

    fn graph(n: u32, flights: &[Flight]) -> Graph {
        let airports = (0..n).map(|i| Airport::new(i, format!("A{i}"))).collect();
        Graph::build(airports, flights).expect("valid graph")
    }

    #[test]
    fn weak_component_ignores_direction() {
        // 0 -> 1, 2 -> 1: all three weakly connected despite no directed
        // path from 0 to 2
        let g = graph(4, &[Flight::new(0, 1, 1.0), Flight::new(2, 1, 1.0)]);
        let mut visited = vec![false; 4];

        let mut component = weak_component(&g, 0, &mut visited);
        component.sort_unstable();
        assert_eq!(component, vec![0, 1, 2]);

        let isolated = weak_component(&g, 3, &mut visited);
        assert_eq!(isolated, vec![3]);
    }

    #[test]
    fn weak_component_skips_visited_start() {
        let g = graph(2, &[Flight::new(0, 1, 1.0)]);
        let mut visited = vec![false; 2];
        assert_eq!(weak_component(&g, 0, &mut visited).len(), 2);
        assert!(weak_component(&g, 1, &mut visited).is_empty());
    }

    #[test]
    fn exclusion_severs_only_one_slot() {
        // Two parallel 0 -> 1 flights: excluding one leaves the other
        let g = graph(2, &[Flight::new(0, 1, 1.0), Flight::new(0, 1, 2.0)]);
        assert!(is_reachable_without(&g, 0, 1, ExcludedEdge { source: 0, slot: 0 }));

        // A single 0 -> 1 flight: excluding it disconnects the pair
        let g = graph(2, &[Flight::new(0, 1, 1.0)]);
        assert!(!is_reachable_without(&g, 0, 1, ExcludedEdge { source: 0, slot: 0 }));
    }

    #[test]
    fn exclusion_respects_alternate_routes() {
        // Ring 0 -> 1 -> 2 -> 0: dropping 0 -> 1 still reaches 1 the long way
        let g = graph(
            3,
            &[Flight::new(0, 1, 1.0), Flight::new(1, 2, 1.0), Flight::new(2, 0, 1.0)],
        );
        assert!(!is_reachable_without(&g, 0, 1, ExcludedEdge { source: 0, slot: 0 }));

        let g = graph(
            3,
            &[
                Flight::new(0, 1, 1.0),
                Flight::new(1, 2, 1.0),
                Flight::new(2, 0, 1.0),
                Flight::new(0, 2, 1.0),
                Flight::new(2, 1, 1.0),
            ],
        );
        assert!(is_reachable_without(&g, 0, 1, ExcludedEdge { source: 0, slot: 0 }));
    }
}

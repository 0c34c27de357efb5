//! Property tests for algebraic invariants of the analytics suite.

use proptest::prelude::*;

use flightgraph::analytics::{CommunityDetection, DegreeStats, PageRank, PageRankConfig};
use flightgraph::{Airport, Flight, Graph};

/// A small arbitrary simple digraph: up to 12 nodes, unique directed
/// pairs with no parallel edges or self-loops (so density stays within
/// [0, 1] by construction), positive weights.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..12).prop_flat_map(|n| {
        let pairs = proptest::collection::btree_set((0..n, 0..n), 0..(n * n).min(30));
        let weights = proptest::collection::vec(1.0f64..5000.0, 30);
        (Just(n), pairs, weights).prop_map(|(n, pairs, weights)| {
            let airports: Vec<Airport> =
                (0..n as u32).map(|i| Airport::new(i, format!("Airport {i}"))).collect();
            let flights: Vec<Flight> = pairs
                .into_iter()
                .filter(|&(s, t)| s != t)
                .zip(weights)
                .map(|((s, t), w)| Flight::new(s as u32, t as u32, w))
                .collect();
            Graph::build(airports, &flights).expect("generated graph is valid")
        })
    })
}

proptest! {
    #[test]
    fn density_stays_in_unit_interval(graph in arb_graph()) {
        let density = DegreeStats::compute(&graph).density();
        prop_assert!((0.0..=1.0).contains(&density));
    }

    #[test]
    fn degree_sums_equal_edge_count(graph in arb_graph()) {
        let stats = DegreeStats::compute(&graph);
        prop_assert_eq!(stats.out_degrees.iter().sum::<usize>(), graph.edge_count());
        prop_assert_eq!(stats.in_degrees.iter().sum::<usize>(), graph.edge_count());
    }

    #[test]
    fn shortest_path_to_self_is_always_zero(graph in arb_graph()) {
        for node in 0..graph.node_count() {
            let path = graph.shortest_path(node, node);
            prop_assert_eq!(path.total_distance, 0.0);
            prop_assert_eq!(path.nodes.len(), 1);
        }
    }

    #[test]
    fn pagerank_normalized_scores_are_bounded(graph in arb_graph()) {
        let result = PageRank::compute(&graph, &PageRankConfig::default());
        for &score in &result.scores.normalized {
            prop_assert!((0.0..=1.0).contains(&score));
        }
        // Raw mass never exceeds 1 even with the dangling leak
        let sum: f64 = result.scores.values.iter().sum();
        prop_assert!(sum <= 1.0 + 1e-9);
    }

    #[test]
    fn one_community_partition_scores_zero(graph in arb_graph()) {
        if graph.edge_count() > 0 {
            let all_one = vec![0usize; graph.node_count()];
            prop_assert!(CommunityDetection::score(&graph, &all_one).abs() < 1e-9);
        }
    }
}

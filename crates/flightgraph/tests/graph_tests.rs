//! Integration tests for graph construction and the query surface.

use flightgraph::{Airport, Flight, Graph, GraphError};

// ============================================================================
// Helpers
// ============================================================================

fn airports(n: u32) -> Vec<Airport> {
    (0..n).map(|i| Airport::new(i, format!("Airport {i}"))).collect()
}

fn graph(n: u32, flights: &[Flight]) -> Graph {
    Graph::build(airports(n), flights).expect("valid graph")
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn build_is_a_bijection_over_ids() {
    let g = graph(5, &[]);
    for id in 0..5 {
        let index = g.index_of(id).expect("known id");
        assert_eq!(g.airport(index).expect("in range").id, id);
    }
    assert_eq!(g.index_of(5), None);
}

#[test]
fn duplicate_ids_fail_construction() {
    let mut nodes = airports(3);
    nodes.push(Airport::new(1, "Duplicate"));
    assert!(matches!(
        Graph::build(nodes, &[]),
        Err(GraphError::DuplicateAirport(1))
    ));
}

#[test]
fn non_positive_distances_fail_construction() {
    let err = Graph::build(airports(2), &[Flight::new(0, 1, 0.0)]).expect_err("zero distance");
    assert!(matches!(err, GraphError::InvalidDistance { source: 0, target: 1, .. }));
}

#[test]
fn unknown_endpoints_are_dropped_not_rejected() {
    let g = Graph::build(
        airports(3),
        &[
            Flight::new(0, 1, 10.0),
            Flight::new(0, 99, 10.0),
            Flight::new(99, 1, 10.0),
            Flight::new(1, 2, 10.0),
        ],
    )
    .expect("tolerant construction");

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.dropped_edges(), 2);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn neighbors_never_fails() {
    let g = graph(2, &[Flight::new(0, 1, 10.0)]);
    assert_eq!(g.neighbors(0).len(), 1);
    assert!(g.neighbors(1).is_empty());
    assert!(g.neighbors(100).is_empty());
}

#[test]
fn neighbors_carry_payload() {
    let g = Graph::build(
        airports(2),
        &[Flight::new(0, 1, 450.0).with_airline("Iberia", 2822)],
    )
    .expect("valid graph");

    let connection = &g.neighbors(0)[0];
    assert_eq!(connection.target, 1);
    assert!((connection.distance - 450.0).abs() < f64::EPSILON);
    assert_eq!(connection.airline, "Iberia");
    assert_eq!(connection.airline_code, 2822);
}

#[test]
fn shortest_path_to_self_is_zero_for_every_node() {
    let g = graph(3, &[Flight::new(0, 1, 10.0), Flight::new(1, 2, 10.0)]);
    for a in 0..3 {
        let path = g.shortest_path(a, a);
        assert_eq!(path.nodes, vec![a]);
        assert_eq!(path.total_distance, 0.0);
    }
}

#[test]
fn shortest_path_prefers_cheaper_connection() {
    // 0->1 (100), 1->2 (100), 0->2 (300), 2->3 (50): the connection wins
    let g = graph(
        4,
        &[
            Flight::new(0, 1, 100.0),
            Flight::new(1, 2, 100.0),
            Flight::new(0, 2, 300.0),
            Flight::new(2, 3, 50.0),
        ],
    );

    let path = g.shortest_path(0, 2);
    assert_eq!(path.nodes, vec![0, 1, 2]);
    assert!((path.total_distance - 200.0).abs() < f64::EPSILON);

    let onward = g.shortest_path(0, 3);
    assert_eq!(onward.nodes, vec![0, 1, 2, 3]);
    assert!((onward.total_distance - 250.0).abs() < f64::EPSILON);
}

#[test]
fn unreachable_is_a_value_not_an_error() {
    let g = graph(3, &[Flight::new(0, 1, 10.0)]);
    let path = g.shortest_path(1, 0);
    assert!(!path.is_reachable());
    assert!(path.nodes.is_empty());
    assert!(path.total_distance.is_infinite());
}

#[test]
fn direction_matters_for_paths() {
    let g = graph(2, &[Flight::new(0, 1, 10.0)]);
    assert!(g.shortest_path(0, 1).is_reachable());
    assert!(!g.shortest_path(1, 0).is_reachable());
}

//! The resolved route network.
//!
//! [`Graph::build`] turns a node list and an edge list into dense
//! index-based adjacency in O(V + E): the id -> index bijection, the
//! forward adjacency keyed by source index, and a reverse adjacency
//! index (in-neighbor indices, one entry per inbound edge). The reverse
//! index is what keeps weak-connectivity traversal and in-degree
//! counting linear instead of scanning all nodes per lookup.
//!
//! Edges referencing an airport id that is not in the node list are
//! dropped, not rejected: real route datasets routinely name airports
//! absent from the node file. The drop count is kept and logged.

use std::collections::HashMap;

use tracing::debug;

use super::{Airport, Connection, Flight, GraphError, GraphResult};
use crate::traversal::{Dijkstra, PathResult};

/// A directed, weighted air-route network.
///
/// Owns the airport sequence and both adjacency directions; immutable
/// after construction. Analyses hold `&Graph` and never mutate it —
/// what-if computations (such as the redundancy metric's single-edge
/// removal) use transient exclusion overlays during traversal instead.
#[derive(Debug, Clone)]
pub struct Graph {
    airports: Vec<Airport>,
    index_by_id: HashMap<u32, usize>,
    outgoing: Vec<Vec<Connection>>,
    incoming: Vec<Vec<usize>>,
    edge_count: usize,
    dropped_edges: usize,
}

impl Graph {
    /// Build a graph from airports and flights.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateAirport`] if two airports share an id
    /// - [`GraphError::InvalidDistance`] if a flight's distance is not a
    ///   positive finite number
    ///
    /// Flights whose endpoints are unknown ids are silently dropped;
    /// see [`Graph::dropped_edges`].
    pub fn build(airports: Vec<Airport>, flights: &[Flight]) -> GraphResult<Self> {
        let mut index_by_id: HashMap<u32, usize> = HashMap::with_capacity(airports.len());
        for (idx, airport) in airports.iter().enumerate() {
            if index_by_id.insert(airport.id, idx).is_some() {
                return Err(GraphError::DuplicateAirport(airport.id));
            }
        }

        let n = airports.len();
        let mut outgoing: Vec<Vec<Connection>> = vec![Vec::new(); n];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut edge_count = 0usize;
        let mut dropped_edges = 0usize;

        for flight in flights {
            if !flight.distance.is_finite() || flight.distance <= 0.0 {
                return Err(GraphError::InvalidDistance {
                    source: flight.source,
                    target: flight.target,
                    distance: flight.distance,
                });
            }

            match (index_by_id.get(&flight.source), index_by_id.get(&flight.target)) {
                (Some(&s), Some(&t)) => {
                    outgoing[s].push(Connection {
                        target: t,
                        distance: flight.distance,
                        airline: flight.airline.clone(),
                        airline_code: flight.airline_code,
                    });
                    incoming[t].push(s);
                    edge_count += 1;
                }
                _ => dropped_edges += 1,
            }
        }

        if dropped_edges > 0 {
            debug!(dropped_edges, "dropped flights referencing unknown airport ids");
        }

        Ok(Self { airports, index_by_id, outgoing, incoming, edge_count, dropped_edges })
    }

    /// Number of airports.
    pub fn node_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of directed edges (parallel flights counted separately).
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no airports.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Number of flights dropped at build time for referencing unknown ids.
    pub const fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    /// All airports in dense index order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// The airport at a dense index.
    pub fn airport(&self, index: usize) -> Option<&Airport> {
        self.airports.get(index)
    }

    /// Resolve a stable airport id to its dense index.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Outgoing edges of a node. Empty for nodes without outgoing edges
    /// and for out-of-range indices; never fails.
    pub fn neighbors(&self, index: usize) -> &[Connection] {
        self.outgoing.get(index).map_or(&[], Vec::as_slice)
    }

    /// Source indices of inbound edges, one entry per edge. Empty for
    /// out-of-range indices.
    pub fn in_neighbors(&self, index: usize) -> &[usize] {
        self.incoming.get(index).map_or(&[], Vec::as_slice)
    }

    /// Outgoing edge count of a node.
    pub fn out_degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Inbound edge count of a node.
    pub fn in_degree(&self, index: usize) -> usize {
        self.in_neighbors(index).len()
    }

    /// Shortest weighted path between two nodes.
    ///
    /// Returns an empty path with infinite distance when `target` is
    /// unreachable from `source` (or either index is out of range), and
    /// a single-node path with distance 0 when they coincide.
    pub fn shortest_path(&self, source: usize, target: usize) -> PathResult {
        Dijkstra::shortest_path(self, source, target)
    }
}

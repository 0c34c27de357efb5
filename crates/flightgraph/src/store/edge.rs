//! Flight edge records and resolved adjacency entries.

use serde::{Deserialize, Serialize};

/// A directed flight between two airports, as supplied to graph
/// construction. Endpoints are airport ids, not indices; parallel flights
/// between the same ordered pair are permitted and each counts separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Origin airport id.
    pub source: u32,
    /// Destination airport id.
    pub target: u32,
    /// Great-circle distance in kilometres; must be positive.
    pub distance: f64,
    /// Operating airline name, empty if unknown.
    pub airline: String,
    /// Operating airline code, 0 if unknown.
    pub airline_code: u32,
}

impl Flight {
    /// Create a flight with no airline attribution.
    pub fn new(source: u32, target: u32, distance: f64) -> Self {
        Self { source, target, distance, airline: String::new(), airline_code: 0 }
    }

    /// Set the operating airline.
    pub fn with_airline(mut self, airline: impl Into<String>, code: u32) -> Self {
        self.airline = airline.into();
        self.airline_code = code;
        self
    }
}

/// A resolved outgoing edge in the adjacency structure.
///
/// `target` is a dense node index, valid for the graph that owns the
/// adjacency entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    /// Destination node index.
    pub target: usize,
    /// Edge weight (distance in kilometres).
    pub distance: f64,
    /// Operating airline name.
    pub airline: String,
    /// Operating airline code.
    pub airline_code: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_builder() {
        let flight = Flight::new(507, 26, 5556.0).with_airline("British Airways", 1355);
        assert_eq!(flight.source, 507);
        assert_eq!(flight.target, 26);
        assert!((flight.distance - 5556.0).abs() < f64::EPSILON);
        assert_eq!(flight.airline, "British Airways");
        assert_eq!(flight.airline_code, 1355);
    }
}

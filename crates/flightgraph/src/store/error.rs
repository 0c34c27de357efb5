//! Error types for graph construction.

use std::fmt;

/// Errors that can occur when building a graph.
///
/// Unreachability is never an error anywhere in this crate: partial
/// connectivity is expected in real route networks, so unreachable
/// queries return empty paths and infinite distances instead.
#[derive(Debug)]
pub enum GraphError {
    /// Two airports in the node list share the same id.
    DuplicateAirport(u32),

    /// A flight carries a non-positive or non-finite distance.
    /// All distance-based algorithms assume positive weights.
    InvalidDistance {
        /// Origin airport id.
        source: u32,
        /// Destination airport id.
        target: u32,
        /// The offending distance value.
        distance: f64,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateAirport(id) => write!(f, "duplicate airport id: {id}"),
            GraphError::InvalidDistance {
                source,
                target,
                distance,
            } => write!(f, "invalid distance {distance} on flight {source} -> {target}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::DuplicateAirport(42);
        assert!(err.to_string().contains("42"));

        let err = GraphError::InvalidDistance { source: 1, target: 2, distance: -5.0 };
        assert!(err.to_string().contains("-5"));
        assert!(err.to_string().contains("1 -> 2"));
    }
}

//! Error types for graph construction, editing and analysis

use thiserror::Error;

/// Errors raised by graph operations.
///
/// Analysis itself is total over well-formed graphs; every variant here is
/// either a caller contract violation (the input cannot be enumerated
/// consistently) or an edit rejected by a policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid graph input: {0}")]
    InvalidGraphInput(String),

    #[error("node {0} out of bounds (graph has {1} nodes)")]
    NodeOutOfBounds(u32, u32),

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("no edge {0} -> {1}")]
    MissingEdge(String, String),

    #[error("self-loop on {0} is not allowed")]
    SelfLoop(String),

    #[error("edge {1} -> {0} already exists; {0} -> {1} would form a 2-cycle")]
    MutualEdge(String, String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GraphError::NodeOutOfBounds(5, 3).to_string(),
            "node 5 out of bounds (graph has 3 nodes)"
        );
        assert_eq!(
            GraphError::MutualEdge("1".into(), "2".into()).to_string(),
            "edge 2 -> 1 already exists; 1 -> 2 would form a 2-cycle"
        );
    }
}

//! Error types for graph mutations.
//!
//! Missing-entity *removal* is deliberately not an error (see
//! `EntityGraph::remove_node`); only structural problems surface here.

use crate::types::EntityId;
use thiserror::Error;

/// Errors that can occur while mutating the entity graph.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A connection endpoint id does not resolve to a live node.
    #[error("unknown node: {0}")]
    UnknownNode(EntityId),

    /// A connection was requested from a node to itself.
    #[error("self-connection on node {0} is not permitted")]
    SelfConnection(EntityId),
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! The logical entity graph.
//!
//! This module owns the authoritative node and connection collections and
//! every mutation that touches them:
//! - `node` - Node entity: position, metadata, adjacency index
//! - `connection` - Connection entity and the direction-aware matcher
//! - `store` - `EntityGraph`: id allocation, create/remove, cascade delete,
//!   move/lifecycle notifications
//!
//! Ownership is unidirectional (graph owns entities, keyed by id); a node's
//! adjacency list holds plain ids, never owning references, so the
//! node/connection back-reference cycle never materializes.

mod connection;
mod node;
mod store;

pub use connection::Connection;
pub use node::Node;
pub use store::{ConnectionSnapshot, EntityGraph, GraphEvent, GraphSnapshot, NodeSnapshot};

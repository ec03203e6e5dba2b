//! Node entity: a positioned point in the graph with user metadata and a
//! non-owning index of its incident connections.

use crate::graph::Connection;
use crate::types::{EntityId, Point};
use std::collections::BTreeMap;

/// A graph node.
///
/// The `connections` list is advisory indexing only: it always equals the
/// subset of the graph's connection collection where this node is an
/// endpoint, and is kept in sync by `EntityGraph` on every create/remove.
/// Position changes go through `EntityGraph::set_position` so move
/// subscribers are notified.
#[derive(Debug, Clone)]
pub struct Node {
    id: EntityId,
    position: Point,
    data: BTreeMap<String, String>,
    connections: Vec<EntityId>,
}

impl Node {
    pub(crate) fn new(id: EntityId, position: Point) -> Self {
        Self {
            id,
            position,
            data: BTreeMap::new(),
            connections: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// User-defined string metadata (label, styling hints, ...).
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.data
    }

    /// Ids of all connections incident to this node.
    pub fn connections(&self) -> &[EntityId] {
        &self.connections
    }

    /// Register an incident connection in the adjacency index.
    ///
    /// Panics if the connection does not reference this node as an
    /// endpoint; that is a caller bug, not a recoverable condition.
    pub(crate) fn register_connection(&mut self, connection: &Connection) {
        assert!(
            connection.links(self.id),
            "connection {} does not include node {}",
            connection.id(),
            self.id
        );
        if !self.connections.contains(&connection.id()) {
            self.connections.push(connection.id());
        }
    }

    /// Drop an incident connection from the adjacency index.
    pub(crate) fn unregister_connection(&mut self, connection_id: EntityId) {
        self.connections.retain(|&id| id != connection_id);
    }
}

//! `EntityGraph` - the authoritative store for nodes and connections.

use crate::error::{GraphError, GraphResult};
use crate::events::EventChannel;
use crate::graph::{Connection, Node};
use crate::types::{ConnectionType, Direction, EntityId, EntityKind, Point};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Move and lifecycle notifications fired by [`EntityGraph`].
///
/// Emitted synchronously, in mutation order, before the mutating call
/// returns. Dependent visuals subscribe to keep themselves in sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphEvent {
    NodeAdded(EntityId),
    NodeMoved { id: EntityId, position: Point },
    NodeRemoved(EntityId),
    ConnectionAdded(EntityId),
    ConnectionRemoved(EntityId),
}

/// Owns the node and connection collections and all graph mutations.
///
/// Both entity kinds draw ids from one shared counter, so every id is
/// globally unique across the graph and never reused. Collections are
/// ordered by id, which equals creation order.
pub struct EntityGraph {
    next_id: EntityId,
    nodes: BTreeMap<EntityId, Node>,
    connections: BTreeMap<EntityId, Connection>,
    events: EventChannel<GraphEvent>,
}

impl Default for EntityGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityGraph {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            nodes: BTreeMap::new(),
            connections: BTreeMap::new(),
            events: EventChannel::new(),
        }
    }

    /// The graph's notification channel.
    pub fn events(&self) -> &EventChannel<GraphEvent> {
        &self.events
    }

    fn alloc_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Create a node at `position`. Never fails.
    pub fn create_node(&mut self, position: Point) -> EntityId {
        let id = self.alloc_id();
        self.nodes.insert(id, Node::new(id, position));
        debug!(id, x = position.x, y = position.y, "created node");
        self.events.emit(&GraphEvent::NodeAdded(id));
        id
    }

    /// Create a connection between two existing nodes.
    ///
    /// Idempotent: if a connection matching `(from, to)` under the
    /// requested directionality already exists, its id is returned and no
    /// new id is consumed. Self-connections are rejected.
    pub fn create_connection(
        &mut self,
        from: EntityId,
        to: EntityId,
        directional: bool,
    ) -> GraphResult<EntityId> {
        if from == to {
            return Err(GraphError::SelfConnection(from));
        }
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }

        // Duplicate suppression via the direction-aware matcher: a directed
        // request matches only the same ordered pair, an undirected request
        // matches either order.
        let direction = if directional {
            Direction::To
        } else {
            Direction::None
        };
        if let Some(existing) = self.connection_between(from, to, direction) {
            return Ok(existing.id());
        }

        let connection_type = if directional {
            ConnectionType::Directed
        } else {
            ConnectionType::Undirected
        };
        let id = self.alloc_id();
        let connection = Connection::new(id, from, to, connection_type);

        for endpoint in [from, to] {
            if let Some(node) = self.nodes.get_mut(&endpoint) {
                node.register_connection(&connection);
            }
        }
        self.connections.insert(id, connection);
        debug!(id, from, to, directional, "created connection");
        self.events.emit(&GraphEvent::ConnectionAdded(id));
        Ok(id)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove a node and every connection incident to it.
    ///
    /// No-op if the id is unknown; removing something that is already gone
    /// is a normal idempotent caller pattern.
    pub fn remove_node(&mut self, id: EntityId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };

        // Snapshot the adjacency list: remove_connection mutates it.
        let incident: Vec<EntityId> = node.connections().to_vec();
        for connection_id in incident {
            self.remove_connection(connection_id);
        }

        self.nodes.remove(&id);
        debug!(id, "removed node");
        self.events.emit(&GraphEvent::NodeRemoved(id));
    }

    /// Remove a connection, detaching it from both endpoints' adjacency.
    /// No-op if the id is unknown.
    pub fn remove_connection(&mut self, id: EntityId) {
        let Some(connection) = self.connections.remove(&id) else {
            return;
        };

        for endpoint in [connection.from(), connection.to()] {
            if let Some(node) = self.nodes.get_mut(&endpoint) {
                node.unregister_connection(id);
            }
        }
        debug!(id, "removed connection");
        self.events.emit(&GraphEvent::ConnectionRemoved(id));
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Move a node. Subscribers are notified synchronously before this
    /// returns. No-op if the id is unknown.
    pub fn set_position(&mut self, id: EntityId, position: Point) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        node.set_position(position);
        self.events.emit(&GraphEvent::NodeMoved { id, position });
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn node(&self, id: EntityId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable node access for metadata edits. Positions still change only
    /// through [`EntityGraph::set_position`].
    pub fn node_mut(&mut self, id: EntityId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn connection(&self, id: EntityId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    /// The kind of the live entity with this id, if any.
    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        if self.nodes.contains_key(&id) {
            Some(EntityKind::Node)
        } else if self.connections.contains_key(&id) {
            Some(EntityKind::Connection)
        } else {
            None
        }
    }

    /// Nodes in id (= creation) order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Connections in id (= creation) order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connections incident to `node`, optionally filtered to those also
    /// touching `other` (either endpoint order, regardless of type).
    pub fn connections_of(&self, node: EntityId, other: Option<EntityId>) -> Vec<&Connection> {
        let Some(n) = self.nodes.get(&node) else {
            return Vec::new();
        };
        n.connections()
            .iter()
            .filter_map(|id| self.connections.get(id))
            .filter(|c| match other {
                Some(other_id) => c.matches(node, other_id, None),
                None => true,
            })
            .collect()
    }

    /// Direction-aware single-match lookup between two nodes.
    pub fn connection_between(
        &self,
        node: EntityId,
        other: EntityId,
        direction: Direction,
    ) -> Option<&Connection> {
        let n = self.nodes.get(&node)?;
        n.connections()
            .iter()
            .filter_map(|id| self.connections.get(id))
            .find(|c| c.matches(node, other, Some(direction)))
    }

    /// A serializable copy of the current graph state, in id order.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes
                .values()
                .map(|n| NodeSnapshot {
                    id: n.id(),
                    position: n.position(),
                    data: n.data().clone(),
                })
                .collect(),
            connections: self
                .connections
                .values()
                .map(|c| ConnectionSnapshot {
                    id: c.id(),
                    from: c.from(),
                    to: c.to(),
                    connection_type: c.connection_type(),
                })
                .collect(),
        }
    }
}

/// Point-in-time copy of the graph, consumed by the exporter and tests.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub connections: Vec<ConnectionSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: EntityId,
    pub position: Point,
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionSnapshot {
    pub id: EntityId,
    pub from: EntityId,
    pub to: EntityId,
    pub connection_type: ConnectionType,
}

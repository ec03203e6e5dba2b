//! Connection entity and the direction-aware matcher.

use crate::types::{ConnectionType, Direction, EntityId};

/// A connection between two nodes.
///
/// Endpoints are held as ids; the graph guarantees a connection never
/// outlives either endpoint (cascade delete removes it first).
#[derive(Debug, Clone)]
pub struct Connection {
    id: EntityId,
    from: EntityId,
    to: EntityId,
    connection_type: ConnectionType,
}

impl Connection {
    pub(crate) fn new(
        id: EntityId,
        from: EntityId,
        to: EntityId,
        connection_type: ConnectionType,
    ) -> Self {
        Self {
            id,
            from,
            to,
            connection_type,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn from(&self) -> EntityId {
        self.from
    }

    pub fn to(&self) -> EntityId {
        self.to
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    /// Whether `node_id` is one of this connection's endpoints.
    pub fn links(&self, node_id: EntityId) -> bool {
        self.from == node_id || self.to == node_id
    }

    /// The endpoint opposite to `node_id`, if `node_id` is an endpoint.
    pub fn other_end(&self, node_id: EntityId) -> Option<EntityId> {
        if self.from == node_id {
            Some(self.to)
        } else if self.to == node_id {
            Some(self.from)
        } else {
            None
        }
    }

    /// Direction-aware matcher, shared by duplicate suppression and
    /// queries.
    ///
    /// Matches this connection against the node pair `(a, b)` under the
    /// requested directionality:
    /// - `Some(Direction::From)`: directed, arriving at `a` from `b`
    /// - `Some(Direction::To)`: directed, leaving `a` toward `b`
    /// - `Some(Direction::None)`: undirected, either endpoint order
    /// - `None`: either endpoint order, regardless of type
    pub fn matches(&self, a: EntityId, b: EntityId, direction: Option<Direction>) -> bool {
        let ordered = self.from == a && self.to == b;
        let reversed = self.from == b && self.to == a;
        match direction {
            Some(Direction::From) => self.connection_type == ConnectionType::Directed && reversed,
            Some(Direction::To) => self.connection_type == ConnectionType::Directed && ordered,
            Some(Direction::None) => {
                self.connection_type == ConnectionType::Undirected && (ordered || reversed)
            }
            None => ordered || reversed,
        }
    }
}

//! Core types shared across the graph editor.
//!
//! This module defines the fundamental value types used throughout the
//! crate: canvas points, entity identifiers, connection semantics, and
//! the interaction mode enum.

use serde::{Deserialize, Serialize};

/// Identifier shared by every entity in a graph.
///
/// Nodes and connections draw from one monotonically increasing counter,
/// so an id is globally unique across both kinds and is never reused,
/// even after the entity is deleted.
pub type EntityId = u64;

/// A point (or delta) in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition.
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise subtraction.
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Scale both components by a factor.
    pub fn scale(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    /// Divide both components by a factor.
    pub fn div(self, factor: f32) -> Point {
        Point::new(self.x / factor, self.y / factor)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let d = self.sub(other);
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// The kind of a graph entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Node,
    Connection,
}

/// A lightweight, copyable reference to a graph entity.
///
/// The id+kind pair is always unambiguous because ids are unique across
/// both entity kinds. This is what gets attached to scene primitives so
/// hit testing can map a visual back to its logical entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
    pub kind: EntityKind,
}

impl EntityRef {
    pub fn node(id: EntityId) -> Self {
        Self {
            id,
            kind: EntityKind::Node,
        }
    }

    pub fn connection(id: EntityId) -> Self {
        Self {
            id,
            kind: EntityKind::Connection,
        }
    }
}

/// Directionality of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    Directed,
    Undirected,
}

/// Direction constraint for connection queries.
///
/// Relative to the node the query starts from: `From` matches directed
/// connections arriving at it, `To` matches directed connections leaving
/// it, and `None` matches undirected connections in either endpoint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    From,
    To,
    None,
}

/// The editor's current interpretation of pointer input.
///
/// Exactly one mode is in effect at a time; each owns one tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Move,
    Add,
    Connect,
}

/// Pointer cursor affordance requested by the active tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Panning hand shown in Move mode.
    Pointer,
    /// Cell cursor shown in Add mode.
    Cell,
    /// Crosshair shown in Connect mode.
    Crosshair,
}

//! Entity lookup: mapping a canvas point back to a logical entity.
//!
//! Hit testing itself is the scene's job; this module bridges the result
//! back into the graph by walking the hit primitive's ownership chain to
//! the first attached entity reference and checking it is still live.

use crate::constants::{LAYER_CONNECTIONS, LAYER_NODES};
use crate::graph::EntityGraph;
use crate::scene::Scene;
use crate::types::{EntityId, EntityKind, EntityRef, Point};

/// The logical entity under `point`, if any.
///
/// Node visuals sit above connection visuals, so the nodes layer is
/// queried first.
pub fn entity_at_point(
    graph: &EntityGraph,
    scene: &Scene,
    point: Point,
    tolerance: f32,
) -> Option<EntityRef> {
    [LAYER_NODES, LAYER_CONNECTIONS]
        .iter()
        .filter_map(|layer| scene.hit_test(layer, point, tolerance))
        .filter_map(|primitive| scene.resolve_entity(primitive))
        // Stale visuals must never resurrect a deleted entity.
        .find(|entity| graph.kind_of(entity.id) == Some(entity.kind))
}

/// Type-filtered convenience wrapper: node under `point`.
pub fn node_at_point(
    graph: &EntityGraph,
    scene: &Scene,
    point: Point,
    tolerance: f32,
) -> Option<EntityId> {
    entity_at_point(graph, scene, point, tolerance)
        .filter(|e| e.kind == EntityKind::Node)
        .map(|e| e.id)
}

/// Type-filtered convenience wrapper: connection under `point`.
pub fn connection_at_point(
    graph: &EntityGraph,
    scene: &Scene,
    point: Point,
    tolerance: f32,
) -> Option<EntityId> {
    let layer_hit = scene.hit_test(LAYER_CONNECTIONS, point, tolerance)?;
    scene
        .resolve_entity(layer_hit)
        .filter(|e| e.kind == EntityKind::Connection)
        .filter(|e| graph.kind_of(e.id) == Some(e.kind))
        .map(|e| e.id)
}

/// Look up the entity under `point` and remove it from the graph,
/// dispatching by kind. Returns the removed entity, if any.
pub fn remove_entity_at_point(
    graph: &mut EntityGraph,
    scene: &Scene,
    point: Point,
    tolerance: f32,
) -> Option<EntityRef> {
    let entity = entity_at_point(graph, scene, point, tolerance)?;
    match entity.kind {
        EntityKind::Node => graph.remove_node(entity.id),
        EntityKind::Connection => graph.remove_connection(entity.id),
    }
    Some(entity)
}

//! `EditorSession` - the editor's shared mutable state.
//!
//! Owns the entity graph and the scene, and keeps the scene's visuals in
//! sync with the graph. Visual updates flow through the graph's event
//! channel: every mutation queues its notifications, and the session
//! flushes the queue into scene updates before the command returns. Tools
//! and the interaction controller receive `&mut EditorSession` and never
//! touch the collections directly.

use crate::constants::{
    DEFAULT_HIT_TOLERANCE, LAYER_BACKGROUND, LAYER_CONNECTIONS, LAYER_NODES, NODE_HEIGHT,
    NODE_WIDTH,
};
use crate::error::GraphResult;
use crate::events::EventChannel;
use crate::graph::{EntityGraph, GraphEvent};
use crate::io::dot;
use crate::lookup;
use crate::scene::{Primitive, PrimitiveId, Scene, Shape};
use crate::types::{CursorStyle, EntityId, EntityRef, Point};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use tracing::debug;

/// Scene primitives making up one node's visual: a group carrying the
/// entity reference, a pickable box, and a label.
struct NodeVisual {
    group: PrimitiveId,
    body: PrimitiveId,
    label: PrimitiveId,
}

pub struct EditorSession {
    graph: EntityGraph,
    scene: Scene,
    cursor: CursorStyle,
    /// Notifications queued by the graph's event channel, drained by
    /// `flush` after every mutation.
    pending: Rc<RefCell<Vec<GraphEvent>>>,
    /// Node currently under the pointer, highlighted on its visual.
    hovered: Option<EntityId>,
    node_visuals: HashMap<EntityId, NodeVisual>,
    connection_visuals: HashMap<EntityId, PrimitiveId>,
    /// Edit requests for the chrome's (future) detail panel.
    edit_requests: EventChannel<EntityRef>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        let graph = EntityGraph::new();
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = pending.clone();
        graph.events().subscribe(move |event: &GraphEvent| {
            queue.borrow_mut().push(*event);
        });

        let mut scene = Scene::new();
        draw_center_cross(&mut scene);

        Self {
            graph,
            scene,
            cursor: CursorStyle::Default,
            pending,
            hovered: None,
            node_visuals: HashMap::new(),
            connection_visuals: HashMap::new(),
            edit_requests: EventChannel::new(),
        }
    }

    // ========================================================================
    // Command surface
    // ========================================================================

    pub fn create_node(&mut self, position: Point) -> EntityId {
        let id = self.graph.create_node(position);
        self.flush();
        id
    }

    pub fn create_connection(
        &mut self,
        from: EntityId,
        to: EntityId,
        directional: bool,
    ) -> GraphResult<EntityId> {
        let result = self.graph.create_connection(from, to, directional);
        self.flush();
        result
    }

    pub fn remove_node(&mut self, id: EntityId) {
        self.graph.remove_node(id);
        self.flush();
    }

    pub fn remove_connection(&mut self, id: EntityId) {
        self.graph.remove_connection(id);
        self.flush();
    }

    /// Move a node to an absolute canvas position.
    pub fn set_node_position(&mut self, id: EntityId, position: Point) {
        self.graph.set_position(id, position);
        self.flush();
    }

    /// Look up the entity under `point` and remove it, cascading as usual.
    pub fn remove_entity_at_point(&mut self, point: Point) -> Option<EntityRef> {
        let removed = lookup::remove_entity_at_point(
            &mut self.graph,
            &self.scene,
            point,
            DEFAULT_HIT_TOLERANCE,
        );
        self.flush();
        removed
    }

    pub fn entity_at_point(&self, point: Point) -> Option<EntityRef> {
        lookup::entity_at_point(&self.graph, &self.scene, point, DEFAULT_HIT_TOLERANCE)
    }

    pub fn node_at_point(&self, point: Point) -> Option<EntityId> {
        lookup::node_at_point(&self.graph, &self.scene, point, DEFAULT_HIT_TOLERANCE)
    }

    pub fn connection_at_point(&self, point: Point) -> Option<EntityId> {
        lookup::connection_at_point(&self.graph, &self.scene, point, DEFAULT_HIT_TOLERANCE)
    }

    /// Hook for the chrome's detail-editing panel: publishes the entity on
    /// the edit-request channel. Nothing in this crate subscribes.
    pub fn start_editing(&self, entity: EntityRef) {
        debug!(id = entity.id, "edit requested");
        self.edit_requests.emit(&entity);
    }

    pub fn edit_requests(&self) -> &EventChannel<EntityRef> {
        &self.edit_requests
    }

    /// Track the pointer and highlight the node visual under it, if any.
    pub fn update_hover(&mut self, point: Point) {
        let hit = lookup::node_at_point(&self.graph, &self.scene, point, DEFAULT_HIT_TOLERANCE);
        if hit == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.set_node_highlight(previous, false);
        }
        if let Some(node) = hit {
            self.set_node_highlight(node, true);
        }
        self.hovered = hit;
    }

    pub fn hovered_node(&self) -> Option<EntityId> {
        self.hovered
    }

    fn set_node_highlight(&mut self, id: EntityId, highlighted: bool) {
        if let Some(visual) = self.node_visuals.get(&id) {
            self.scene.set_highlighted(visual.body, highlighted);
        }
    }

    // ========================================================================
    // Export
    // ========================================================================

    pub fn dot_string(&self) -> String {
        dot::dot_string(&self.graph.snapshot())
    }

    pub fn save_to_dot_file(&self, path: &Path) -> anyhow::Result<()> {
        dot::save_to_dot_file(&self.graph.snapshot(), path)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut EntityGraph {
        &mut self.graph
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    // ========================================================================
    // Visual sync
    // ========================================================================

    /// Drain queued graph notifications into scene updates.
    ///
    /// Called after every mutation, so within one dispatched input event
    /// the scene is consistent with the graph before control returns.
    pub fn flush(&mut self) {
        let events: Vec<GraphEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                GraphEvent::NodeAdded(id) => self.add_node_visual(id),
                GraphEvent::NodeMoved { id, position } => self.move_node_visual(id, position),
                GraphEvent::NodeRemoved(id) => {
                    if self.hovered == Some(id) {
                        self.hovered = None;
                    }
                    if let Some(visual) = self.node_visuals.remove(&id) {
                        self.scene.detach(visual.group);
                    }
                }
                GraphEvent::ConnectionAdded(id) => self.add_connection_visual(id),
                GraphEvent::ConnectionRemoved(id) => {
                    if let Some(primitive) = self.connection_visuals.remove(&id) {
                        self.scene.detach(primitive);
                    }
                }
            }
        }
    }

    fn add_node_visual(&mut self, id: EntityId) {
        let Some(node) = self.graph.node(id) else {
            return;
        };
        let position = node.position();
        let text = node.data().get("label").cloned().unwrap_or_default();

        let group = self
            .scene
            .attach(LAYER_NODES, Primitive::group().with_entity(EntityRef::node(id)));
        let body = self.scene.attach(
            LAYER_NODES,
            Primitive::rect(position, NODE_WIDTH, NODE_HEIGHT).with_parent(group),
        );
        let label = self.scene.attach(
            LAYER_NODES,
            Primitive::label(position, text)
                .with_parent(group)
                .not_pickable(),
        );
        self.node_visuals.insert(id, NodeVisual { group, body, label });
    }

    fn move_node_visual(&mut self, id: EntityId, position: Point) {
        if let Some(visual) = self.node_visuals.get(&id) {
            self.scene.set_shape(
                visual.body,
                Shape::Rect {
                    center: position,
                    width: NODE_WIDTH,
                    height: NODE_HEIGHT,
                },
            );
            let text = match self.scene.get(visual.label).map(Primitive::shape) {
                Some(Shape::Label { text, .. }) => text.clone(),
                _ => String::new(),
            };
            self.scene
                .set_shape(visual.label, Shape::Label { position, text });
        }

        // Segments of incident connections track the moved endpoint.
        let incident: Vec<EntityId> = self
            .graph
            .connections_of(id, None)
            .iter()
            .map(|c| c.id())
            .collect();
        for connection_id in incident {
            self.refresh_connection_visual(connection_id);
        }
    }

    fn add_connection_visual(&mut self, id: EntityId) {
        let Some(connection) = self.graph.connection(id) else {
            return;
        };
        let (Some(from), Some(to)) = (
            self.graph.node(connection.from()),
            self.graph.node(connection.to()),
        ) else {
            return;
        };
        let primitive = self.scene.attach(
            LAYER_CONNECTIONS,
            Primitive::segment(from.position(), to.position())
                .with_entity(EntityRef::connection(id)),
        );
        self.connection_visuals.insert(id, primitive);
    }

    fn refresh_connection_visual(&mut self, id: EntityId) {
        let Some(&primitive) = self.connection_visuals.get(&id) else {
            return;
        };
        let Some(connection) = self.graph.connection(id) else {
            return;
        };
        let (Some(from), Some(to)) = (
            self.graph.node(connection.from()),
            self.graph.node(connection.to()),
        ) else {
            return;
        };
        self.scene.set_shape(
            primitive,
            Shape::Segment {
                from: from.position(),
                to: to.position(),
            },
        );
    }
}

/// Small cross marking the canvas origin.
fn draw_center_cross(scene: &mut Scene) {
    for (a, b) in [
        (Point::new(-5.0, 0.0), Point::new(5.0, 0.0)),
        (Point::new(0.0, -5.0), Point::new(0.0, 5.0)),
    ] {
        scene.attach(LAYER_BACKGROUND, Primitive::segment(a, b).not_pickable());
    }
}

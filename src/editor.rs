//! `GraphEditor` - the public surface the UI chrome talks to.
//!
//! Routes decoded input events to the interaction machinery and exposes
//! the editor's command surface (create/remove/lookup/export). All work
//! happens synchronously on the caller's thread; one dispatched event is
//! fully applied, cascades and notifications included, before the next
//! one is processed.

use crate::controller::InteractionController;
use crate::error::GraphResult;
use crate::graph::EntityGraph;
use crate::input::{InputEvent, PointerButton};
use crate::scene::Scene;
use crate::session::EditorSession;
use crate::tools::{Tool, ZoomTool};
use crate::types::{CursorStyle, EntityId, EntityRef, InteractionMode, Point};
use std::path::Path;

pub struct GraphEditor {
    session: EditorSession,
    controller: InteractionController,
    zoom_tool: ZoomTool,
    /// Middle-button camera pan, active in every mode.
    panning: bool,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphEditor {
    pub fn new() -> Self {
        let mut session = EditorSession::new();
        let controller = InteractionController::new(&mut session);
        let mut zoom_tool = ZoomTool::new();
        zoom_tool.activate(&mut session);
        Self {
            session,
            controller,
            zoom_tool,
            panning: false,
        }
    }

    // ========================================================================
    // Input dispatch
    // ========================================================================

    /// Feed one input event through the editor. Returns true when the
    /// event was consumed (the host must then suppress its default
    /// handling, e.g. browser wheel zoom).
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            // Zooming works regardless of mode.
            InputEvent::Wheel { .. } => self.zoom_tool.on_event(&event, &mut self.session),

            // So does the middle-button camera pan.
            InputEvent::Drag(e) if e.button == PointerButton::Middle => {
                self.panning = true;
                self.session.scene_mut().view_mut().pan(e.movement);
                true
            }
            InputEvent::PointerUp(_) => {
                self.panning = false;
                self.controller
                    .handle_event(&event, self.panning, &mut self.session)
            }

            // Hover tracking happens before tools see the move; tools may
            // still consume it (connect preview).
            InputEvent::PointerMove(e) => {
                self.session.update_hover(e.position);
                self.controller
                    .handle_event(&event, self.panning, &mut self.session)
            }

            // Double-click on a node opens it for editing.
            InputEvent::DoubleClick(e) => {
                if let Some(entity) = self.session.entity_at_point(e.position) {
                    self.session.start_editing(entity);
                    true
                } else {
                    false
                }
            }

            _ => self
                .controller
                .handle_event(&event, self.panning, &mut self.session),
        }
    }

    // ========================================================================
    // Command surface (consumed by the UI chrome)
    // ========================================================================

    pub fn create_node(&mut self, position: Point) -> EntityId {
        self.session.create_node(position)
    }

    pub fn create_connection(
        &mut self,
        from: EntityId,
        to: EntityId,
        directional: bool,
    ) -> GraphResult<EntityId> {
        self.session.create_connection(from, to, directional)
    }

    pub fn remove_node(&mut self, id: EntityId) {
        self.session.remove_node(id);
    }

    pub fn remove_connection(&mut self, id: EntityId) {
        self.session.remove_connection(id);
    }

    pub fn set_node_position(&mut self, id: EntityId, position: Point) {
        self.session.set_node_position(id, position);
    }

    pub fn remove_entity_at_point(&mut self, point: Point) -> Option<EntityRef> {
        self.session.remove_entity_at_point(point)
    }

    pub fn entity_at_point(&self, point: Point) -> Option<EntityRef> {
        self.session.entity_at_point(point)
    }

    pub fn node_at_point(&self, point: Point) -> Option<EntityId> {
        self.session.node_at_point(point)
    }

    pub fn connection_at_point(&self, point: Point) -> Option<EntityId> {
        self.session.connection_at_point(point)
    }

    pub fn start_editing(&self, entity: EntityRef) {
        self.session.start_editing(entity);
    }

    pub fn dot_string(&self) -> String {
        self.session.dot_string()
    }

    pub fn save_to_dot_file(&self, path: &Path) -> anyhow::Result<()> {
        self.session.save_to_dot_file(path)
    }

    // ========================================================================
    // State accessors
    // ========================================================================

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn graph(&self) -> &EntityGraph {
        self.session.graph()
    }

    pub fn scene(&self) -> &Scene {
        self.session.scene()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn cursor(&self) -> CursorStyle {
        self.session.cursor()
    }

    pub fn zoom(&self) -> f32 {
        self.session.scene().view().zoom()
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_tool.reset_zoom(&mut self.session);
    }

    /// Tear down tools and their visual resources.
    pub fn dispose(&mut self) {
        self.controller.dispose(&mut self.session);
        self.zoom_tool.dispose(&mut self.session);
    }
}

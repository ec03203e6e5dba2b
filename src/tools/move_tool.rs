//! Move mode: drag a node to reposition it, drag empty canvas to pan.
//!
//! A drag that starts on a node body moves the node and consumes the
//! event, so the camera never pans underneath a node drag. The node test
//! runs once, at drag start.

use crate::input::{InputEvent, PointerButton};
use crate::session::EditorSession;
use crate::tools::Tool;
use crate::types::{CursorStyle, EntityId};

#[derive(Default)]
pub struct MoveTool {
    active: bool,
    dragging: bool,
    /// Node picked up at drag start, if the drag began on a node body.
    drag_node: Option<EntityId>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

impl Tool for MoveTool {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, session: &mut EditorSession) {
        self.active = true;
        session.set_cursor(CursorStyle::Pointer);
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        self.active = false;
        self.dragging = false;
        self.drag_node = None;
        session.set_cursor(CursorStyle::Default);
    }

    fn on_event(&mut self, event: &InputEvent, session: &mut EditorSession) -> bool {
        if !self.active {
            return false;
        }
        match event {
            InputEvent::Drag(e) if e.button == PointerButton::Primary => {
                if !self.dragging {
                    self.dragging = true;
                    self.drag_node = session.node_at_point(e.position);
                }

                let zoom = session.scene().view().zoom();
                match self.drag_node {
                    Some(node_id) => {
                        // Screen-pixel movement maps to canvas units
                        // through the current zoom.
                        let delta = e.movement.div(zoom);
                        if let Some(node) = session.graph().node(node_id) {
                            let target = node.position().add(delta);
                            session.set_node_position(node_id, target);
                        }
                    }
                    None => {
                        session.scene_mut().view_mut().pan(e.movement);
                    }
                }
                true
            }
            InputEvent::PointerUp(_) => {
                let was_dragging = self.dragging;
                self.dragging = false;
                self.drag_node = None;
                was_dragging
            }
            _ => false,
        }
    }
}

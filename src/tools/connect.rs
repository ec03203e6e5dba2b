//! Connect mode: two-click connection gesture with a live preview line.
//!
//! The first click on a node anchors the preview; the second click on a
//! node completes the connection. Clicking empty space is ignored and the
//! pending gesture persists; only leaving Connect mode cancels it.

use crate::constants::LAYER_OVERLAY;
use crate::input::{InputEvent, PointerButton};
use crate::scene::{Primitive, PrimitiveId, Shape};
use crate::session::EditorSession;
use crate::tools::Tool;
use crate::types::{CursorStyle, EntityId, Point};
use tracing::warn;

#[derive(Default)]
pub struct ConnectTool {
    active: bool,
    start_node: Option<EntityId>,
    preview: Option<PrimitiveId>,
}

impl ConnectTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&self) -> Option<EntityId> {
        self.start_node
    }

    fn anchor(&self, session: &EditorSession) -> Option<Point> {
        let node = session.graph().node(self.start_node?)?;
        Some(node.position())
    }

    fn set_preview(&self, session: &mut EditorSession, from: Point, to: Point, visible: bool) {
        let Some(preview) = self.preview else {
            return;
        };
        session
            .scene_mut()
            .set_shape(preview, Shape::Segment { from, to });
        session.scene_mut().set_visible(preview, visible);
    }
}

impl Tool for ConnectTool {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, session: &mut EditorSession) {
        self.active = true;
        session.set_cursor(CursorStyle::Crosshair);
        if self.preview.is_none() {
            self.preview = Some(session.scene_mut().attach(
                LAYER_OVERLAY,
                Primitive::segment(Point::ZERO, Point::ZERO)
                    .not_pickable()
                    .hidden(),
            ));
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        self.active = false;
        // Leaving Connect mode is the cancellation mechanism for an
        // in-progress connection.
        self.start_node = None;
        if let Some(preview) = self.preview {
            session.scene_mut().set_visible(preview, false);
        }
        session.set_cursor(CursorStyle::Default);
    }

    fn dispose(&mut self, session: &mut EditorSession) {
        self.deactivate(session);
        if let Some(preview) = self.preview.take() {
            session.scene_mut().detach(preview);
        }
    }

    fn on_event(&mut self, event: &InputEvent, session: &mut EditorSession) -> bool {
        if !self.active {
            return false;
        }
        match event {
            InputEvent::PointerMove(e) => {
                // Free end of the preview tracks the cursor.
                if let Some(anchor) = self.anchor(session) {
                    self.set_preview(session, anchor, e.position, true);
                }
                false
            }
            InputEvent::Click(e) if e.button == PointerButton::Primary => {
                let Some(hit) = session.node_at_point(e.position) else {
                    // Empty space: keep any pending gesture alive.
                    return false;
                };

                match self.start_node {
                    None => {
                        self.start_node = Some(hit);
                        if let Some(anchor) = self.anchor(session) {
                            self.set_preview(session, anchor, e.position, true);
                        }
                    }
                    Some(start) => {
                        // The UI gesture always creates undirected
                        // connections; directed ones come from the
                        // command surface.
                        match session.create_connection(start, hit, false) {
                            Ok(_) => {
                                self.start_node = None;
                                if let Some(preview) = self.preview {
                                    session.scene_mut().set_visible(preview, false);
                                }
                            }
                            Err(err) => {
                                // Clicking the start node again: keep the
                                // gesture pending, let the user retarget.
                                warn!(%err, "connection gesture rejected");
                            }
                        }
                    }
                }
                true
            }
            _ => false,
        }
    }
}

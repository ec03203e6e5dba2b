//! Wheel zoom. Always active once the editor is attached; zooming must
//! work in every interaction mode.

use crate::input::InputEvent;
use crate::session::EditorSession;
use crate::tools::Tool;

#[derive(Default)]
pub struct ZoomTool {
    active: bool,
}

impl ZoomTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_zoom(&self, session: &mut EditorSession) {
        session.scene_mut().view_mut().reset_zoom();
    }
}

impl Tool for ZoomTool {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, _session: &mut EditorSession) {
        self.active = true;
    }

    fn deactivate(&mut self, _session: &mut EditorSession) {
        self.active = false;
    }

    fn on_event(&mut self, event: &InputEvent, session: &mut EditorSession) -> bool {
        if !self.active {
            return false;
        }
        match event {
            InputEvent::Wheel { delta_y } => {
                session.scene_mut().view_mut().zoom_by_wheel(*delta_y);
                // Consumed: the host must suppress its default wheel
                // behavior (browser page zoom).
                true
            }
            _ => false,
        }
    }
}

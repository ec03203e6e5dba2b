//! Add mode: a primary-button click places a node under the cursor.

use crate::input::{InputEvent, PointerButton};
use crate::session::EditorSession;
use crate::tools::Tool;
use crate::types::CursorStyle;

#[derive(Default)]
pub struct AddTool {
    active: bool,
}

impl AddTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for AddTool {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, session: &mut EditorSession) {
        self.active = true;
        session.set_cursor(CursorStyle::Cell);
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        self.active = false;
        session.set_cursor(CursorStyle::Default);
    }

    fn on_event(&mut self, event: &InputEvent, session: &mut EditorSession) -> bool {
        if !self.active {
            return false;
        }
        match event {
            InputEvent::Click(e) if e.button == PointerButton::Primary => {
                session.create_node(e.position);
                true
            }
            _ => false,
        }
    }
}

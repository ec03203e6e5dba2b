//! Interaction mode state machine.
//!
//! Three mutually exclusive modes, each owning one tool:
//!
//! ```text
//! Move --(Shift down, not mid-drag)--> Add
//! Move --(Control down, not mid-drag)--> Connect
//! Add --(Shift up, not mid-drag)--> Move
//! Connect --(Control up, not mid-drag)--> Move
//! ```
//!
//! All other transitions are no-ops. Switching modes deactivates the
//! outgoing tool before activating the incoming one, so two mode tools
//! are never active at once. Zoom and the middle-button camera pan live
//! outside this machine and work in every mode.

use crate::input::{InputEvent, Key};
use crate::session::EditorSession;
use crate::tools::{AddTool, ConnectTool, MoveTool, Tool};
use crate::types::InteractionMode;
use tracing::debug;

pub struct InteractionController {
    mode: InteractionMode,
    move_tool: MoveTool,
    add_tool: AddTool,
    connect_tool: ConnectTool,
    // Held-key tracking: only the first key-down of a press transitions,
    // key-repeat events are ignored.
    shift_held: bool,
    control_held: bool,
}

impl InteractionController {
    /// Build the controller and activate the default (Move) mode's tool.
    pub fn new(session: &mut EditorSession) -> Self {
        let mut controller = Self {
            mode: InteractionMode::Move,
            move_tool: MoveTool::new(),
            add_tool: AddTool::new(),
            connect_tool: ConnectTool::new(),
            shift_held: false,
            control_held: false,
        };
        controller.move_tool.activate(session);
        controller
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn move_tool(&self) -> &MoveTool {
        &self.move_tool
    }

    pub fn add_tool(&self) -> &AddTool {
        &self.add_tool
    }

    pub fn connect_tool(&self) -> &ConnectTool {
        &self.connect_tool
    }

    /// True while a pointer gesture owned by a mode tool is in progress.
    pub fn is_mid_drag(&self) -> bool {
        self.move_tool.is_dragging()
    }

    /// Switch modes. Idempotent when `mode` is already current; otherwise
    /// deactivates the outgoing tool, then activates the incoming one.
    pub fn set_mode(&mut self, mode: InteractionMode, session: &mut EditorSession) {
        if mode == self.mode {
            return;
        }
        debug!(from = ?self.mode, to = ?mode, "mode transition");
        self.active_tool_mut().deactivate(session);
        self.mode = mode;
        self.active_tool_mut().activate(session);
    }

    fn active_tool_mut(&mut self) -> &mut dyn Tool {
        match self.mode {
            InteractionMode::Move => &mut self.move_tool,
            InteractionMode::Add => &mut self.add_tool,
            InteractionMode::Connect => &mut self.connect_tool,
        }
    }

    /// Route one event. `mid_drag` additionally covers gestures owned by
    /// always-on tools (middle-button pan), which also suppress mode
    /// transitions.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        mid_drag: bool,
        session: &mut EditorSession,
    ) -> bool {
        match event {
            InputEvent::KeyDown(key) => {
                self.on_key_down(*key, mid_drag || self.is_mid_drag(), session);
                true
            }
            InputEvent::KeyUp(key) => {
                self.on_key_up(*key, mid_drag || self.is_mid_drag(), session);
                true
            }
            _ => self.active_tool_mut().on_event(event, session),
        }
    }

    fn on_key_down(&mut self, key: Key, mid_drag: bool, session: &mut EditorSession) {
        match key {
            Key::Shift => {
                if self.shift_held {
                    return; // key repeat
                }
                self.shift_held = true;
                if self.mode == InteractionMode::Move && !mid_drag {
                    self.set_mode(InteractionMode::Add, session);
                }
            }
            Key::Control => {
                if self.control_held {
                    return;
                }
                self.control_held = true;
                if self.mode == InteractionMode::Move && !mid_drag {
                    self.set_mode(InteractionMode::Connect, session);
                }
            }
        }
    }

    fn on_key_up(&mut self, key: Key, mid_drag: bool, session: &mut EditorSession) {
        match key {
            Key::Shift => {
                self.shift_held = false;
                if self.mode == InteractionMode::Add && !mid_drag {
                    self.set_mode(InteractionMode::Move, session);
                }
            }
            Key::Control => {
                self.control_held = false;
                if self.mode == InteractionMode::Connect && !mid_drag {
                    self.set_mode(InteractionMode::Move, session);
                }
            }
        }
    }

    /// Tear down all mode tools and their visual resources.
    pub fn dispose(&mut self, session: &mut EditorSession) {
        self.move_tool.dispose(session);
        self.add_tool.dispose(session);
        self.connect_tool.dispose(session);
    }
}

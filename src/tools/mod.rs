//! Interactive tools.
//!
//! Each tool owns a disjoint slice of the input stream and is
//! independently activatable. While active it interprets the events it
//! cares about and calls into the session; while inactive it sees nothing.
//!
//! - `zoom` - wheel zoom, always active, outside the mode machine
//! - `move_tool` - Move mode: node dragging and camera panning
//! - `add` - Add mode: click to create a node
//! - `connect` - Connect mode: two-click connection gesture with preview

mod add;
mod connect;
mod move_tool;
mod zoom;

pub use add::AddTool;
pub use connect::ConnectTool;
pub use move_tool::MoveTool;
pub use zoom::ZoomTool;

use crate::input::InputEvent;
use crate::session::EditorSession;

/// Common surface of every tool.
pub trait Tool {
    fn is_active(&self) -> bool;

    /// Start receiving events; sets the cursor affordance.
    fn activate(&mut self, session: &mut EditorSession);

    /// Stop receiving events; restores the cursor and clears any
    /// transient visual state.
    fn deactivate(&mut self, session: &mut EditorSession);

    /// Deactivate and release owned visual resources.
    fn dispose(&mut self, session: &mut EditorSession) {
        self.deactivate(session);
    }

    /// Handle one event. Returns true when the event was consumed and
    /// must not propagate further.
    fn on_event(&mut self, event: &InputEvent, session: &mut EditorSession) -> bool;
}

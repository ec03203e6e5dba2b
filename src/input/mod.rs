//! Input event types delivered to the editor.
//!
//! The capture plumbing below "a click happened at point P" belongs to the
//! host; the editor consumes these discrete, already-decoded events on the
//! UI dispatch thread, one at a time.

use crate::types::Point;

/// Pointer button involved in a click or drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Named keys the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Modifier holding the editor in Add mode.
    Shift,
    /// Modifier holding the editor in Connect mode.
    Control,
}

/// A pointer event in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position in canvas coordinates.
    pub position: Point,
    pub button: PointerButton,
    /// Screen-pixel movement since the previous event (drags only).
    pub movement: Point,
}

impl PointerEvent {
    pub fn click(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            movement: Point::ZERO,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// One dispatched input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Click(PointerEvent),
    DoubleClick(PointerEvent),
    PointerMove(PointerEvent),
    /// Pointer moved with a button held down.
    Drag(PointerEvent),
    PointerUp(PointerEvent),
    /// Wheel rotation; positive `delta_y` is scroll-down.
    Wheel { delta_y: f32 },
    KeyDown(Key),
    KeyUp(Key),
}

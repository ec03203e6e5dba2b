//! Test helpers and builders for reducing boilerplate in tests.

use graphboard::GraphEditor;
use graphboard::input::{InputEvent, Key, PointerButton, PointerEvent};
use graphboard::types::{EntityId, Point};

// ============================================================================
// TestEditorBuilder
// ============================================================================

/// Builder for editors pre-populated with nodes and connections.
///
/// Connections are given as indices into the node list, resolved to real
/// ids at build time.
#[derive(Default)]
pub struct TestEditorBuilder {
    nodes: Vec<Point>,
    connections: Vec<(usize, usize, bool)>,
    zoom: Option<f32>,
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, x: f32, y: f32) -> Self {
        self.nodes.push(Point::new(x, y));
        self
    }

    /// Add `count` nodes spaced 200 canvas units apart on the x axis.
    pub fn with_n_nodes(mut self, count: usize) -> Self {
        for i in 0..count {
            self.nodes.push(Point::new(i as f32 * 200.0, 0.0));
        }
        self
    }

    pub fn with_connection(mut self, from: usize, to: usize, directional: bool) -> Self {
        self.connections.push((from, to, directional));
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn build(self) -> (GraphEditor, Vec<EntityId>) {
        let mut editor = GraphEditor::new();
        let ids: Vec<EntityId> = self
            .nodes
            .iter()
            .map(|&p| editor.create_node(p))
            .collect();
        for (from, to, directional) in self.connections {
            editor
                .create_connection(ids[from], ids[to], directional)
                .expect("test connection endpoints exist");
        }
        if let Some(zoom) = self.zoom {
            while editor.zoom() < zoom {
                let before = editor.zoom();
                editor.dispatch(wheel(-120.0));
                assert!(editor.zoom() > before, "zoom target {zoom} unreachable");
            }
        }
        (editor, ids)
    }
}

// ============================================================================
// Input event constructors
// ============================================================================

pub fn click_at(x: f32, y: f32) -> InputEvent {
    InputEvent::Click(PointerEvent::click(Point::new(x, y)))
}

pub fn double_click_at(x: f32, y: f32) -> InputEvent {
    InputEvent::DoubleClick(PointerEvent::click(Point::new(x, y)))
}

pub fn pointer_move_to(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove(PointerEvent::click(Point::new(x, y)))
}

pub fn drag(button: PointerButton, at: (f32, f32), movement: (f32, f32)) -> InputEvent {
    InputEvent::Drag(PointerEvent {
        position: Point::new(at.0, at.1),
        button,
        movement: Point::new(movement.0, movement.1),
    })
}

pub fn pointer_up() -> InputEvent {
    InputEvent::PointerUp(PointerEvent::click(Point::ZERO))
}

pub fn wheel(delta_y: f32) -> InputEvent {
    InputEvent::Wheel { delta_y }
}

pub fn key_down(key: Key) -> InputEvent {
    InputEvent::KeyDown(key)
}

pub fn key_up(key: Key) -> InputEvent {
    InputEvent::KeyUp(key)
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_counts(editor: &GraphEditor, nodes: usize, connections: usize) {
    assert_eq!(editor.graph().node_count(), nodes, "node count");
    assert_eq!(
        editor.graph().connection_count(),
        connections,
        "connection count"
    );
}

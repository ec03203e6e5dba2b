//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// View / Zoom
// ============================================================================

/// Minimum zoom level for the canvas view.
pub const MIN_ZOOM: f32 = 0.25;

/// Maximum zoom level for the canvas view.
pub const MAX_ZOOM: f32 = 4.0;

/// Zoom values within this distance of 1.0 snap to exactly 1.0.
pub const ZOOM_SNAP_BAND: f32 = 0.05;

/// Wheel delta corresponding to one detent on a standard mouse wheel.
pub const WHEEL_DETENT: f32 = 120.0;

/// Zoom factor gained per wheel detent.
pub const ZOOM_STEP: f32 = 0.1;

// ============================================================================
// Node visuals
// ============================================================================

/// Default width of a node box on the canvas.
pub const NODE_WIDTH: f32 = 100.0;

/// Default height of a node box on the canvas.
pub const NODE_HEIGHT: f32 = 50.0;

// ============================================================================
// Hit testing
// ============================================================================

/// Default tolerance (in canvas units) for point hit tests.
pub const DEFAULT_HIT_TOLERANCE: f32 = 4.0;

/// Stroke half-width used when hit testing connection segments.
pub const SEGMENT_HIT_WIDTH: f32 = 2.0;

// ============================================================================
// Scene layers
// ============================================================================

/// Layer holding background decorations (center cross).
pub const LAYER_BACKGROUND: &str = "background";

/// Layer holding connection segments, drawn under nodes.
pub const LAYER_CONNECTIONS: &str = "connections";

/// Layer holding node groups.
pub const LAYER_NODES: &str = "nodes";

/// Layer holding transient tool visuals (connection preview line).
pub const LAYER_OVERLAY: &str = "overlay";

//! View transform: canvas center and zoom.

use crate::constants::{MAX_ZOOM, MIN_ZOOM, WHEEL_DETENT, ZOOM_SNAP_BAND, ZOOM_STEP};
use crate::types::Point;

/// The camera over the canvas: a center point and a zoom scalar.
///
/// Zoom is always within `[MIN_ZOOM, MAX_ZOOM]`, and values near 1.0 snap
/// to exactly 1.0 so the default scale is easy to return to.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    center: Point,
    zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self {
            center: Point::ZERO,
            zoom: 1.0,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom directly, still subject to clamping and snapping.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = snap(zoom.clamp(MIN_ZOOM, MAX_ZOOM));
    }

    /// Apply one wheel event. Scrolling up (negative delta) zooms in.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        let factor = 1.0 + ZOOM_STEP * (delta_y.abs() / WHEEL_DETENT);
        let new_zoom = if delta_y < 0.0 {
            self.zoom * factor
        } else {
            self.zoom / factor
        };
        self.set_zoom(new_zoom);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Pan by a screen-pixel movement. The movement is divided by the
    /// current zoom so drag speed feels constant at every zoom level.
    pub fn pan(&mut self, movement: Point) {
        self.center = self.center.sub(movement.div(self.zoom));
    }
}

fn snap(zoom: f32) -> f32 {
    if (zoom - 1.0).abs() < ZOOM_SNAP_BAND {
        1.0
    } else {
        zoom
    }
}

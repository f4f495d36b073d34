//! Workspace pan/zoom state and coordinate transforms
//!
//! Screen coordinates are what the pointing device reports; workspace
//! coordinates are what widget geometry is stored in. The viewport maps
//! between the two and tracks whether the workspace itself is being panned,
//! which takes priority over any widget gesture.

use serde::{Deserialize, Serialize};
use widget_model::Position;

/// Lower zoom bound
pub const MIN_ZOOM: f64 = 0.25;

/// Upper zoom bound
pub const MAX_ZOOM: f64 = 3.0;

/// Pan/zoom state for the widget workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Workspace coordinate rendered at the screen origin
    pub pan: Position,
    /// Zoom factor, kept within [`MIN_ZOOM`, `MAX_ZOOM`]
    zoom: f64,
    /// Whether the workspace itself is being panned
    panning: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Position::default(),
            zoom: 1.0,
            panning: false,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the supported range
    pub fn zoom_to(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn begin_pan(&mut self) {
        self.panning = true;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Shift the visible origin by a screen-space delta, keeping the content
    /// under the pointer
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = self.pan.translated(-dx / self.zoom, -dy / self.zoom);
    }

    /// Convert a screen-space delta into workspace pixels
    pub fn delta_to_workspace(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.zoom, dy / self.zoom)
    }

    pub fn screen_to_workspace(&self, point: Position) -> Position {
        Position::new(
            self.pan.x + point.x / self.zoom,
            self.pan.y + point.y / self.zoom,
        )
    }

    pub fn workspace_to_screen(&self, point: Position) -> Position {
        Position::new(
            (point.x - self.pan.x) * self.zoom,
            (point.y - self.pan.y) * self.zoom,
        )
    }
}

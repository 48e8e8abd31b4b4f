//! Viewport math for clients that draw the board on a zoomable canvas.
//!
//! Notes live in page-local coordinates. A client showing the page at some
//! zoom level has to divide screen-space movement by the scale before handing
//! positions to the board. The viewport is client state and is never persisted.

pub const MIN_SCALE: f64 = 0.25;
pub const MAX_SCALE: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Viewport {
    pub fn new(scale: f64) -> Self {
        Self {
            scale: clamp_scale(scale),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn zoom(&mut self, delta: f64) {
        self.scale = clamp_scale(self.scale + delta);
    }

    /// Applies `steps` zoom-button presses; negative steps zoom out.
    pub fn zoom_steps(&mut self, steps: i32) {
        self.zoom(f64::from(steps) * ZOOM_STEP);
    }

    /// Converts a screen-space drag into page-local units.
    pub fn to_page_delta(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.scale, dy / self.scale)
    }

    /// Zoom level as a whole percentage, e.g. `125`.
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

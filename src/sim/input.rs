//! Pointer input to smash conversion

use glam::Vec2;

use super::state::Smash;

/// Convert viewport coordinates into canvas-local ones
#[inline]
pub fn screen_to_canvas(screen: Vec2, canvas_origin: Vec2) -> Vec2 {
    screen - canvas_origin
}

/// A click at `screen` on a canvas whose bounding box starts at `canvas_origin`
pub fn on_pointer_down(screen: Vec2, canvas_origin: Vec2) -> Smash {
    Smash::new(screen_to_canvas(screen, canvas_origin))
}

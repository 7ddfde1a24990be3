//! 2D rendering
//!
//! The scene is drawn through the `RenderSurface` trait so the same drawing
//! code runs against the browser canvas and against the recording surface
//! used by headless runs and tests.

pub mod colors;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

pub use colors::Rgba;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{draw_game_over, draw_scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// One stop of a radial gradient, `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Text style: pixel size plus CSS font family
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size_px: u32,
    pub family: &'static str,
}

impl Font {
    pub const fn new(size_px: u32, family: &'static str) -> Self {
        Self { size_px, family }
    }

    pub fn to_css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Drawing primitives the game needs from the host
pub trait RenderSurface {
    /// Surface size in pixels
    fn size(&self) -> Vec2;

    /// Stretch the background image over the surface.
    /// Returns false (and draws nothing) while the image is not loaded.
    fn draw_background(&mut self) -> bool;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Circle filled with a radial gradient running from `inner_radius` to `radius`
    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        radius: f32,
        stops: &[ColorStop],
    );

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Rgba);
}

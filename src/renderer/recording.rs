//! Render surface that records draw calls instead of drawing
//!
//! Backs the native headless run and the render/session tests.

use glam::Vec2;

use super::{ColorStop, Font, RenderSurface, Rgba, TextAlign};

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    RadialGradient {
        center: Vec2,
        inner_radius: f32,
        radius: f32,
        stops: Vec<ColorStop>,
    },
    Text {
        text: String,
        pos: Vec2,
        font: Font,
        align: TextAlign,
        color: Rgba,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    /// Simulates the background image load state
    pub background_ready: bool,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            background_ready: true,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn gradient_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::RadialGradient { .. }))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw_background(&mut self) -> bool {
        if self.background_ready {
            self.commands.push(DrawCommand::Background);
        }
        self.background_ready
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        radius: f32,
        stops: &[ColorStop],
    ) {
        self.commands.push(DrawCommand::RadialGradient {
            center,
            inner_radius,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font,
            align,
            color,
        });
    }
}

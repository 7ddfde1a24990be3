//! Balloon Pop - A casual arcade game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, game state)
//! - `session`: Game loop state machine driving sim + render per frame
//! - `renderer`: 2D render surface abstraction and scene drawing
//! - `platform`: Browser/native platform abstraction (timers, canvas)
//! - `settings`: Player preferences (palette, language)
//! - `i18n`: Display strings for every supported language
//! - `audio`: Procedural sound effects keyed off game events

pub mod audio;
pub mod error;
pub mod i18n;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use i18n::Language;
pub use session::{FrameOutcome, Session};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Balloon radius in canvas pixels (fixed for every balloon)
    pub const BALLOON_RADIUS: f32 = 20.0;
    /// Horizontal spawn margin: balloons spawn with x in [0, width - margin)
    pub const BALLOON_SPAWN_MARGIN: f32 = 40.0;
    /// Balloon rise speed range in pixels per tick [min, max)
    pub const BALLOON_MIN_SPEED: f32 = 1.0;
    pub const BALLOON_MAX_SPEED: f32 = 3.0;

    /// Smash lifetime in ticks
    pub const SMASH_TIMER_TICKS: i32 = 10;
    /// Smash starting radius, grows by `SMASH_GROWTH` every tick
    pub const SMASH_START_RADIUS: f32 = 8.0;
    pub const SMASH_GROWTH: f32 = 1.0;

    /// Wall-clock spawn cadence
    pub const SPAWN_INTERVAL_MS: i32 = 1000;

    /// Canvas sizing relative to the viewport
    pub const CANVAS_WIDTH_FRACTION: f64 = 0.9;
    pub const CANVAS_HEIGHT_FRACTION: f64 = 0.8;
    /// Canvas size when the viewport cannot be measured
    pub const FALLBACK_CANVAS_WIDTH: f32 = 800.0;
    pub const FALLBACK_CANVAS_HEIGHT: f32 = 600.0;
}

/// Euclidean distance between two canvas points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Canvas size for a viewport, falling back to 800x600 when unknown
pub fn canvas_size_for_viewport(viewport: Option<(f64, f64)>) -> Vec2 {
    use consts::*;
    match viewport {
        Some((w, h)) if w > 0.0 && h > 0.0 => Vec2::new(
            (w * CANVAS_WIDTH_FRACTION) as f32,
            (h * CANVAS_HEIGHT_FRACTION) as f32,
        ),
        _ => Vec2::new(FALLBACK_CANVAS_WIDTH, FALLBACK_CANVAS_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_scales_viewport() {
        let size = canvas_size_for_viewport(Some((1000.0, 500.0)));
        assert_eq!(size, Vec2::new(900.0, 400.0));
    }

    #[test]
    fn test_canvas_size_fallback() {
        assert_eq!(canvas_size_for_viewport(None), Vec2::new(800.0, 600.0));
        assert_eq!(
            canvas_size_for_viewport(Some((0.0, 0.0))),
            Vec2::new(800.0, 600.0)
        );
    }
}

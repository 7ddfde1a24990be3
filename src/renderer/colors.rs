//! Colors for game elements

use crate::sim::BalloonColor;

/// 8-bit RGB with float alpha, matching CSS `rgba()`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
/// Clear color when the background image is not ready yet
pub const SKY: Rgba = Rgba::opaque(135, 206, 235);

pub const SCORE_TEXT: Rgba = BLACK;
pub const GAME_OVER_BACKDROP: Rgba = BLACK;
pub const GAME_OVER_TEXT: Rgba = WHITE;

/// Smash burst: opaque orange core fading to transparent red
pub const SMASH_CORE: Rgba = Rgba::new(255, 165, 0, 1.0);
pub const SMASH_MID: Rgba = Rgba::new(255, 69, 0, 0.7);
pub const SMASH_EDGE: Rgba = Rgba::new(255, 0, 0, 0.0);

/// Same values as the CSS named colors
pub fn balloon_fill(color: BalloonColor) -> Rgba {
    match color {
        BalloonColor::Red => Rgba::opaque(255, 0, 0),
        BalloonColor::Blue => Rgba::opaque(0, 0, 255),
        BalloonColor::Green => Rgba::opaque(0, 128, 0),
        BalloonColor::Yellow => Rgba::opaque(255, 255, 0),
        BalloonColor::Orange => Rgba::opaque(255, 165, 0),
        BalloonColor::Purple => Rgba::opaque(128, 0, 128),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(SMASH_MID.to_css(), "rgba(255, 69, 0, 0.7)");
        assert_eq!(SMASH_EDGE.to_css(), "rgba(255, 0, 0, 0)");
    }
}

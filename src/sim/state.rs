//! Game state and core simulation types

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balloons rise, clicks smash
    Running,
    /// A balloon escaped; terminal until a new session starts
    GameOver,
}

/// Balloon colors the player can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl BalloonColor {
    pub const ALL: [BalloonColor; 6] = [
        BalloonColor::Red,
        BalloonColor::Blue,
        BalloonColor::Green,
        BalloonColor::Yellow,
        BalloonColor::Orange,
        BalloonColor::Purple,
    ];

    /// CSS color name, also used as the settings key
    pub fn as_str(&self) -> &'static str {
        match self {
            BalloonColor::Red => "red",
            BalloonColor::Blue => "blue",
            BalloonColor::Green => "green",
            BalloonColor::Yellow => "yellow",
            BalloonColor::Orange => "orange",
            BalloonColor::Purple => "purple",
        }
    }
}

impl fmt::Display for BalloonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BalloonColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BalloonColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }
}

/// Non-empty set of colors balloons are drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BalloonColor>", into = "Vec<BalloonColor>")]
pub struct Palette(Vec<BalloonColor>);

impl Palette {
    /// Build a palette, dropping duplicates (first occurrence wins)
    pub fn new(colors: impl IntoIterator<Item = BalloonColor>) -> Result<Self, ConfigError> {
        let mut unique = Vec::new();
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self(unique))
    }

    /// The "mixed" preset from the settings menu
    pub fn mixed() -> Self {
        Self(vec![
            BalloonColor::Red,
            BalloonColor::Yellow,
            BalloonColor::Green,
            BalloonColor::Blue,
            BalloonColor::Orange,
        ])
    }

    pub fn colors(&self) -> &[BalloonColor] {
        &self.0
    }

    pub fn contains(&self, color: BalloonColor) -> bool {
        self.0.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    /// Listed in settings-form order, so re-applying the form keeps it equal
    fn default() -> Self {
        Self(vec![
            BalloonColor::Red,
            BalloonColor::Yellow,
            BalloonColor::Green,
            BalloonColor::Blue,
            BalloonColor::Purple,
        ])
    }
}

impl TryFrom<Vec<BalloonColor>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<BalloonColor>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<BalloonColor> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

/// A rising balloon
#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub pos: Vec2,
    /// Pixels risen per tick (always > 0)
    pub speed: f32,
    pub color: BalloonColor,
}

impl Balloon {
    pub fn new(pos: Vec2, speed: f32, color: BalloonColor) -> Self {
        Self { pos, speed, color }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        BALLOON_RADIUS
    }

    pub fn rise(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Fully above the top edge of the canvas
    pub fn has_escaped(&self) -> bool {
        self.pos.y < -self.radius()
    }
}

/// Expanding pop effect left by a click; also the hit area
#[derive(Debug, Clone, PartialEq)]
pub struct Smash {
    pub pos: Vec2,
    pub timer: i32,
    pub radius: f32,
}

impl Smash {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            timer: SMASH_TIMER_TICKS,
            radius: SMASH_START_RADIUS,
        }
    }

    pub fn advance(&mut self) {
        self.timer -= 1;
        self.radius += SMASH_GROWTH;
    }

    pub fn is_expired(&self) -> bool {
        self.timer <= 0
    }
}

/// Things the host reacts to (sounds, logging)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BalloonPopped { color: BalloonColor, pos: Vec2 },
    BalloonEscaped { pos: Vec2 },
    GameOver { score: u64 },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub balloons: Vec<Balloon>,
    pub smashes: Vec<Smash>,
    pub score: u64,
    pub phase: GamePhase,
    /// Canvas size in pixels
    pub canvas: Vec2,
    pub palette: Palette,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, canvas: Vec2, palette: Palette) -> Self {
        Self {
            balloons: Vec::new(),
            smashes: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            canvas,
            palette,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(Palette::new(Vec::<BalloonColor>::new()), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn test_palette_dedupes() {
        let palette = Palette::new([
            BalloonColor::Red,
            BalloonColor::Red,
            BalloonColor::Blue,
        ])
        .unwrap();
        assert_eq!(palette.colors(), &[BalloonColor::Red, BalloonColor::Blue]);
    }

    #[test]
    fn test_palette_json_rejects_empty() {
        let result: Result<Palette, _> = serde_json::from_str("[]");
        assert!(result.is_err());

        let palette: Palette = serde_json::from_str(r#"["green","orange"]"#).unwrap();
        assert_eq!(palette.colors(), &[BalloonColor::Green, BalloonColor::Orange]);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("Purple".parse::<BalloonColor>(), Ok(BalloonColor::Purple));
        assert_eq!(
            "mauve".parse::<BalloonColor>(),
            Err(ConfigError::UnknownColor("mauve".to_string()))
        );
    }

    #[test]
    fn test_smash_lifecycle() {
        let mut smash = Smash::new(Vec2::new(5.0, 5.0));
        for _ in 0..9 {
            smash.advance();
            assert!(!smash.is_expired());
        }
        smash.advance();
        assert!(smash.is_expired());
        assert_eq!(smash.radius, SMASH_START_RADIUS + 10.0);
    }

    #[test]
    fn test_balloon_escape_threshold() {
        let mut balloon = Balloon::new(Vec2::new(0.0, -19.0), 1.0, BalloonColor::Red);
        assert!(!balloon.has_escaped());
        balloon.rise();
        assert!(!balloon.has_escaped()); // exactly -20 is still on screen
        balloon.rise();
        assert!(balloon.has_escaped());
    }
}

//! Balloon spawning

use glam::Vec2;
use rand::Rng;

use super::state::{Balloon, GameState, Palette};
use crate::consts::*;

/// Create a balloon just below the bottom edge with random x, speed and color
pub fn spawn_balloon<R: Rng>(rng: &mut R, canvas: Vec2, palette: &Palette) -> Balloon {
    let span = canvas.x - BALLOON_SPAWN_MARGIN;
    let x = if span > 0.0 {
        rng.random_range(0.0..span)
    } else {
        0.0
    };
    let speed = rng.random_range(BALLOON_MIN_SPEED..BALLOON_MAX_SPEED);
    let colors = palette.colors();
    let color = colors[rng.random_range(0..colors.len())];

    Balloon::new(Vec2::new(x, canvas.y), speed, color)
}

/// Spawn-timer callback body: adds a balloon while running, no-op otherwise
pub fn spawn_tick(state: &mut GameState) -> bool {
    if !state.is_running() {
        return false;
    }
    let balloon = spawn_balloon(&mut state.rng, state.canvas, &state.palette);
    log::debug!(
        "Spawned {} balloon at x={:.1} speed={:.2}",
        balloon.color,
        balloon.pos.x,
        balloon.speed
    );
    state.balloons.push(balloon);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BalloonColor, GamePhase};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let canvas = Vec2::new(640.0, 480.0);
        let palette = Palette::new([BalloonColor::Blue, BalloonColor::Yellow]).unwrap();

        for _ in 0..500 {
            let b = spawn_balloon(&mut rng, canvas, &palette);
            assert!(b.pos.x >= 0.0 && b.pos.x < 600.0);
            assert_eq!(b.pos.y, 480.0);
            assert!(b.speed >= 1.0 && b.speed < 3.0);
            assert!(palette.colors().contains(&b.color));
        }
    }

    #[test]
    fn test_spawn_uses_whole_palette() {
        let mut rng = Pcg32::seed_from_u64(11);
        let palette = Palette::mixed();
        let mut seen = Vec::new();
        for _ in 0..200 {
            let b = spawn_balloon(&mut rng, Vec2::new(800.0, 600.0), &palette);
            if !seen.contains(&b.color) {
                seen.push(b.color);
            }
        }
        assert_eq!(seen.len(), palette.len());
    }

    #[test]
    fn test_narrow_canvas_spawns_at_left_edge() {
        let mut rng = Pcg32::seed_from_u64(3);
        let b = spawn_balloon(&mut rng, Vec2::new(30.0, 100.0), &Palette::default());
        assert_eq!(b.pos.x, 0.0);
    }

    #[test]
    fn test_spawn_tick_suspended_after_game_over() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0), Palette::default());
        assert!(spawn_tick(&mut state));
        assert_eq!(state.balloons.len(), 1);

        state.phase = GamePhase::GameOver;
        assert!(!spawn_tick(&mut state));
        assert_eq!(state.balloons.len(), 1);
    }
}

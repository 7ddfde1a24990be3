//! Per-frame simulation tick
//!
//! One call advances the game by exactly one display frame.

use super::collision::resolve_collisions;
use super::state::{GameEvent, GamePhase, GameState};

/// Result of a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Balloons popped during this tick
    pub popped: u32,
    /// This tick moved the game into `GameOver`
    pub game_over: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickReport {
    if state.phase == GamePhase::GameOver {
        return TickReport::default();
    }

    state.time_ticks += 1;

    // Rise, then look for escapes. The rest of the tick still runs so the
    // final frame reflects every position computed here.
    let mut escaped = None;
    for balloon in &mut state.balloons {
        balloon.rise();
        if escaped.is_none() && balloon.has_escaped() {
            escaped = Some(balloon.pos);
        }
    }

    for smash in &mut state.smashes {
        smash.advance();
    }
    state.smashes.retain(|s| !s.is_expired());

    let popped = resolve_collisions(state);

    let game_over = if let Some(pos) = escaped {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::BalloonEscaped { pos });
        state.push_event(GameEvent::GameOver { score: state.score });
        log::info!(
            "Balloon escaped at x={:.1} after {} ticks, final score {}",
            pos.x,
            state.time_ticks,
            state.score
        );
        true
    } else {
        false
    };

    TickReport { popped, game_over }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Balloon, BalloonColor, Palette, Smash};
    use glam::Vec2;
    use proptest::prelude::*;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    fn new_state() -> GameState {
        GameState::new(12345, CANVAS, Palette::new([BalloonColor::Red]).unwrap())
    }

    #[test]
    fn test_balloon_rises_until_escape() {
        let mut state = new_state();
        state
            .balloons
            .push(Balloon::new(Vec2::new(100.0, CANVAS.y), 2.0, BalloonColor::Red));

        tick(&mut state);
        assert_eq!(state.balloons[0].pos.y, CANVAS.y - 2.0);
        assert_eq!(state.phase, GamePhase::Running);

        // y = 600 - 2n < -20 first holds at n = 311
        let ticks = (CANVAS.y / 2.0) as u32 + 11;
        for _ in 1..ticks - 1 {
            tick(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Running);
        let report = tick(&mut state);
        assert!(report.game_over);
        assert_eq!(state.phase, GamePhase::GameOver);
        // The escaped balloon stays in the live set
        assert_eq!(state.balloons.len(), 1);
    }

    #[test]
    fn test_game_over_freezes_positions() {
        let mut state = new_state();
        state
            .balloons
            .push(Balloon::new(Vec2::new(10.0, -19.0), 2.0, BalloonColor::Red));
        state
            .balloons
            .push(Balloon::new(Vec2::new(300.0, 300.0), 1.5, BalloonColor::Red));

        assert!(tick(&mut state).game_over);
        let frozen = state.balloons.clone();
        let ticks = state.time_ticks;

        assert_eq!(tick(&mut state), TickReport::default());
        assert_eq!(state.balloons, frozen);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_game_over_events() {
        let mut state = new_state();
        state
            .balloons
            .push(Balloon::new(Vec2::new(10.0, -20.0), 1.0, BalloonColor::Red));
        tick(&mut state);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::BalloonEscaped {
                    pos: Vec2::new(10.0, -21.0)
                },
                GameEvent::GameOver { score: 0 },
            ]
        );
    }

    #[test]
    fn test_expired_smash_removed_before_collisions() {
        let mut state = new_state();
        let mut smash = Smash::new(Vec2::new(100.0, 100.0));
        smash.timer = 1;
        state.smashes.push(smash);
        state
            .balloons
            .push(Balloon::new(Vec2::new(100.0, 102.0), 1.0, BalloonColor::Red));

        let report = tick(&mut state);
        assert!(state.smashes.is_empty());
        assert_eq!(report.popped, 0);
        assert_eq!(state.balloons.len(), 1);
    }

    #[test]
    fn test_pop_scenario() {
        let mut state = new_state();
        // Pre-offset so the balloon lands on (104, 100) after rising
        state
            .balloons
            .push(Balloon::new(Vec2::new(104.0, 101.0), 1.0, BalloonColor::Red));
        state.smashes.push(Smash::new(Vec2::new(100.0, 100.0)));

        let report = tick(&mut state);
        assert_eq!(report.popped, 1);
        assert_eq!(state.score, 1);
        assert!(state.balloons.is_empty());
        assert_eq!(state.smashes.len(), 1);
    }

    #[test]
    fn test_two_balloons_in_one_smash() {
        let mut state = new_state();
        state
            .balloons
            .push(Balloon::new(Vec2::new(100.0, 300.0), 1.0, BalloonColor::Red));
        state
            .balloons
            .push(Balloon::new(Vec2::new(110.0, 300.0), 1.0, BalloonColor::Red));
        state.smashes.push(Smash::new(Vec2::new(105.0, 299.0)));

        assert_eq!(tick(&mut state).popped, 2);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_determinism() {
        use crate::sim::spawn::spawn_tick;

        let mut state1 = GameState::new(99999, CANVAS, Palette::mixed());
        let mut state2 = GameState::new(99999, CANVAS, Palette::mixed());

        for frame in 0..240 {
            if frame % 60 == 0 {
                spawn_tick(&mut state1);
                spawn_tick(&mut state2);
            }
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.balloons, state2.balloons);
        assert_eq!(state1.time_ticks, state2.time_ticks);
    }

    proptest! {
        #[test]
        fn prop_balloons_rise_by_speed(
            positions in prop::collection::vec((0.0f32..760.0, 0.0f32..600.0, 1.0f32..3.0), 1..20)
        ) {
            let mut state = new_state();
            for (x, y, speed) in &positions {
                state.balloons.push(Balloon::new(Vec2::new(*x, *y), *speed, BalloonColor::Red));
            }
            let before = state.balloons.clone();
            tick(&mut state);
            prop_assert_eq!(state.balloons.len(), before.len());
            for (old, new) in before.iter().zip(&state.balloons) {
                prop_assert_eq!(new.pos.y, old.pos.y - old.speed);
                prop_assert_eq!(new.pos.x, old.pos.x);
            }
        }

        #[test]
        fn prop_smash_timer_and_radius(timer in -2i32..12, radius in 0.0f32..40.0) {
            let mut state = new_state();
            state.smashes.push(Smash { pos: Vec2::new(50.0, 50.0), timer, radius });
            tick(&mut state);
            if timer - 1 <= 0 {
                prop_assert!(state.smashes.is_empty());
            } else {
                prop_assert_eq!(state.smashes.len(), 1);
                prop_assert_eq!(state.smashes[0].timer, timer - 1);
                prop_assert_eq!(state.smashes[0].radius, radius + 1.0);
            }
        }

        #[test]
        fn prop_score_counts_pops(
            balloons in prop::collection::vec((0.0f32..200.0, 21.0f32..200.0), 0..15),
            smashes in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 0..5),
        ) {
            let mut state = new_state();
            for (x, y) in &balloons {
                state.balloons.push(Balloon::new(Vec2::new(*x, *y), 1.0, BalloonColor::Red));
            }
            for (x, y) in &smashes {
                state.smashes.push(Smash::new(Vec2::new(*x, *y)));
            }
            let before = state.balloons.len();
            let report = tick(&mut state);
            prop_assert_eq!(state.score, u64::from(report.popped));
            prop_assert_eq!(state.balloons.len() + report.popped as usize, before);
            for balloon in &state.balloons {
                for smash in &state.smashes {
                    prop_assert!(!crate::sim::collision::smash_hits_balloon(smash, balloon));
                }
            }
        }
    }
}

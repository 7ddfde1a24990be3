//! Game loop state machine
//!
//! A `Session` is one game from start to game over. The host calls
//! `on_frame` from its animation-frame callback and `on_spawn_tick` from its
//! spawn interval; both run on the same thread and only touch the session
//! through `&mut self`. `on_frame` returns after every tick and tells the host
//! whether to schedule another frame.

use glam::Vec2;

use crate::i18n::Strings;
use crate::platform::ScopedTimer;
use crate::renderer::{RenderSurface, draw_game_over, draw_scene};
use crate::sim::{GameEvent, GamePhase, GameState, Palette, on_pointer_down, spawn_tick, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule the next frame
    Continue,
    /// The session is over; do not schedule further frames
    Stop,
}

pub struct Session {
    state: GameState,
    strings: &'static Strings,
    /// Released exactly once, at the Running -> GameOver transition
    spawn_timer: Option<Box<dyn ScopedTimer>>,
}

impl Session {
    /// Start a running session. The palette is non-empty by construction.
    pub fn start(seed: u64, canvas: Vec2, palette: Palette, strings: &'static Strings) -> Self {
        log::info!(
            "Session started: seed={} canvas={}x{} colors={}",
            seed,
            canvas.x,
            canvas.y,
            palette.len()
        );
        Self {
            state: GameState::new(seed, canvas, palette),
            strings,
            spawn_timer: None,
        }
    }

    /// Hand the session its spawn interval
    pub fn arm_spawn_timer(&mut self, timer: Box<dyn ScopedTimer>) {
        self.release_spawn_timer();
        self.spawn_timer = Some(timer);
        if !self.state.is_running() {
            self.release_spawn_timer();
        }
    }

    pub fn has_spawn_timer(&self) -> bool {
        self.spawn_timer.is_some()
    }

    fn release_spawn_timer(&mut self) {
        if let Some(mut timer) = self.spawn_timer.take() {
            timer.cancel();
            log::debug!("Spawn timer released");
        }
    }

    /// Spawn interval callback. No-op once the game is over.
    pub fn on_spawn_tick(&mut self) -> bool {
        spawn_tick(&mut self.state)
    }

    /// Click on the canvas. Ignored unless the game is running.
    pub fn on_pointer_down(&mut self, screen: Vec2, canvas_origin: Vec2) -> bool {
        if !self.state.is_running() {
            log::debug!("Ignoring click outside a running game");
            return false;
        }
        let smash = on_pointer_down(screen, canvas_origin);
        log::debug!("Smash at ({:.1}, {:.1})", smash.pos.x, smash.pos.y);
        self.state.smashes.push(smash);
        true
    }

    /// One display frame: tick, render, report whether to continue.
    ///
    /// The tick that ends the game still renders its final positions and
    /// releases the spawn timer; the following frame draws the game over
    /// screen and stops.
    pub fn on_frame<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
        if self.state.phase == GamePhase::GameOver {
            self.release_spawn_timer();
            draw_game_over(surface, self.state.score, self.strings);
            return FrameOutcome::Stop;
        }

        let report = tick(&mut self.state);
        if report.game_over {
            self.release_spawn_timer();
        }
        draw_scene(surface, &self.state, self.strings);
        FrameOutcome::Continue
    }

    /// Redraw the game over screen (e.g. after a resize)
    pub fn redraw_game_over<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        draw_game_over(surface, self.state.score, self.strings);
    }

    /// Events raised since the last call (pops, game over)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release_spawn_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::platform::ManualTimer;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::{Balloon, BalloonColor};

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    fn start() -> Session {
        Session::start(
            42,
            CANVAS,
            Palette::new([BalloonColor::Red]).unwrap(),
            Language::En.strings(),
        )
    }

    fn escape_soon(session: &mut Session) {
        session
            .state
            .balloons
            .push(Balloon::new(Vec2::new(100.0, -19.0), 2.0, BalloonColor::Red));
    }

    #[test]
    fn test_running_frames_continue() {
        let mut session = start();
        let mut surface = RecordingSurface::new(CANVAS);
        assert!(session.on_spawn_tick());
        assert_eq!(session.on_frame(&mut surface), FrameOutcome::Continue);
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.texts(), vec!["Score: 0"]);
    }

    #[test]
    fn test_game_over_sequence() {
        let mut session = start();
        let timer = ManualTimer::new();
        let cancels = timer.cancel_count();
        session.arm_spawn_timer(Box::new(timer));
        escape_soon(&mut session);

        let mut surface = RecordingSurface::new(CANVAS);
        // Transition frame: final positions are drawn, timer released
        assert_eq!(session.on_frame(&mut surface), FrameOutcome::Continue);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(cancels.get(), 1);
        assert!(!session.has_spawn_timer());
        assert_eq!(surface.commands[0], DrawCommand::Background);

        surface.clear();
        assert_eq!(session.on_frame(&mut surface), FrameOutcome::Stop);
        assert_eq!(surface.texts()[0], "Game Over! Your score is: 0");

        // Further frames and teardown never cancel again
        session.on_frame(&mut surface);
        drop(session);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_no_spawns_or_clicks_after_game_over() {
        let mut session = start();
        escape_soon(&mut session);
        let mut surface = RecordingSurface::new(CANVAS);
        session.on_frame(&mut surface);

        let balloons = session.state().balloons.len();
        assert!(!session.on_spawn_tick());
        assert!(!session.on_pointer_down(Vec2::new(10.0, 10.0), Vec2::ZERO));
        assert_eq!(session.state().balloons.len(), balloons);
        assert!(session.state().smashes.is_empty());
    }

    #[test]
    fn test_click_pops_balloon_next_frame() {
        let mut session = start();
        session
            .state
            .balloons
            .push(Balloon::new(Vec2::new(200.0, 301.0), 1.0, BalloonColor::Red));

        // Canvas sits at (50, 20) in the viewport
        assert!(session.on_pointer_down(Vec2::new(252.0, 320.0), Vec2::new(50.0, 20.0)));
        let mut surface = RecordingSurface::new(CANVAS);
        session.on_frame(&mut surface);

        assert_eq!(session.score(), 1);
        assert!(matches!(
            session.drain_events().as_slice(),
            [GameEvent::BalloonPopped { .. }]
        ));
        assert_eq!(surface.texts(), vec!["Score: 1"]);
    }

    #[test]
    fn test_dropping_running_session_releases_timer() {
        let mut session = start();
        let timer = ManualTimer::new();
        let cancels = timer.cancel_count();
        session.arm_spawn_timer(Box::new(timer));
        drop(session);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_rearming_cancels_previous_timer() {
        let mut session = start();
        let first = ManualTimer::new();
        let first_cancels = first.cancel_count();
        session.arm_spawn_timer(Box::new(first));
        session.arm_spawn_timer(Box::new(ManualTimer::new()));
        assert_eq!(first_cancels.get(), 1);
        assert!(session.has_spawn_timer());
    }

    #[test]
    fn test_full_game_reaches_game_over() {
        let mut session = start();
        let mut surface = RecordingSurface::new(CANVAS);
        let mut frames = 0;
        while session.on_frame(&mut surface) == FrameOutcome::Continue {
            if frames % 60 == 0 {
                session.on_spawn_tick();
            }
            frames += 1;
            surface.clear();
            assert!(frames < 10_000, "game never ended");
        }
        assert_eq!(session.phase(), GamePhase::GameOver);
    }
}

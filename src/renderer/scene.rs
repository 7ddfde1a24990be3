//! Scene drawing: playfield, HUD and the game over screen

use glam::Vec2;

use super::colors::{self, balloon_fill};
use super::{ColorStop, Font, RenderSurface, TextAlign};
use crate::i18n::Strings;
use crate::sim::{Balloon, GameState, Smash};

const SCORE_FONT: Font = Font::new(20, "Arial");
const GAME_OVER_FONT: Font = Font::new(30, "Arial");
const SCORE_POS: Vec2 = Vec2::new(10.0, 30.0);
/// Gap between the final score line and the restart hint
const HINT_OFFSET: f32 = 40.0;

const SMASH_STOPS: [ColorStop; 3] = [
    ColorStop {
        offset: 0.0,
        color: colors::SMASH_CORE,
    },
    ColorStop {
        offset: 0.5,
        color: colors::SMASH_MID,
    },
    ColorStop {
        offset: 1.0,
        color: colors::SMASH_EDGE,
    },
];

/// Draw one running frame
pub fn draw_scene<S: RenderSurface + ?Sized>(surface: &mut S, state: &GameState, strings: &Strings) {
    let size = surface.size();
    if !surface.draw_background() {
        // Image still loading, clear so the previous frame doesn't smear
        surface.fill_rect(Vec2::ZERO, size, colors::SKY);
    }

    for balloon in &state.balloons {
        draw_balloon(surface, balloon);
    }
    for smash in &state.smashes {
        draw_smash(surface, smash);
    }

    surface.fill_text(
        &strings.score_line(state.score),
        SCORE_POS,
        SCORE_FONT,
        TextAlign::Left,
        colors::SCORE_TEXT,
    );
}

fn draw_balloon<S: RenderSurface + ?Sized>(surface: &mut S, balloon: &Balloon) {
    surface.fill_circle(balloon.pos, balloon.radius(), balloon_fill(balloon.color));
}

fn draw_smash<S: RenderSurface + ?Sized>(surface: &mut S, smash: &Smash) {
    surface.fill_radial_gradient(smash.pos, smash.radius / 4.0, smash.radius, &SMASH_STOPS);
}

/// Full screen game over overlay. Draws the same pixels every call.
pub fn draw_game_over<S: RenderSurface + ?Sized>(surface: &mut S, score: u64, strings: &Strings) {
    let size = surface.size();
    let center = size / 2.0;

    surface.fill_rect(Vec2::ZERO, size, colors::GAME_OVER_BACKDROP);
    surface.fill_text(
        &strings.game_over_line(score),
        center,
        GAME_OVER_FONT,
        TextAlign::Center,
        colors::GAME_OVER_TEXT,
    );
    surface.fill_text(
        strings.restart_hint,
        center + Vec2::new(0.0, HINT_OFFSET),
        GAME_OVER_FONT,
        TextAlign::Center,
        colors::GAME_OVER_TEXT,
    );
}

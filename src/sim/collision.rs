//! Smash vs balloon collision detection
//!
//! Only smash/balloon pairs are tested. Popped balloons are marked against a
//! stable view of the tick's balloons first and compacted out in one pass, so
//! removal never shifts the indices still being scanned.

use super::state::{Balloon, GameEvent, GameState, Smash};
use crate::distance;

/// Circles overlap strictly (touching edges do not pop)
#[inline]
pub fn smash_hits_balloon(smash: &Smash, balloon: &Balloon) -> bool {
    distance(smash.pos, balloon.pos) < smash.radius + balloon.radius()
}

/// Mark pass: one flag per balloon, true if any smash overlaps it
pub fn mark_popped(smashes: &[Smash], balloons: &[Balloon]) -> Vec<bool> {
    let mut popped = vec![false; balloons.len()];
    for smash in smashes {
        // No early exit: one smash may pop several balloons
        for (flag, balloon) in popped.iter_mut().zip(balloons) {
            if !*flag && smash_hits_balloon(smash, balloon) {
                *flag = true;
            }
        }
    }
    popped
}

/// Pop every overlapped balloon, add to score and queue pop events.
/// Returns the number of balloons popped this tick.
pub fn resolve_collisions(state: &mut GameState) -> u32 {
    if state.smashes.is_empty() || state.balloons.is_empty() {
        return 0;
    }

    let popped = mark_popped(&state.smashes, &state.balloons);
    if !popped.contains(&true) {
        return 0;
    }

    let mut removed = Vec::new();
    let mut flags = popped.iter();
    state.balloons.retain(|balloon| {
        let pop = flags.next().copied().unwrap_or(false);
        if pop {
            removed.push((balloon.color, balloon.pos));
        }
        !pop
    });

    let count = removed.len() as u32;
    state.score += u64::from(count);
    for (color, pos) in removed {
        state.push_event(GameEvent::BalloonPopped { color, pos });
    }
    count
}

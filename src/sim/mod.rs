//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{mark_popped, resolve_collisions, smash_hits_balloon};
pub use input::{on_pointer_down, screen_to_canvas};
pub use spawn::{spawn_balloon, spawn_tick};
pub use state::{Balloon, BalloonColor, GameEvent, GamePhase, GameState, Palette, Smash};
pub use tick::{TickReport, tick};

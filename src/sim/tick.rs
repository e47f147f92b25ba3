//! Per-frame simulation tick
//!
//! Phase order is fixed: player requests, wave scheduler, enemies, towers,
//! projectiles, then the purge of everything flagged dead. Phases check
//! liveness flags, so an enemy killed earlier in the tick is invisible to
//! later phases even though it is only removed at the end.

use glam::Vec2;

use super::combat::{advance_projectiles, advance_towers};
use super::economy::{place_tower, preview_placement, upgrade_tower};
use super::enemies::advance_enemies;
use super::state::{GameEvent, GameState};
use super::waves::advance_waves;
use crate::consts::MAX_FRAME_DT;

/// Discrete player requests for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Buy a tower here
    pub place: Option<Vec2>,
    /// Upgrade the tower under this point
    pub upgrade: Option<Vec2>,
    /// Current pointer position, for placement preview
    pub cursor: Option<Vec2>,
    /// Start over with a fresh game
    pub reset: bool,
}

/// Clamp a raw frame delta into `[0, max_dt]`; garbage deltas become zero
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(max_dt)
    } else {
        0.0
    }
}

/// Advance the game by one frame, clamping `dt` to [`MAX_FRAME_DT`]
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    tick_with_limit(state, input, dt, MAX_FRAME_DT);
}

/// Advance the game by one frame, clamping `dt` to `max_dt`
pub fn tick_with_limit(state: &mut GameState, input: &TickInput, dt: f32, max_dt: f32) {
    state.events.clear();

    if input.reset {
        state.reset();
        return;
    }

    // Frozen until reset
    if state.is_game_over() {
        return;
    }

    let dt = clamp_dt(dt, max_dt);
    state.elapsed += dt;

    if let Some(pos) = input.place {
        place_tower(state, pos);
    }
    if let Some(pos) = input.upgrade {
        upgrade_tower(state, pos);
    }
    let preview = input.cursor.map(|pos| preview_placement(state, pos));
    state.placement_preview = preview;

    advance_waves(state, dt);
    advance_enemies(state, dt);
    advance_towers(state, dt);
    advance_projectiles(state, dt);
    state.purge_dead();

    if state.is_game_over() {
        log::info!("Defenses overwhelmed! Score: {}", state.score);
        state.events.push(GameEvent::GameOver);
    }
}

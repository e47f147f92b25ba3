//! Tower placement legality, purchases and upgrades
//!
//! Every rejected request is a silent no-op: the caller gets `false` and the
//! state is untouched.

use glam::Vec2;

use super::geometry::inside_rect;
use super::state::{GameEvent, GameState, PlacementPreview, Tint, Tower};
use crate::consts::*;

/// Minimum distance from a tower center to the road centerline
pub const PATH_CLEARANCE: f32 = PATH_WIDTH / 2.0 + TOWER_RADIUS - PATH_OVERLAP_ALLOWANCE;
/// Minimum distance between two tower centers
pub const TOWER_SPACING: f32 = TOWER_RADIUS * TOWER_SPACING_FACTOR;

/// Check whether a tower could stand at `pos` (gold is not considered)
pub fn can_place_tower(state: &GameState, pos: Vec2) -> bool {
    let min = Vec2::splat(TOWER_RADIUS);
    let max = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) - TOWER_RADIUS;
    if !inside_rect(pos, min, max) {
        return false;
    }

    if state.path.distance_to(pos) < PATH_CLEARANCE {
        return false;
    }

    state
        .towers
        .iter()
        .all(|t| t.pos.distance(pos) >= TOWER_SPACING)
}

/// Buy a tower at `pos` if the spot is legal and gold suffices
pub fn place_tower(state: &mut GameState, pos: Vec2) -> bool {
    if state.gold < TOWER_COST {
        log::debug!("Placement at {pos} rejected: {} gold < {TOWER_COST}", state.gold);
        return false;
    }
    if !can_place_tower(state, pos) {
        log::debug!("Placement at {pos} rejected: illegal spot");
        return false;
    }

    let index = state.towers.len();
    state.towers.push(Tower::new(pos, Tint::for_new_tower(index)));
    state.gold -= TOWER_COST;
    state.events.push(GameEvent::TowerPlaced { tower: index, pos });
    log::debug!("Tower {index} placed at {pos}, {} gold left", state.gold);
    true
}

/// Index of the tower nearest to `pos` within the pick radius
pub fn tower_at(state: &GameState, pos: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, tower) in state.towers.iter().enumerate() {
        let d = tower.pos.distance(pos);
        if d < TOWER_RADIUS && best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((index, d));
        }
    }
    best.map(|(index, _)| index)
}

/// Upgrade the tower under `pos` if there is one and gold suffices
pub fn upgrade_tower(state: &mut GameState, pos: Vec2) -> bool {
    let Some(index) = tower_at(state, pos) else {
        log::debug!("Upgrade at {pos} rejected: no tower");
        return false;
    };
    if state.gold < UPGRADE_COST {
        log::debug!("Upgrade of tower {index} rejected: {} gold < {UPGRADE_COST}", state.gold);
        return false;
    }

    state.gold -= UPGRADE_COST;
    let tower = &mut state.towers[index];
    tower.upgrade();
    let level = tower.level;
    state.events.push(GameEvent::TowerUpgraded { tower: index, level });
    log::debug!("Tower {index} upgraded to level {level}, {} gold left", state.gold);
    true
}

/// Hover feedback for a prospective placement at `pos`
pub fn preview_placement(state: &GameState, pos: Vec2) -> PlacementPreview {
    PlacementPreview {
        position: pos,
        valid: can_place_tower(state, pos),
        affordable: state.gold >= TOWER_COST,
    }
}

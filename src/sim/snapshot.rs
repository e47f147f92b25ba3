//! Read-only view of the game for presentation
//!
//! Renderers and HUDs consume a [`Snapshot`] instead of reaching into
//! [`GameState`], so the core stays ignorant of how anything is drawn.

use glam::Vec2;
use serde::Serialize;

use super::state::{EnemyId, GameState, PlacementPreview, Tint};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub pos: Vec2,
    /// Remaining health in [0, 1]
    pub health_ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TowerView {
    pub pos: Vec2,
    pub range: f32,
    pub level: u32,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub tint: Tint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EconomyView {
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
    /// 0-based; equals `wave_count` once every wave is done
    pub wave_index: usize,
    /// 1-based, capped at `wave_count`
    pub wave_number: usize,
    pub wave_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub path: Vec<Vec2>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub economy: EconomyView,
    pub game_over: bool,
    pub all_waves_cleared: bool,
    pub placement_preview: Option<PlacementPreview>,
    /// Seconds simulated, for presentation-side animation
    pub elapsed: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            path: state.path.waypoints().to_vec(),
            enemies: state
                .enemies
                .iter()
                .filter(|e| e.alive)
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    health_ratio: e.health_ratio(),
                })
                .collect(),
            towers: state
                .towers
                .iter()
                .map(|t| TowerView {
                    pos: t.pos,
                    range: t.range,
                    level: t.level,
                    tint: t.tint,
                })
                .collect(),
            projectiles: state
                .projectiles
                .iter()
                .filter(|p| p.alive)
                .map(|p| ProjectileView {
                    pos: p.pos,
                    tint: p.tint,
                })
                .collect(),
            economy: EconomyView {
                gold: state.gold,
                lives: state.lives,
                score: state.score,
                wave_index: state.wave_index(),
                wave_number: state.wave_number(),
                wave_count: state.waves.len(),
            },
            game_over: state.is_game_over(),
            all_waves_cleared: state.all_waves_cleared(),
            placement_preview: state.placement_preview,
            elapsed: state.elapsed,
        }
    }
}

impl GameState {
    /// Capture a presentation snapshot of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally supplied, clamped time deltas only
//! - Seeded RNG only
//! - Stable iteration order (enemies by id, towers by placement)
//! - No rendering or platform dependencies

pub mod combat;
pub mod economy;
pub mod enemies;
pub mod error;
pub mod geometry;
pub mod path;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod waves;

pub use combat::{advance_projectiles, advance_towers, find_target, launch_projectile};
pub use economy::{
    PATH_CLEARANCE, TOWER_SPACING, can_place_tower, place_tower, preview_placement, tower_at,
    upgrade_tower,
};
pub use enemies::advance_enemies;
pub use error::SetupError;
pub use geometry::{direction, distance_point_to_segment};
pub use path::Path;
pub use snapshot::{EconomyView, EnemyView, ProjectileView, Snapshot, TowerView};
pub use state::{
    Enemy, EnemyId, GameEvent, GameState, PlacementPreview, Projectile, Tint, Tower, Wave,
    WavePhase,
};
pub use tick::{TickInput, clamp_dt, tick, tick_with_limit};
pub use waves::advance_waves;

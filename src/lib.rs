//! Celestial Bloom - A path-based tower defense game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (path, waves, towers, projectiles, economy)
//! - `settings`: Runtime configuration for the driver loop
//!
//! Rendering, input polling and windowing live outside this crate. The
//! simulation consumes [`sim::TickInput`] events and time deltas and exposes a
//! [`sim::Snapshot`] for whoever draws it.

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameState, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation will integrate in one tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1024.0;
    pub const PLAYFIELD_HEIGHT: f32 = 768.0;

    /// Width of the enemy road
    pub const PATH_WIDTH: f32 = 52.0;
    /// Tower footprint radius (placement clearance and upgrade pick radius)
    pub const TOWER_RADIUS: f32 = 28.0;
    /// Enemy body radius, doubles as the projectile hit radius
    pub const ENEMY_RADIUS: f32 = 18.0;
    /// Towers may nestle this far into the road margin
    pub const PATH_OVERLAP_ALLOWANCE: f32 = 6.0;
    /// Minimum tower spacing, in footprint radii
    pub const TOWER_SPACING_FACTOR: f32 = 2.1;

    /// Economy
    pub const TOWER_COST: u32 = 80;
    pub const UPGRADE_COST: u32 = 120;
    pub const STARTING_GOLD: u32 = 180;
    pub const STARTING_LIVES: u32 = 20;
    /// Score granted per gold of bounty
    pub const SCORE_PER_REWARD: u64 = 3;

    /// Tower defaults
    pub const TOWER_BASE_RANGE: f32 = 200.0;
    pub const TOWER_BASE_COOLDOWN: f32 = 0.55;
    /// Range gained per upgrade
    pub const UPGRADE_RANGE_STEP: f32 = 24.0;
    /// Cooldown multiplier per upgrade (< 1 = faster firing)
    pub const UPGRADE_COOLDOWN_FACTOR: f32 = 0.88;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 420.0;
    /// Upper bound (exclusive) of the random speed bonus per shot
    pub const PROJECTILE_SPEED_JITTER: f32 = 80.0;
    pub const PROJECTILE_BASE_DAMAGE: f32 = 25.0;
    pub const PROJECTILE_DAMAGE_PER_LEVEL: f32 = 12.0;
    /// Projectiles further than this outside the playfield are culled
    pub const PROJECTILE_CULL_MARGIN: f32 = 60.0;
}

//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned [`GameState`]; each
//! phase of a tick borrows it mutably in turn.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::path::Path;
use crate::consts::*;

/// Stable enemy identifier, allocated in increasing order
pub type EnemyId = u32;

/// RGBA colour handed through to presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

const PLACEMENT_PALETTE: [Tint; 6] = [
    Tint::rgb(120, 220, 255),
    Tint::rgb(254, 174, 120),
    Tint::rgb(186, 120, 255),
    Tint::rgb(140, 255, 170),
    Tint::rgb(255, 120, 200),
    Tint::rgb(255, 236, 120),
];

const UPGRADE_PALETTE: [Tint; 4] = [
    Tint::rgb(252, 208, 35),
    Tint::rgb(96, 217, 231),
    Tint::rgb(180, 120, 255),
    Tint::rgb(255, 108, 181),
];

impl Tint {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Tint of a freshly placed tower, cycling by placement order
    pub fn for_new_tower(index: usize) -> Self {
        PLACEMENT_PALETTE[index % PLACEMENT_PALETTE.len()]
    }

    /// Tint of a tower after an upgrade to `level`
    pub fn for_tower_level(level: u32) -> Self {
        let slot = level.saturating_sub(1) as usize % UPGRADE_PALETTE.len();
        UPGRADE_PALETTE[slot]
    }

    /// Tint of a projectile fired by a tower of `level`
    pub fn for_projectile(level: u32) -> Self {
        let green = (170 + 15 * level.min(u8::MAX as u32)).min(u8::MAX as u32) as u8;
        Self {
            r: 255,
            g: green,
            b: 140,
            a: 230,
        }
    }
}

/// An enemy walking the path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    /// Arclength travelled along the path
    pub progress: f32,
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    /// Gold granted on kill
    pub reward: u32,
    /// Cleared on leak or kill; the entity is purged at end of tick
    pub alive: bool,
    /// Cached from `progress`
    pub pos: Vec2,
}

impl Enemy {
    /// Remaining health in [0, 1]
    pub fn health_ratio(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// A player-placed tower. Never moves, never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub pos: Vec2,
    pub range: f32,
    /// Seconds between shots
    pub cooldown: f32,
    /// Counts down to the next allowed shot
    pub fire_timer: f32,
    pub level: u32,
    pub tint: Tint,
}

impl Tower {
    pub fn new(pos: Vec2, tint: Tint) -> Self {
        Self {
            pos,
            range: TOWER_BASE_RANGE,
            cooldown: TOWER_BASE_COOLDOWN,
            fire_timer: 0.0,
            level: 1,
            tint,
        }
    }

    /// Damage carried by each projectile this tower fires
    #[inline]
    pub fn damage(&self) -> f32 {
        PROJECTILE_BASE_DAMAGE + self.level as f32 * PROJECTILE_DAMAGE_PER_LEVEL
    }

    /// Apply one upgrade level: longer range, faster firing, new tint
    pub fn upgrade(&mut self) {
        self.level += 1;
        self.range += UPGRADE_RANGE_STEP;
        self.cooldown *= UPGRADE_COOLDOWN_FACTOR;
        // A wait left over from the slower cooldown is cut down to the new one,
        // rather than kept as is, so the timer never exceeds `cooldown`
        self.fire_timer = self.fire_timer.min(self.cooldown);
        self.tint = Tint::for_tower_level(self.level);
    }
}

/// A projectile homing on nothing: it flies straight and only damages its recorded target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    /// Weak reference, re-resolved against the enemy list every tick
    pub target: EnemyId,
    pub tint: Tint,
    pub alive: bool,
}

/// Static template for one wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub count: u32,
    /// Seconds between consecutive spawns
    pub spawn_interval: f32,
    pub speed: f32,
    pub health: f32,
    pub reward: u32,
}

impl Wave {
    pub const fn new(
        count: u32,
        spawn_interval: f32,
        speed: f32,
        health: f32,
        reward: u32,
    ) -> Self {
        Self {
            count,
            spawn_interval,
            speed,
            health,
            reward,
        }
    }

    /// The fixed five-wave campaign, ending in a single slow boss
    pub fn standard_table() -> Vec<Wave> {
        vec![
            Wave::new(6, 0.85, 80.0, 80.0, 18),
            Wave::new(8, 0.75, 100.0, 110.0, 22),
            Wave::new(10, 0.65, 110.0, 150.0, 25),
            Wave::new(12, 0.6, 120.0, 190.0, 28),
            Wave::new(1, 0.0, 70.0, 1200.0, 120),
        ]
    }

    fn validate(&self, index: usize) -> Result<(), SetupError> {
        let reason = if !(self.speed > 0.0 && self.speed.is_finite()) {
            "speed must be positive"
        } else if !(self.health > 0.0 && self.health.is_finite()) {
            "health must be positive"
        } else if !(self.spawn_interval >= 0.0 && self.spawn_interval.is_finite()) {
            "spawn interval must be non-negative"
        } else {
            return Ok(());
        };
        Err(SetupError::InvalidWave { index, reason })
    }
}

/// Wave scheduler state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Emitting the enemies of `wave`, one every `spawn_interval`
    Spawning { wave: usize, spawned: u32, timer: f32 },
    /// Every enemy of `wave` is out; waiting for the field to empty
    Draining { wave: usize },
    /// All waves done (terminal)
    Cleared,
}

/// Hover feedback for a prospective tower placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPreview {
    pub position: Vec2,
    /// Geometrically legal, ignoring gold
    pub valid: bool,
    pub affordable: bool,
}

/// Notable things that happened during the last tick (for presentation/audio)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveStarted { wave: usize },
    EnemySpawned { id: EnemyId },
    EnemyLeaked { id: EnemyId },
    EnemyKilled { id: EnemyId, reward: u32 },
    ProjectileFired { tower: usize, target: EnemyId },
    TowerPlaced { tower: usize, pos: Vec2 },
    TowerUpgraded { tower: usize, level: u32 },
    AllWavesCleared,
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Projectile speed jitter source
    pub(crate) rng: Pcg32,
    /// Enemy road (read-only after construction)
    pub path: Path,
    /// Wave table (read-only after construction)
    pub waves: Vec<Wave>,
    pub wave_phase: WavePhase,
    /// Live enemies, in id order
    pub enemies: Vec<Enemy>,
    pub towers: Vec<Tower>,
    pub projectiles: Vec<Projectile>,
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
    /// Seconds simulated since construction
    pub elapsed: f32,
    /// Latest hover feedback, if a cursor was supplied
    pub placement_preview: Option<PlacementPreview>,
    /// Events from the last tick (transient, not persisted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_enemy_id: EnemyId,
}

impl GameState {
    /// Create a new game on the standard path and wave table
    pub fn new(seed: u64) -> Self {
        Self::fresh(Path::standard(), Wave::standard_table(), seed)
    }

    /// Create a game on a custom layout, validating it up front
    pub fn with_layout(path: Path, waves: Vec<Wave>, seed: u64) -> Result<Self, SetupError> {
        if waves.is_empty() {
            return Err(SetupError::EmptyWaveTable);
        }
        for (index, wave) in waves.iter().enumerate() {
            wave.validate(index)?;
        }
        Ok(Self::fresh(path, waves, seed))
    }

    fn fresh(path: Path, waves: Vec<Wave>, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            path,
            waves,
            wave_phase: WavePhase::Spawning {
                wave: 0,
                spawned: 0,
                timer: 0.0,
            },
            enemies: Vec::new(),
            towers: Vec::new(),
            projectiles: Vec::new(),
            gold: STARTING_GOLD,
            lives: STARTING_LIVES,
            score: 0,
            elapsed: 0.0,
            placement_preview: None,
            events: Vec::new(),
            next_enemy_id: 0,
        }
    }

    /// Replace the whole state with a freshly built game on the same layout
    pub fn reset(&mut self) {
        log::info!("Resetting game (seed {})", self.seed);
        *self = Self::fresh(self.path.clone(), self.waves.clone(), self.seed);
    }

    /// Allocate a new enemy ID
    fn next_enemy_id(&mut self) -> EnemyId {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        id
    }

    /// Put a new enemy from `wave` at the start of the path
    pub fn spawn_enemy(&mut self, wave: Wave) -> EnemyId {
        let id = self.next_enemy_id();
        let pos = self.path.position_at(0.0);
        self.enemies.push(Enemy {
            id,
            progress: 0.0,
            speed: wave.speed,
            health: wave.health,
            max_health: wave.health,
            reward: wave.reward,
            alive: true,
            pos,
        });
        self.events.push(GameEvent::EnemySpawned { id });
        id
    }

    /// Index of the wave being played (equals the wave count once cleared)
    pub fn wave_index(&self) -> usize {
        match self.wave_phase {
            WavePhase::Spawning { wave, .. } | WavePhase::Draining { wave } => wave,
            WavePhase::Cleared => self.waves.len(),
        }
    }

    /// 1-based wave number for display, capped at the wave count
    pub fn wave_number(&self) -> usize {
        (self.wave_index() + 1).min(self.waves.len())
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Every wave has been sent and the field is empty
    pub fn all_waves_cleared(&self) -> bool {
        self.wave_phase == WavePhase::Cleared && self.enemies.is_empty()
    }

    /// Drop entities flagged dead during this tick
    pub fn purge_dead(&mut self) {
        self.enemies.retain(|e| e.alive);
        self.projectiles.retain(|p| p.alive);
    }
}

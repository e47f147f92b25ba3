//! Runtime settings for the driver loop
//!
//! Settings steer how the game is driven (seed, frame pacing, scripted
//! placements for the headless runner). They never touch the wave table or
//! the tuning constants.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;

/// Driver settings, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Run seed (projectile speed jitter)
    pub seed: u64,
    /// Largest frame delta integrated in one tick (seconds)
    pub max_frame_dt: f32,

    // === Headless runner ===
    /// Fixed step fed to each tick (seconds)
    pub frame_dt: f32,
    /// Stop after this many frames even if the game is still running
    pub max_frames: u32,
    /// Tower spots to request, in order, as gold allows
    pub autoplace: Vec<(f32, f32)>,
    /// Spend leftover gold upgrading placed towers
    pub auto_upgrade: bool,
    /// Print the final snapshot as JSON on stdout
    pub print_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            max_frame_dt: MAX_FRAME_DT,

            frame_dt: 1.0 / 60.0,
            // Ten simulated minutes
            max_frames: 60 * 60 * 10,
            autoplace: vec![
                (180.0, 240.0),
                (380.0, 260.0),
                (610.0, 250.0),
                (800.0, 440.0),
                (180.0, 80.0),
                (610.0, 420.0),
            ],
            auto_upgrade: true,
            print_snapshot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace nonsensical timing values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            log::warn!(
                "Ignoring max_frame_dt {}, using {}",
                self.max_frame_dt,
                defaults.max_frame_dt
            );
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            log::warn!("Ignoring frame_dt {}, using {}", self.frame_dt, defaults.frame_dt);
            self.frame_dt = defaults.frame_dt;
        }
        self
    }
}

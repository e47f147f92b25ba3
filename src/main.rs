//! Celestial Bloom headless runner
//!
//! Drives the simulation without a window: scripted tower placements, a fixed
//! frame step, and a summary at the end. Useful for balance checks and replay
//! debugging (`RUST_LOG=debug celestial-bloom settings.json`).

#[cfg(not(target_arch = "wasm32"))]
mod runner {
    use std::collections::VecDeque;

    use anyhow::{Context, Result};
    use glam::Vec2;

    use celestial_bloom::Settings;
    use celestial_bloom::consts::{TOWER_COST, UPGRADE_COST};
    use celestial_bloom::sim::{GameEvent, GameState, TickInput, can_place_tower, tick_with_limit};

    /// Running tallies for the end-of-run summary
    #[derive(Debug, Default)]
    struct Tally {
        frames: u32,
        kills: u32,
        leaks: u32,
        shots: u32,
        upgrades: u32,
    }

    impl Tally {
        fn record(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::EnemyKilled { .. } => self.kills += 1,
                    GameEvent::EnemyLeaked { .. } => self.leaks += 1,
                    GameEvent::ProjectileFired { .. } => self.shots += 1,
                    GameEvent::TowerUpgraded { .. } => self.upgrades += 1,
                    _ => {}
                }
            }
        }
    }

    /// Scripted player: builds the queued spots first, then upgrades round-robin
    struct Autopilot {
        pending: VecDeque<Vec2>,
        auto_upgrade: bool,
        next_upgrade: usize,
    }

    impl Autopilot {
        fn new(settings: &Settings) -> Self {
            Self {
                pending: settings
                    .autoplace
                    .iter()
                    .map(|&(x, y)| Vec2::new(x, y))
                    .collect(),
                auto_upgrade: settings.auto_upgrade,
                next_upgrade: 0,
            }
        }

        fn plan(&mut self, state: &GameState) -> TickInput {
            while let Some(&spot) = self.pending.front() {
                if can_place_tower(state, spot) {
                    break;
                }
                log::warn!("Skipping unbuildable spot {spot}");
                self.pending.pop_front();
            }

            if let Some(&spot) = self.pending.front() {
                if state.gold < TOWER_COST {
                    return TickInput::default();
                }
                self.pending.pop_front();
                return TickInput {
                    place: Some(spot),
                    cursor: Some(spot),
                    ..Default::default()
                };
            }

            if self.auto_upgrade && state.gold >= UPGRADE_COST && !state.towers.is_empty() {
                let tower = &state.towers[self.next_upgrade % state.towers.len()];
                self.next_upgrade += 1;
                return TickInput {
                    upgrade: Some(tower.pos),
                    ..Default::default()
                };
            }

            TickInput::default()
        }
    }

    fn load_settings() -> Result<Settings> {
        let Some(path) = std::env::args().nth(1) else {
            log::info!("No settings file given, using defaults");
            return Ok(Settings::default());
        };

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings from {path}"))?;
        Settings::from_json(&json).with_context(|| format!("failed to parse settings in {path}"))
    }

    pub fn run() -> Result<()> {
        let settings = load_settings()?;
        log::info!("Celestial Bloom (headless) starting, seed {}", settings.seed);

        let mut state = GameState::new(settings.seed);
        let mut autopilot = Autopilot::new(&settings);
        let mut tally = Tally::default();

        while tally.frames < settings.max_frames {
            let input = autopilot.plan(&state);
            tick_with_limit(&mut state, &input, settings.frame_dt, settings.max_frame_dt);
            tally.frames += 1;
            tally.record(&state.events);

            if state.is_game_over() || state.all_waves_cleared() {
                break;
            }
        }

        let outcome = if state.is_game_over() {
            "defeat"
        } else if state.all_waves_cleared() {
            "victory"
        } else {
            "unfinished"
        };
        log::info!(
            "Run ended ({outcome}) after {} frames / {:.1}s: wave {}/{}, score {}, gold {}, lives {}",
            tally.frames,
            state.elapsed,
            state.wave_number(),
            state.waves.len(),
            state.score,
            state.gold,
            state.lives
        );
        log::info!(
            "{} towers, {} upgrades, {} shots, {} kills, {} leaks",
            state.towers.len(),
            tally.upgrades,
            tally.shots,
            tally.kills,
            tally.leaks
        );

        if settings.print_snapshot {
            let json = serde_json::to_string_pretty(&state.snapshot())
                .context("failed to serialize final snapshot")?;
            println!("{json}");
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    runner::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is embedded by a web front end; there is no wasm runner
}

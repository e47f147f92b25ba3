//! Wave/spawn scheduler
//!
//! `Spawning` emits one enemy per `spawn_interval` until the wave's count is
//! reached, then `Draining` waits for the field to empty before the next wave
//! starts. Past the last wave the scheduler rests in `Cleared`.

use super::state::{GameEvent, GameState, WavePhase};

/// Advance the scheduler by `dt`, possibly spawning one enemy
pub fn advance_waves(state: &mut GameState, dt: f32) {
    match state.wave_phase {
        WavePhase::Cleared => {}

        WavePhase::Draining { wave } => {
            if state.enemies.is_empty() {
                finish_wave(state, wave);
            }
        }

        WavePhase::Spawning {
            wave,
            mut spawned,
            mut timer,
        } => {
            let template = state.waves[wave];

            // An empty wave has nothing to emit and drains on the same tick
            if template.count == 0 {
                if state.enemies.is_empty() {
                    finish_wave(state, wave);
                } else {
                    state.wave_phase = WavePhase::Draining { wave };
                }
                return;
            }

            if spawned < template.count {
                timer -= dt;
                if timer <= 0.0 {
                    if spawned == 0 {
                        log::info!(
                            "Wave {}/{} started: {} enemies, speed {}, health {}",
                            wave + 1,
                            state.waves.len(),
                            template.count,
                            template.speed,
                            template.health
                        );
                        state.events.push(GameEvent::WaveStarted { wave });
                    }
                    timer = template.spawn_interval;
                    state.spawn_enemy(template);
                    spawned += 1;
                }
            }

            state.wave_phase = if spawned >= template.count {
                WavePhase::Draining { wave }
            } else {
                WavePhase::Spawning {
                    wave,
                    spawned,
                    timer,
                }
            };
        }
    }
}

/// Move past `wave`, either to the next one or to the terminal state
fn finish_wave(state: &mut GameState, wave: usize) {
    let next = wave + 1;
    if next >= state.waves.len() {
        log::info!("All {} waves cleared, score {}", state.waves.len(), state.score);
        state.wave_phase = WavePhase::Cleared;
        state.events.push(GameEvent::AllWavesCleared);
    } else {
        log::debug!("Wave {} drained", wave + 1);
        state.wave_phase = WavePhase::Spawning {
            wave: next,
            spawned: 0,
            timer: 0.0,
        };
    }
}

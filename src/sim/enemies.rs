//! Enemy movement along the path and leak detection

use super::state::{GameEvent, GameState};

/// Advance every living enemy by `speed * dt`
///
/// An enemy reaching the end of the path leaks: it dies, costs one life, and
/// keeps its last on-path position.
pub fn advance_enemies(state: &mut GameState, dt: f32) {
    let total_length = state.path.total_length();

    for enemy in state.enemies.iter_mut().filter(|e| e.alive) {
        enemy.progress += enemy.speed * dt;

        if enemy.progress >= total_length {
            enemy.alive = false;
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::EnemyLeaked { id: enemy.id });
            log::debug!("Enemy {} leaked, {} lives left", enemy.id, state.lives);
            continue;
        }

        enemy.pos = state.path.position_at(enemy.progress);
    }
}

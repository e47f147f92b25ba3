//! Tower targeting/firing and projectile resolution

use glam::Vec2;
use rand::Rng;

use super::geometry::{direction, inside_rect};
use super::state::{Enemy, EnemyId, GameEvent, GameState, Projectile, Tint, Tower};
use crate::consts::*;

/// Pick the living enemy in range that is furthest along the path
///
/// Exact progress ties go to the enemy encountered first, which is the
/// lowest id since enemies are kept in spawn order.
pub fn find_target<'a>(enemies: &'a [Enemy], tower: &Tower) -> Option<&'a Enemy> {
    let mut best: Option<&Enemy> = None;
    for enemy in enemies.iter().filter(|e| e.alive) {
        if tower.pos.distance(enemy.pos) > tower.range {
            continue;
        }
        if best.is_none_or(|b| enemy.progress > b.progress) {
            best = Some(enemy);
        }
    }
    best
}

/// Build the projectile a tower fires at `target_pos`
///
/// Returns `None` when the target sits exactly on the tower, since there is
/// no direction to fire in.
pub fn launch_projectile(
    tower: &Tower,
    target: EnemyId,
    target_pos: Vec2,
    speed: f32,
) -> Option<Projectile> {
    let dir = direction(tower.pos, target_pos)?;
    Some(Projectile {
        pos: tower.pos,
        vel: dir * speed,
        damage: tower.damage(),
        target,
        tint: Tint::for_projectile(tower.level),
        alive: true,
    })
}

/// Count down tower cooldowns and fire at targets where ready
pub fn advance_towers(state: &mut GameState, dt: f32) {
    let GameState {
        towers,
        enemies,
        projectiles,
        rng,
        events,
        ..
    } = state;

    for (index, tower) in towers.iter_mut().enumerate() {
        tower.fire_timer = (tower.fire_timer - dt).max(0.0);
        if tower.fire_timer > 0.0 {
            continue;
        }

        // No target: stay ready and retry next tick
        let Some(target) = find_target(enemies, tower) else {
            continue;
        };

        tower.fire_timer = tower.cooldown;
        let speed = PROJECTILE_SPEED + rng.random::<f32>() * PROJECTILE_SPEED_JITTER;
        if let Some(projectile) = launch_projectile(tower, target.id, target.pos, speed) {
            log::trace!("Tower {} fired at enemy {}", index, target.id);
            events.push(GameEvent::ProjectileFired {
                tower: index,
                target: target.id,
            });
            projectiles.push(projectile);
        }
    }
}

/// Move projectiles, resolve hits on their targets, and cull strays
pub fn advance_projectiles(state: &mut GameState, dt: f32) {
    let GameState {
        projectiles,
        enemies,
        gold,
        score,
        events,
        ..
    } = state;

    let min = Vec2::splat(-PROJECTILE_CULL_MARGIN);
    let max = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) + PROJECTILE_CULL_MARGIN;

    for projectile in projectiles.iter_mut().filter(|p| p.alive) {
        projectile.pos += projectile.vel * dt;

        // A dead or missing target just means the shot keeps flying
        let hit = enemies
            .iter_mut()
            .find(|e| e.alive && e.id == projectile.target)
            .filter(|e| projectile.pos.distance(e.pos) <= ENEMY_RADIUS);

        if let Some(enemy) = hit {
            enemy.health -= projectile.damage;
            if enemy.health <= 0.0 {
                enemy.alive = false;
                *gold = gold.saturating_add(enemy.reward);
                *score += u64::from(enemy.reward) * SCORE_PER_REWARD;
                log::trace!("Enemy {} killed, +{} gold", enemy.id, enemy.reward);
                events.push(GameEvent::EnemyKilled {
                    id: enemy.id,
                    reward: enemy.reward,
                });
            }
            projectile.alive = false;
        }

        if !inside_rect(projectile.pos, min, max) {
            projectile.alive = false;
        }
    }
}

//! Property tests for path geometry and simulation invariants

use std::collections::HashMap;

use celestial_bloom::consts::*;
use celestial_bloom::sim::{
    EnemyId, GameEvent, GameState, Path, Projectile, Tint, TickInput, Wave, advance_projectiles,
    tick,
};
use glam::Vec2;
use proptest::prelude::*;

fn waypoints() -> impl Strategy<Value = Vec<Vec2>> {
    prop::collection::vec((0.0f32..1000.0, 0.0f32..1000.0), 2..8)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| Vec2::new(x, y)).collect())
}

#[derive(Debug, Clone)]
enum Action {
    Frame(f32),
    Place(f32, f32),
    Upgrade(f32, f32),
    Cursor(f32, f32),
}

fn playfield_point() -> impl Strategy<Value = (f32, f32)> {
    (0.0f32..PLAYFIELD_WIDTH, 0.0f32..PLAYFIELD_HEIGHT)
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0.0f32..0.25).prop_map(Action::Frame),
        2 => playfield_point().prop_map(|(x, y)| Action::Place(x, y)),
        1 => playfield_point().prop_map(|(x, y)| Action::Upgrade(x, y)),
        1 => (-50.0f32..1100.0, -50.0f32..800.0).prop_map(|(x, y)| Action::Cursor(x, y)),
    ]
}

fn input_for(action: &Action) -> (TickInput, f32) {
    match *action {
        Action::Frame(dt) => (TickInput::default(), dt),
        Action::Place(x, y) => (
            TickInput {
                place: Some(Vec2::new(x, y)),
                ..Default::default()
            },
            1.0 / 60.0,
        ),
        Action::Upgrade(x, y) => (
            TickInput {
                upgrade: Some(Vec2::new(x, y)),
                ..Default::default()
            },
            1.0 / 60.0,
        ),
        Action::Cursor(x, y) => (
            TickInput {
                cursor: Some(Vec2::new(x, y)),
                ..Default::default()
            },
            1.0 / 60.0,
        ),
    }
}

proptest! {
    #[test]
    fn position_lies_on_path(points in waypoints(), t in 0.0f32..=1.0) {
        let path = Path::new(points).unwrap();
        let a = t * path.total_length();
        let p = path.position_at(a);
        prop_assert!(p.is_finite());
        prop_assert!(path.distance_to(p) < 0.05, "{p} is {} off the path", path.distance_to(p));
    }

    #[test]
    fn segment_boundaries_hit_waypoints(points in waypoints()) {
        let path = Path::new(points).unwrap();
        let mut travelled = 0.0;
        for (i, len) in path.segment_lengths().iter().enumerate() {
            travelled += len;
            let p = path.position_at(travelled);
            prop_assert!(p.distance(path.waypoints()[i + 1]) < 0.05);
        }
        let last = *path.waypoints().last().unwrap();
        prop_assert_eq!(path.position_at(path.total_length() + 1.0), last);
    }

    #[test]
    fn position_is_pure(points in waypoints(), t in 0.0f32..=1.0) {
        let path = Path::new(points).unwrap();
        let a = t * path.total_length();
        prop_assert_eq!(path.position_at(a), path.position_at(a));
    }

    #[test]
    fn economy_and_progress_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut state = GameState::new(seed);
        let mut progress: HashMap<EnemyId, f32> = HashMap::new();
        let mut ledger: i64 = i64::from(STARTING_GOLD);
        let mut last_score = 0;
        let mut last_lives = state.lives;

        for action in &actions {
            let (input, dt) = input_for(action);
            tick(&mut state, &input, dt);

            for event in &state.events {
                match event {
                    GameEvent::TowerPlaced { .. } => ledger -= i64::from(TOWER_COST),
                    GameEvent::TowerUpgraded { .. } => ledger -= i64::from(UPGRADE_COST),
                    GameEvent::EnemyKilled { reward, .. } => ledger += i64::from(*reward),
                    _ => {}
                }
            }
            prop_assert_eq!(i64::from(state.gold), ledger);
            prop_assert!(state.lives <= last_lives);
            prop_assert!(state.score >= last_score);
            last_lives = state.lives;
            last_score = state.score;

            for enemy in &state.enemies {
                prop_assert!(enemy.alive, "dead enemies are purged at end of tick");
                prop_assert!(enemy.health <= enemy.max_health);
                if let Some(&before) = progress.get(&enemy.id) {
                    prop_assert!(enemy.progress >= before);
                }
                progress.insert(enemy.id, enemy.progress);
            }
            for tower in &state.towers {
                prop_assert!(tower.fire_timer >= 0.0 && tower.fire_timer <= tower.cooldown);
            }
        }
    }

    #[test]
    fn kill_round_trip(reward in 1u32..1000, health in 1.0f32..500.0) {
        let mut state = GameState::new(1);
        let id = state.spawn_enemy(Wave::new(1, 0.0, 10.0, health, reward));
        let (gold, score) = (state.gold, state.score);
        let pos = state.enemies[0].pos;
        state.projectiles.push(Projectile {
            pos,
            vel: Vec2::ZERO,
            damage: health,
            target: id,
            tint: Tint::for_projectile(1),
            alive: true,
        });

        advance_projectiles(&mut state, 1.0 / 60.0);
        prop_assert!(!state.enemies[0].alive);
        prop_assert_eq!(state.gold, gold + reward);
        prop_assert_eq!(state.score, score + 3 * u64::from(reward));
    }
}

//! Procedural platform generation
//!
//! Each new platform goes above the current highest one, with at most one
//! collectible and at most one enemy attached.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, CollectibleKind, Enemy, GameState, Platform};

/// Place the fixed first platform plus the configured number of random ones
pub fn seed_world(state: &mut GameState, now_ms: u64) {
    let t = &state.tuning;
    let first = Platform::new(
        Vec2::new(
            t.width / 2.0 - t.platform_width / 2.0,
            t.height - t.first_platform_offset,
        ),
        t,
    );
    state.platforms.push(first);

    for _ in 0..state.tuning.initial_platforms {
        spawn_platform(state, now_ms);
    }
}

/// Append one platform above the highest, rolling for attachments
pub fn spawn_platform(state: &mut GameState, now_ms: u64) {
    let GameState {
        tuning: t,
        rng,
        platforms,
        collectibles,
        enemies,
        ..
    } = state;

    let x = rng.random::<f32>() * (t.width - t.platform_width);
    let y = match platforms.last() {
        Some(last) => {
            last.pos.y - t.platform_spacing_min - rng.random::<f32>() * t.platform_spacing_variance
        }
        None => t.height - t.fallback_platform_offset,
    };
    platforms.push(Platform::new(Vec2::new(x, y), t));

    let item_pos = Vec2::new(
        x + t.platform_width / 2.0 - t.collectible_size / 2.0,
        y - t.collectible_lift,
    );
    // Extra life is only rolled when no shield spawned
    let kind = if rng.random::<f32>() < t.shield_spawn_chance {
        Some(CollectibleKind::Shield)
    } else if rng.random::<f32>() < t.extra_life_spawn_chance {
        Some(CollectibleKind::ExtraLife)
    } else {
        None
    };
    if let Some(kind) = kind {
        log::debug!("Spawned {:?} at ({:.0}, {:.0})", kind, item_pos.x, item_pos.y);
        collectibles.push(Collectible::new(item_pos, kind, t));
    }

    if rng.random::<f32>() < t.enemy_spawn_chance {
        let enemy_x = rng.random::<f32>() * (t.width - t.enemy_width);
        let enemy_pos = Vec2::new(enemy_x, y - t.enemy_lift);
        log::debug!("Spawned enemy at ({:.0}, {:.0})", enemy_pos.x, enemy_pos.y);
        enemies.push(Enemy::new(enemy_pos, now_ms, t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skins::SkinId;
    use crate::tuning::Tuning;

    fn fresh(tuning: Tuning, seed: u64) -> GameState {
        GameState::new(tuning, seed, SkinId::default())
    }

    #[test]
    fn test_first_platform_is_fixed() {
        for seed in [1, 2, 3] {
            let mut state = fresh(Tuning::default(), seed);
            seed_world(&mut state, 0);
            let first = &state.platforms[0];
            assert_eq!(first.pos, Vec2::new(170.0, 550.0));
        }
    }

    #[test]
    fn test_initial_count() {
        let mut state = fresh(Tuning::default(), 7);
        seed_world(&mut state, 0);
        assert_eq!(state.platforms.len(), 1 + state.tuning.initial_platforms as usize);
    }

    #[test]
    fn test_spacing_and_horizontal_range() {
        let mut state = fresh(Tuning::default(), 99);
        seed_world(&mut state, 0);
        for _ in 0..200 {
            spawn_platform(&mut state, 0);
        }
        let t = &state.tuning;
        for pair in state.platforms.windows(2) {
            let gap = pair[0].pos.y - pair[1].pos.y;
            // f32 precision degrades far above the start
            assert!(gap >= t.platform_spacing_min - 0.01);
            assert!(gap <= t.platform_spacing_min + t.platform_spacing_variance + 0.01);
        }
        for platform in &state.platforms {
            assert!(platform.pos.x >= 0.0);
            assert!(platform.pos.x <= t.width - t.platform_width);
        }
    }

    #[test]
    fn test_peaceful_tuning_spawns_nothing_attached() {
        let mut state = fresh(Tuning::peaceful(), 5);
        for _ in 0..100 {
            spawn_platform(&mut state, 0);
        }
        assert!(state.collectibles.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_at_most_one_collectible_per_platform() {
        let tuning = Tuning {
            shield_spawn_chance: 0.5,
            extra_life_spawn_chance: 1.0,
            enemy_spawn_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = fresh(tuning, 11);
        for _ in 0..50 {
            spawn_platform(&mut state, 0);
        }
        assert_eq!(state.collectibles.len(), 50);
        assert_eq!(state.enemies.len(), 50);
        assert!(state.collectibles.iter().any(|c| c.kind == CollectibleKind::Shield));
        assert!(state.collectibles.iter().any(|c| c.kind == CollectibleKind::ExtraLife));
    }

    #[test]
    fn test_attachments_sit_above_platform() {
        let tuning = Tuning {
            shield_spawn_chance: 1.0,
            enemy_spawn_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = fresh(tuning, 3);
        spawn_platform(&mut state, 500);
        let platform = &state.platforms[0];
        let item = &state.collectibles[0];
        let enemy = &state.enemies[0];
        assert_eq!(item.pos.y, platform.pos.y - 30.0);
        assert!((item.rect().center().x - (platform.pos.x + 30.0)).abs() < 1e-4);
        assert_eq!(enemy.pos.y, platform.pos.y - 80.0);
        assert_eq!(enemy.next_shot_ms, 500 + state.tuning.enemy_shoot_interval_ms);
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = fresh(Tuning::default(), 1234);
        let mut b = fresh(Tuning::default(), 1234);
        seed_world(&mut a, 0);
        seed_world(&mut b, 0);
        let ys = |s: &GameState| s.platforms.iter().map(|p| (p.pos.x, p.pos.y)).collect::<Vec<_>>();
        assert_eq!(ys(&a), ys(&b));
        assert_eq!(a.enemies.len(), b.enemies.len());
    }
}

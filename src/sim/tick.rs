//! Per-frame simulation tick
//!
//! Update order: player physics, alive check, collectibles, enemies,
//! projectiles, platforms. Every entity scrolls using the player's velocity
//! as it stands after this tick's gravity and bounce.

use serde::{Deserialize, Serialize};

use super::physics;
use super::scroll::Scroll;
use super::spawn::spawn_platform;
use super::state::{CollectibleKind, GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the session by one tick; does nothing unless running
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    let width = state.tuning.width;
    let height = state.tuning.height;

    if let Some(platform) = physics::step_player(&mut state.player, input, &state.platforms, width)
    {
        state.events.push(GameEvent::Landed { platform });
    }
    state.player.refresh_invincibility(now_ms);

    if !state.player.is_alive(height) {
        log::debug!("Player fell out at y={:.1}", state.player.pos.y);
        state.end_session();
        return;
    }

    update_collectibles(state, now_ms);
    update_enemies(state, now_ms);
    if !state.is_running() {
        return;
    }
    update_projectiles(state, now_ms);
    if !state.is_running() {
        return;
    }
    update_platforms(state, now_ms);
}

fn update_collectibles(state: &mut GameState, now_ms: u64) {
    let band_y = state.tuning.band_y();
    let height = state.tuning.height;
    let mut picked = Vec::new();

    state.collectibles.retain_mut(|item| {
        item.scroll_with(&state.player, band_y);
        if item.touches(&state.player) {
            item.collected = true;
            picked.push(item.kind);
            return false;
        }
        !item.is_off_screen(height)
    });

    for kind in picked {
        apply_pickup(state, kind, now_ms);
    }
}

/// Apply a collectible's effect to the session
pub fn apply_pickup(state: &mut GameState, kind: CollectibleKind, now_ms: u64) {
    log::debug!("Picked up {:?}", kind);
    match kind {
        CollectibleKind::Shield => {
            let duration = state.tuning.shield_duration_ms;
            state.player.activate_shield(now_ms, duration);
        }
        CollectibleKind::ExtraLife => state.gain_life(),
    }
    state.events.push(GameEvent::Collected(kind));
}

fn update_enemies(state: &mut GameState, now_ms: u64) {
    let t = &state.tuning;
    let band_y = t.band_y();
    let vulnerable = !state.player.is_invincible(now_ms);
    let player_rect = state.player.rect();
    let mut fired = Vec::new();
    let mut hits = 0u32;

    state.enemies.retain_mut(|enemy| {
        enemy.patrol(t.width);
        enemy.scroll_with(&state.player, band_y);

        if enemy.try_shoot(now_ms, t.enemy_shoot_interval_ms) {
            fired.push(enemy.shoot_at(&state.player, t));
        }

        if vulnerable && enemy.rect().overlaps(&player_rect) {
            hits += 1;
            return false;
        }
        !enemy.is_off_screen(t.height, t.enemy_cull_margin)
    });

    for shot in fired {
        state.projectiles.push(shot);
        state.events.push(GameEvent::ProjectileFired);
    }
    for _ in 0..hits {
        state.lose_life();
    }
}

fn update_projectiles(state: &mut GameState, now_ms: u64) {
    let t = &state.tuning;
    let band_y = t.band_y();
    let vulnerable = !state.player.is_invincible(now_ms);
    let player_rect = state.player.rect();
    let mut hits = 0u32;

    state.projectiles.retain_mut(|shot| {
        shot.advance();
        shot.scroll_with(&state.player, band_y);

        if vulnerable && shot.rect().overlaps(&player_rect) {
            hits += 1;
            return false;
        }
        !shot.is_off_screen(t.width, t.height)
    });

    for _ in 0..hits {
        state.lose_life();
    }
}

/// Scroll platforms, cull the ones below the screen, credit and replace them
///
/// Replacements are appended after the cull so they are not revisited this tick.
fn update_platforms(state: &mut GameState, now_ms: u64) {
    let band_y = state.tuning.band_y();
    let height = state.tuning.height;

    for platform in &mut state.platforms {
        platform.scroll_with(&state.player, band_y);
    }

    let before = state.platforms.len();
    state.platforms.retain(|p| !p.is_off_screen(height));
    let removed = before - state.platforms.len();

    for _ in 0..removed {
        state.add_score(state.tuning.points_per_platform);
        spawn_platform(state, now_ms);
    }
}

/// Demo-mode steering: track the platform the player is about to fall onto
pub fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player;
    let center_x = player.center().x;

    let target = state
        .platforms
        .iter()
        .filter(|p| p.pos.y >= player.bottom())
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|p| p.rect().center().x);

    match target {
        Some(x) if x < center_x - player.move_speed => TickInput {
            move_left: true,
            move_right: false,
        },
        Some(x) if x > center_x + player.move_speed => TickInput {
            move_left: false,
            move_right: true,
        },
        _ => TickInput::default(),
    }
}

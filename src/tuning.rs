//! Data-driven game balance
//!
//! Every gameplay constant lives here so a session can be tuned from JSON
//! without touching the simulation code. Missing fields take the defaults
//! from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Visible area ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub move_speed: f32,
    pub max_height: f32,
    pub player_start_offset: f32,
    /// Band boundary as a fraction of `height`
    pub scroll_band: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_spacing_min: f32,
    pub platform_spacing_variance: f32,
    pub initial_platforms: u32,
    pub first_platform_offset: f32,
    pub fallback_platform_offset: f32,

    // === Scoring ===
    pub points_per_platform: u64,
    pub initial_lives: u32,

    // === Collectibles ===
    pub collectible_size: f32,
    pub collectible_lift: f32,
    pub shield_spawn_chance: f32,
    pub shield_duration_ms: u64,
    pub extra_life_spawn_chance: f32,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_move_speed: f32,
    pub enemy_shoot_interval_ms: u64,
    pub enemy_spawn_chance: f32,
    pub enemy_lift: f32,
    pub enemy_cull_margin: f32,

    // === Projectiles ===
    pub projectile_size: f32,
    pub projectile_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            move_speed: MOVE_SPEED,
            max_height: MAX_HEIGHT,
            player_start_offset: PLAYER_START_OFFSET,
            scroll_band: SCROLL_BAND,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_spacing_min: PLATFORM_SPACING_MIN,
            platform_spacing_variance: PLATFORM_SPACING_VARIANCE,
            initial_platforms: INITIAL_PLATFORMS,
            first_platform_offset: FIRST_PLATFORM_OFFSET,
            fallback_platform_offset: FALLBACK_PLATFORM_OFFSET,

            points_per_platform: POINTS_PER_PLATFORM,
            initial_lives: INITIAL_LIVES,

            collectible_size: COLLECTIBLE_SIZE,
            collectible_lift: COLLECTIBLE_LIFT,
            shield_spawn_chance: SHIELD_SPAWN_CHANCE,
            shield_duration_ms: SHIELD_DURATION_MS,
            extra_life_spawn_chance: EXTRA_LIFE_SPAWN_CHANCE,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_move_speed: ENEMY_MOVE_SPEED,
            enemy_shoot_interval_ms: ENEMY_SHOOT_INTERVAL_MS,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,
            enemy_lift: ENEMY_LIFT,
            enemy_cull_margin: ENEMY_CULL_MARGIN,

            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
        }
    }
}

impl Tuning {
    /// World-space y of the scroll band boundary
    #[inline]
    pub fn band_y(&self) -> f32 {
        self.height * self.scroll_band
    }

    /// Tuning with no random attachments (no collectibles, no enemies)
    pub fn peaceful() -> Self {
        Self {
            shield_spawn_chance: 0.0,
            extra_life_spawn_chance: 0.0,
            enemy_spawn_chance: 0.0,
            ..Self::default()
        }
    }
}

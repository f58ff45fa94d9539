//! Sky Hopper - A vertical platform-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, spawning, collisions)
//! - `game`: Frame driver and start/running/over state machine
//! - `renderer`: Draw-command rendering into colored vertex lists
//! - `platform`: Input abstraction (keyboard + touch)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod skins;
pub mod tuning;

pub use game::{Game, StatusSink};
pub use highscores::HighScores;
pub use settings::Settings;
pub use skins::{Skin, SkinId};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Visible area dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const GRAVITY: f32 = 0.4;
    /// Bounce impulse (negative = upward)
    pub const JUMP_POWER: f32 = -12.0;
    pub const MOVE_SPEED: f32 = 5.0;
    /// Ceiling clamp for the player's y position
    pub const MAX_HEIGHT: f32 = 100.0;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 150.0;
    /// Fraction of the visible height above which a rising player scrolls the world
    pub const SCROLL_BAND: f32 = 0.6;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 12.0;
    pub const PLATFORM_SPACING_MIN: f32 = 70.0;
    pub const PLATFORM_SPACING_VARIANCE: f32 = 30.0;
    pub const INITIAL_PLATFORMS: u32 = 8;
    /// First platform sits this far above the bottom edge
    pub const FIRST_PLATFORM_OFFSET: f32 = 50.0;
    /// Fallback height (above bottom) when no platform exists yet
    pub const FALLBACK_PLATFORM_OFFSET: f32 = 100.0;

    /// Scoring
    pub const POINTS_PER_PLATFORM: u64 = 10;
    pub const INITIAL_LIVES: u32 = 3;

    /// Collectible defaults
    pub const COLLECTIBLE_SIZE: f32 = 25.0;
    pub const COLLECTIBLE_LIFT: f32 = 30.0;
    pub const SHIELD_SPAWN_CHANCE: f32 = 0.1;
    pub const SHIELD_DURATION_MS: u64 = 5000;
    pub const EXTRA_LIFE_SPAWN_CHANCE: f32 = 0.05;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 35.0;
    pub const ENEMY_HEIGHT: f32 = 35.0;
    pub const ENEMY_MOVE_SPEED: f32 = 2.0;
    pub const ENEMY_SHOOT_INTERVAL_MS: u64 = 2000;
    pub const ENEMY_SPAWN_CHANCE: f32 = 0.15;
    pub const ENEMY_LIFT: f32 = 80.0;
    /// Enemies survive this far below the bottom edge before culling
    pub const ENEMY_CULL_MARGIN: f32 = 100.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;
}

/// Axis-aligned rectangle, top-left origin, y down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        a_max.x > other.min.x && self.min.x < b_max.x && a_max.y > other.min.y && self.min.y < b_max.y
    }
}

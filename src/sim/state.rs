//! Game state and core simulation types
//!
//! The session aggregate owns the player and every entity collection;
//! entities never reference each other.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::scroll::Scroll;
use crate::Rect;
use crate::skins::SkinId;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start, waiting for a start request
    Idle,
    /// Active gameplay
    Running,
    /// Session ended; only an explicit restart leaves this phase
    Over,
}

/// Something the outside world may want to hear about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u64),
    LivesChanged(u32),
    Landed { platform: usize },
    Collected(CollectibleKind),
    PlayerHit,
    ProjectileFired,
    GameOver { final_score: u64 },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub gravity: f32,
    /// Bounce impulse (negative = upward)
    pub jump_power: f32,
    pub move_speed: f32,
    /// Ceiling for `pos.y`
    pub max_height: f32,
    pub skin: SkinId,
    /// Last refreshed shield state; see [`Player::is_invincible`]
    pub invincible: bool,
    pub invincible_until_ms: u64,
}

impl Player {
    /// Spawn centered horizontally, `player_start_offset` above the bottom edge
    pub fn new(tuning: &Tuning, skin: SkinId) -> Self {
        Self {
            pos: Vec2::new(
                tuning.width / 2.0 - tuning.player_width / 2.0,
                tuning.height - tuning.player_start_offset,
            ),
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            gravity: tuning.gravity,
            jump_power: tuning.jump_power,
            move_speed: tuning.move_speed,
            max_height: tuning.max_height,
            skin,
            invincible: false,
            invincible_until_ms: 0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Still on screen (has not fallen past the bottom edge)
    #[inline]
    pub fn is_alive(&self, height: f32) -> bool {
        self.pos.y <= height
    }

    /// Arm the shield, replacing any running timer
    pub fn activate_shield(&mut self, now_ms: u64, duration_ms: u64) {
        self.invincible = true;
        self.invincible_until_ms = now_ms.saturating_add(duration_ms);
    }

    /// Shield check against the clock; expiry is never scheduled, only compared
    #[inline]
    pub fn is_invincible(&self, now_ms: u64) -> bool {
        self.invincible && now_ms < self.invincible_until_ms
    }

    /// Drop the shield flag once it has lapsed
    pub fn refresh_invincibility(&mut self, now_ms: u64) {
        if self.invincible && now_ms >= self.invincible_until_ms {
            self.invincible = false;
        }
    }

    pub fn set_skin(&mut self, skin: SkinId) {
        self.skin = skin;
    }
}

/// A static platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: Vec2::new(tuning.platform_width, tuning.platform_height),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_off_screen(&self, height: f32) -> bool {
        self.pos.y > height
    }
}

impl Scroll for Platform {
    fn scroll_pos(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Temporary invincibility
    Shield,
    /// One more life
    ExtraLife,
}

/// A power-up resting above a platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: CollectibleKind,
    pub collected: bool,
}

impl Collectible {
    pub fn new(pos: Vec2, kind: CollectibleKind, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: Vec2::splat(tuning.collectible_size),
            kind,
            collected: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Collected items never collide
    pub fn touches(&self, player: &Player) -> bool {
        !self.collected && self.rect().overlaps(&player.rect())
    }

    pub fn is_off_screen(&self, height: f32) -> bool {
        self.pos.y > height
    }
}

impl Scroll for Collectible {
    fn scroll_pos(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// A patrolling, shooting enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal patrol velocity
    pub vel_x: f32,
    /// Earliest clock reading at which the next shot may fire
    pub next_shot_ms: u64,
}

impl Enemy {
    pub fn new(pos: Vec2, now_ms: u64, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: Vec2::new(tuning.enemy_width, tuning.enemy_height),
            vel_x: tuning.enemy_move_speed,
            next_shot_ms: now_ms.saturating_add(tuning.enemy_shoot_interval_ms),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move horizontally, reversing at the world edges
    pub fn patrol(&mut self, width: f32) {
        self.pos.x += self.vel_x;
        if self.pos.x <= 0.0 || self.pos.x + self.size.x >= width {
            self.vel_x = -self.vel_x;
        }
    }

    /// Returns true (and restarts the cooldown) if the shot interval has elapsed
    pub fn try_shoot(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        if now_ms >= self.next_shot_ms {
            self.next_shot_ms = now_ms.saturating_add(interval_ms);
            true
        } else {
            false
        }
    }

    /// Projectile from this enemy's center, aimed at the player's center
    pub fn shoot_at(&self, player: &Player, tuning: &Tuning) -> Projectile {
        let size = Vec2::splat(tuning.projectile_size);
        let origin = self.pos + self.size * 0.5 - size * 0.5;
        Projectile::aimed(origin, player.center(), size, tuning.projectile_speed)
    }

    /// Enemies above the screen are kept; only those well below are culled
    pub fn is_off_screen(&self, height: f32, margin: f32) -> bool {
        self.pos.y > height + margin
    }
}

impl Scroll for Enemy {
    fn scroll_pos(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// An enemy shot; velocity is fixed at launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    pub fn aimed(pos: Vec2, target: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size,
            vel: (target - pos).normalize_or_zero() * speed,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Off screen past any of the four edges
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.pos.x + self.size.x < 0.0
            || self.pos.x > width
            || self.pos.y + self.size.y < 0.0
            || self.pos.y > height
    }
}

impl Scroll for Projectile {
    fn scroll_pos(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Gameplay balance for this session
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Ordered bottom to top; the last platform is the highest
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle state; call [`GameState::begin_session`] to play
    pub fn new(tuning: Tuning, seed: u64, skin: SkinId) -> Self {
        let player = Player::new(&tuning, skin);
        Self {
            lives: tuning.initial_lives,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            player,
            platforms: Vec::new(),
            collectibles: Vec::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Reset everything session-scoped and populate the starting world
    pub fn begin_session(&mut self, now_ms: u64) {
        let skin = self.player.skin;
        self.player = Player::new(&self.tuning, skin);
        self.platforms.clear();
        self.collectibles.clear();
        self.enemies.clear();
        self.projectiles.clear();
        self.events.clear();
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;

        super::spawn::seed_world(self, now_ms);

        self.events.push(GameEvent::ScoreChanged(self.score));
        self.events.push(GameEvent::LivesChanged(self.lives));
        log::info!(
            "Session started: {} platforms, {} lives",
            self.platforms.len(),
            self.lives
        );
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn add_score(&mut self, points: u64) {
        self.score += points;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    pub fn gain_life(&mut self) {
        self.lives += 1;
        self.events.push(GameEvent::LivesChanged(self.lives));
    }

    /// Take one life; ends the session when none remain
    pub fn lose_life(&mut self) {
        if !self.is_running() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::PlayerHit);
        self.events.push(GameEvent::LivesChanged(self.lives));
        if self.lives == 0 {
            self.end_session();
        }
    }

    /// Transition to `Over` (at most once per session)
    pub fn end_session(&mut self) {
        if !self.is_running() {
            return;
        }
        self.phase = GamePhase::Over;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!(
            "Session over: score {} after {} ticks",
            self.score,
            self.time_ticks
        );
    }

    /// Take the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_position() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning, SkinId::default());
        assert_eq!(player.pos, Vec2::new(180.0, 450.0));
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_shield_lapses_exactly_at_expiry() {
        let mut player = Player::new(&Tuning::default(), SkinId::default());
        player.activate_shield(1_000, 5_000);
        assert!(player.is_invincible(1_000));
        assert!(player.is_invincible(5_999));
        assert!(!player.is_invincible(6_000));

        player.refresh_invincibility(5_999);
        assert!(player.invincible);
        player.refresh_invincibility(6_000);
        assert!(!player.invincible);
    }

    #[test]
    fn test_shield_pickup_overwrites_timer() {
        let mut player = Player::new(&Tuning::default(), SkinId::default());
        player.activate_shield(0, 5_000);
        player.activate_shield(4_000, 5_000);
        assert!(player.is_invincible(8_999));
    }

    #[test]
    fn test_enemy_patrol_reverses_at_edges() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(Vec2::new(tuning.width - tuning.enemy_width - 1.0, 0.0), 0, &tuning);
        enemy.patrol(tuning.width);
        assert!(enemy.vel_x < 0.0);

        let mut enemy = Enemy::new(Vec2::new(1.0, 0.0), 0, &tuning);
        enemy.vel_x = -tuning.enemy_move_speed;
        enemy.patrol(tuning.width);
        assert!(enemy.vel_x > 0.0);
    }

    #[test]
    fn test_enemy_shoot_cooldown() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(Vec2::ZERO, 0, &tuning);
        assert!(!enemy.try_shoot(1_999, tuning.enemy_shoot_interval_ms));
        assert!(enemy.try_shoot(2_000, tuning.enemy_shoot_interval_ms));
        assert!(!enemy.try_shoot(2_001, tuning.enemy_shoot_interval_ms));
        assert!(enemy.try_shoot(4_000, tuning.enemy_shoot_interval_ms));
    }

    #[test]
    fn test_projectile_aims_at_player_center() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, SkinId::default());
        player.pos = Vec2::new(200.0, 400.0);
        let enemy = Enemy::new(Vec2::new(200.0, 100.0), 0, &tuning);

        let shot = enemy.shoot_at(&player, &tuning);
        assert!((shot.vel.length() - tuning.projectile_speed).abs() < 0.001);
        assert!(shot.vel.y > 0.0);

        // Moving the player afterwards does not re-aim the shot
        let vel = shot.vel;
        player.pos.x = 0.0;
        let mut shot = shot;
        shot.advance();
        assert_eq!(shot.vel, vel);
    }

    #[test]
    fn test_culling_margins_differ_by_kind() {
        let tuning = Tuning::default();
        let h = tuning.height;

        let enemy = Enemy::new(Vec2::new(0.0, h + 50.0), 0, &tuning);
        assert!(!enemy.is_off_screen(h, tuning.enemy_cull_margin));
        let enemy = Enemy::new(Vec2::new(0.0, -5_000.0), 0, &tuning);
        assert!(!enemy.is_off_screen(h, tuning.enemy_cull_margin));

        let platform = Platform::new(Vec2::new(0.0, h + 1.0), &tuning);
        assert!(platform.is_off_screen(h));

        let item = Collectible::new(Vec2::new(0.0, h), CollectibleKind::Shield, &tuning);
        assert!(!item.is_off_screen(h));
        let item = Collectible::new(Vec2::new(0.0, h + 1.0), CollectibleKind::Shield, &tuning);
        assert!(item.is_off_screen(h));
        let item = Collectible::new(Vec2::new(0.0, -500.0), CollectibleKind::ExtraLife, &tuning);
        assert!(!item.is_off_screen(h));
    }

    #[test]
    fn test_projectile_culled_past_each_edge() {
        let tuning = Tuning::default();
        let (w, h) = (tuning.width, tuning.height);
        let shot = |x: f32, y: f32| {
            Projectile::aimed(Vec2::new(x, y), Vec2::ZERO, Vec2::splat(10.0), 1.0)
        };

        assert!(!shot(w / 2.0, h / 2.0).is_off_screen(w, h));
        // Partly visible at each edge
        assert!(!shot(-9.0, 10.0).is_off_screen(w, h));
        assert!(!shot(w, 10.0).is_off_screen(w, h));
        assert!(!shot(10.0, -9.0).is_off_screen(w, h));
        assert!(!shot(10.0, h).is_off_screen(w, h));

        assert!(shot(-11.0, 10.0).is_off_screen(w, h));
        assert!(shot(w + 1.0, 10.0).is_off_screen(w, h));
        assert!(shot(10.0, -20.0).is_off_screen(w, h));
        assert!(shot(10.0, h + 1.0).is_off_screen(w, h));
    }

    #[test]
    fn test_lose_life_ends_session_once() {
        let mut state = GameState::new(Tuning::peaceful(), 1, SkinId::default());
        state.begin_session(0);
        state.drain_events();

        for _ in 0..5 {
            state.lose_life();
        }
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Over);
        let game_overs = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Time only through the injected clock reading
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod physics;
pub mod scroll;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::{landing_platform, lands_on};
pub use scroll::{Scroll, scroll_offset};
pub use spawn::{seed_world, spawn_platform};
pub use state::{
    Collectible, CollectibleKind, Enemy, GameEvent, GamePhase, GameState, Platform, Player,
    Projectile,
};
pub use tick::{TickInput, apply_pickup, autopilot, tick};

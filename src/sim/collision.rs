//! Collision detection for axis-aligned boxes
//!
//! Platforms are one-way: they only catch a falling player whose bottom
//! edge is inside the platform's thickness.

use super::state::{Platform, Player};

/// Whether the player would land on this platform right now
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    if player.vel.y <= 0.0 {
        return false;
    }
    let p = player.rect();
    let q = platform.rect();
    let bottom = player.bottom();

    p.max().x > q.min.x && p.min.x < q.max().x && bottom > q.min.y && bottom < q.max().y
}

/// Index of the platform the falling player lands on, if any
///
/// When several qualify the highest one (smallest y) wins; ties keep the
/// earliest in collection order.
pub fn landing_platform(player: &Player, platforms: &[Platform]) -> Option<usize> {
    if player.vel.y <= 0.0 {
        return None;
    }
    platforms
        .iter()
        .enumerate()
        .filter(|(_, platform)| lands_on(player, platform))
        .min_by(|(_, a), (_, b)| a.pos.y.total_cmp(&b.pos.y))
        .map(|(i, _)| i)
}

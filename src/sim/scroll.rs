//! World scrolling
//!
//! The camera never moves. While the player is above the band and rising,
//! every other entity moves down by the distance the player rose.

use glam::Vec2;

use super::state::Player;

/// Vertical shift to apply this tick (0 when the world holds still)
#[inline]
pub fn scroll_offset(player: &Player, band_y: f32) -> f32 {
    if player.pos.y < band_y && player.vel.y < 0.0 {
        -player.vel.y
    } else {
        0.0
    }
}

/// Anything that rides the scrolling world
pub trait Scroll {
    fn scroll_pos(&mut self) -> &mut Vec2;

    /// Shift with the world, reading the player's current position/velocity
    fn scroll_with(&mut self, player: &Player, band_y: f32) {
        self.scroll_pos().y += scroll_offset(player, band_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Platform;
    use crate::skins::SkinId;
    use crate::tuning::Tuning;

    fn player_at(y: f32, vy: f32) -> Player {
        let mut player = Player::new(&Tuning::default(), SkinId::default());
        player.pos.y = y;
        player.vel.y = vy;
        player
    }

    #[test]
    fn test_scrolls_when_rising_above_band() {
        assert_eq!(scroll_offset(&player_at(200.0, -12.0), 360.0), 12.0);
    }

    #[test]
    fn test_holds_when_falling_or_below_band() {
        assert_eq!(scroll_offset(&player_at(200.0, 3.0), 360.0), 0.0);
        assert_eq!(scroll_offset(&player_at(400.0, -12.0), 360.0), 0.0);
        assert_eq!(scroll_offset(&player_at(360.0, -12.0), 360.0), 0.0);
    }

    #[test]
    fn test_entities_shift_identically() {
        let tuning = Tuning::default();
        let player = player_at(150.0, -7.5);
        let mut a = Platform::new(Vec2::new(0.0, 10.0), &tuning);
        let mut b = Platform::new(Vec2::new(50.0, 300.0), &tuning);
        a.scroll_with(&player, tuning.band_y());
        b.scroll_with(&player, tuning.band_y());
        assert_eq!(a.pos.y, 17.5);
        assert_eq!(b.pos.y, 307.5);
        assert_eq!(a.pos.x, 0.0);
    }
}

//! Player physics: gravity, ceiling clamp, horizontal steering with wrap,
//! and the platform bounce impulse.
//!
//! One symplectic-Euler step per tick, no substeps and no delta time.

use super::collision::landing_platform;
use super::state::{Platform, Player};
use super::tick::TickInput;

/// Apply gravity and integrate vertical position, then clamp to the ceiling
///
/// The clamp is position-only; velocity is left alone.
pub fn integrate(player: &mut Player) {
    player.vel.y += player.gravity;
    player.pos.y += player.vel.y;

    if player.pos.y < player.max_height {
        player.pos.y = player.max_height;
    }
}

/// Set horizontal velocity from input and move, wrapping at the world edges
///
/// Left wins when both directions are held.
pub fn steer(player: &mut Player, input: &TickInput, width: f32) {
    player.vel.x = if input.move_left {
        -player.move_speed
    } else if input.move_right {
        player.move_speed
    } else {
        0.0
    };

    player.pos.x += player.vel.x;
    wrap_horizontal(player, width);
}

/// Teleport across the world edges
pub fn wrap_horizontal(player: &mut Player, width: f32) {
    if player.pos.x >= width {
        player.pos.x = -player.size.x;
    } else if player.pos.x < -player.size.x {
        player.pos.x = width;
    }
}

/// Set (not add) the bounce impulse if the falling player lands on a platform
pub fn bounce(player: &mut Player, platforms: &[Platform]) -> Option<usize> {
    let landed = landing_platform(player, platforms)?;
    player.vel.y = player.jump_power;
    Some(landed)
}

/// Full player step for one tick; returns the platform landed on, if any
pub fn step_player(
    player: &mut Player,
    input: &TickInput,
    platforms: &[Platform],
    width: f32,
) -> Option<usize> {
    integrate(player);
    steer(player, input, width);
    bounce(player, platforms)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::skins::SkinId;
    use crate::tuning::Tuning;

    fn player() -> Player {
        Player::new(&Tuning::default(), SkinId::default())
    }

    #[test]
    fn test_gravity_then_position() {
        let mut p = player();
        let y0 = p.pos.y;
        integrate(&mut p);
        assert!((p.vel.y - 0.4).abs() < 1e-6);
        assert!((p.pos.y - (y0 + 0.4)).abs() < 1e-4);
    }

    #[test]
    fn test_ceiling_clamps_position_only() {
        let mut p = player();
        p.pos.y = 105.0;
        p.vel.y = -12.0;
        integrate(&mut p);
        assert_eq!(p.pos.y, 100.0);
        assert!((p.vel.y - (-11.6)).abs() < 1e-5);
    }

    #[test]
    fn test_left_wins_tie() {
        let mut p = player();
        let x0 = p.pos.x;
        let input = TickInput {
            move_left: true,
            move_right: true,
        };
        steer(&mut p, &input, 400.0);
        assert_eq!(p.vel.x, -5.0);
        assert_eq!(p.pos.x, x0 - 5.0);
    }

    #[test]
    fn test_no_input_stops() {
        let mut p = player();
        p.vel.x = 5.0;
        steer(&mut p, &TickInput::default(), 400.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut p = player();
        p.pos.x = 400.0;
        steer(&mut p, &TickInput::default(), 400.0);
        assert_eq!(p.pos.x, -p.size.x);
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut p = player();
        p.pos.x = -p.size.x;
        let input = TickInput {
            move_left: true,
            ..Default::default()
        };
        steer(&mut p, &input, 400.0);
        assert_eq!(p.pos.x, 400.0);
    }

    #[test]
    fn test_bounce_sets_exact_impulse() {
        let tuning = Tuning::default();
        let mut p = player();
        let platform = Platform::new(Vec2::new(p.pos.x, p.bottom() + 2.0), &tuning);
        p.vel.y = 5.0;

        let landed = step_player(&mut p, &TickInput::default(), &[platform], tuning.width);
        assert_eq!(landed, Some(0));
        assert_eq!(p.vel.y, tuning.jump_power);
    }

    proptest! {
        #[test]
        fn prop_wrap_keeps_player_in_span(x in -1000.0f32..1000.0, left in any::<bool>(), right in any::<bool>()) {
            let mut p = player();
            p.pos.x = x.clamp(-p.size.x, 399.0);
            let input = TickInput { move_left: left, move_right: right };
            steer(&mut p, &input, 400.0);
            prop_assert!(p.pos.x >= -p.size.x && p.pos.x <= 400.0);
        }
    }
}

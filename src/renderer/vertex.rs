//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride between vertices in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const PLATFORM: [f32; 4] = [0.3, 0.69, 0.31, 1.0];
    pub const PLATFORM_BORDER: [f32; 4] = [0.18, 0.49, 0.2, 1.0];
    pub const SHIELD: [f32; 4] = [0.2, 0.6, 0.86, 1.0];
    pub const SHIELD_GLOW: [f32; 4] = [0.2, 0.6, 0.86, 0.4];
    pub const EXTRA_LIFE: [f32; 4] = [0.91, 0.3, 0.24, 1.0];
    pub const ENEMY: [f32; 4] = [0.91, 0.3, 0.24, 1.0];
    pub const ENEMY_BORDER: [f32; 4] = [0.75, 0.22, 0.17, 1.0];
    pub const PROJECTILE: [f32; 4] = [0.8, 0.0, 0.0, 1.0];
    pub const PROJECTILE_CORE: [f32; 4] = [1.0, 0.42, 0.42, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TOUCH_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.1];
    pub const PROMPT_SHADE: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const PROMPT_PANEL: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
}

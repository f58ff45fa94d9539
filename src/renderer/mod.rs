//! Rendering module
//!
//! The game hands every visible entity to a [`Renderer`] once per frame.
//! [`VertexRenderer`] tessellates them into colored triangles ready for upload.

pub mod batch;
pub mod shapes;
pub mod vertex;

pub use batch::VertexRenderer;
pub use vertex::Vertex;

use crate::platform::Pointer;
use crate::sim::{Collectible, Enemy, Platform, Player, Projectile};

/// One thing to draw
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    /// Touch-area hints (center divider, held half)
    TouchOverlay { pointer: Option<Pointer> },
    Platform(&'a Platform),
    Collectible(&'a Collectible),
    Enemy(&'a Enemy),
    Projectile(&'a Projectile),
    Player { player: &'a Player, shielded: bool },
    /// "Tap to start" cue outside a running session; text is left to the host
    StartPrompt { final_score: Option<u64> },
}

/// Renderer sink; the core never reads anything back
pub trait Renderer {
    /// Start a frame covering a `width` x `height` surface
    fn begin_frame(&mut self, _width: f32, _height: f32) {}

    fn draw(&mut self, item: Drawable<'_>);

    fn end_frame(&mut self) {}
}

//! CPU tessellation of drawables into one vertex batch per frame

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use super::{Drawable, Renderer};
use crate::platform::Pointer;
use crate::sim::{Collectible, CollectibleKind, Enemy, Platform, Player, Projectile};

const CIRCLE_SEGMENTS: u32 = 16;

/// Collects triangles for the current frame
#[derive(Debug, Default)]
pub struct VertexRenderer {
    vertices: Vec<Vertex>,
    size: Vec2,
    frames: u64,
}

impl VertexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Packed vertex data for a GPU buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn touch_overlay(&mut self, pointer: Option<Pointer>) {
        let half = Vec2::new(self.size.x / 2.0, self.size.y);
        match pointer {
            Some(Pointer::Left) => {
                self.vertices
                    .extend(shapes::rect(Vec2::ZERO, half, colors::TOUCH_HIGHLIGHT));
            }
            Some(Pointer::Right) => {
                self.vertices.extend(shapes::rect(
                    Vec2::new(half.x, 0.0),
                    half,
                    colors::TOUCH_HIGHLIGHT,
                ));
            }
            None => {}
        }
        // Center divider
        self.vertices.extend(shapes::rect(
            Vec2::new(half.x - 0.5, 0.0),
            Vec2::new(1.0, self.size.y),
            colors::TOUCH_HIGHLIGHT,
        ));
    }

    fn platform(&mut self, platform: &Platform) {
        self.vertices
            .extend(shapes::rect(platform.pos, platform.size, colors::PLATFORM));
        self.vertices.extend(shapes::rect_outline(
            platform.pos,
            platform.size,
            2.0,
            colors::PLATFORM_BORDER,
        ));
    }

    fn collectible(&mut self, item: &Collectible) {
        if item.collected {
            return;
        }
        let center = item.rect().center();
        let radius = item.size.x / 2.0;
        let color = match item.kind {
            CollectibleKind::Shield => colors::SHIELD,
            CollectibleKind::ExtraLife => colors::EXTRA_LIFE,
        };
        self.vertices
            .extend(shapes::ring(center, radius, radius * 1.4, colors::SHIELD_GLOW, CIRCLE_SEGMENTS));
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
        self.vertices
            .extend(shapes::circle(center, radius / 4.0, colors::WHITE, CIRCLE_SEGMENTS));
    }

    fn enemy(&mut self, enemy: &Enemy) {
        let p = enemy.pos;
        self.vertices.extend(shapes::rect(p, enemy.size, colors::ENEMY));
        self.vertices
            .extend(shapes::rect_outline(p, enemy.size, 2.0, colors::ENEMY_BORDER));
        for eye_x in [7.0, 20.0] {
            self.vertices.extend(shapes::rect(
                p + Vec2::new(eye_x, 8.0),
                Vec2::splat(8.0),
                colors::WHITE,
            ));
            self.vertices.extend(shapes::rect(
                p + Vec2::new(eye_x + 2.0, 10.0),
                Vec2::splat(4.0),
                colors::BLACK,
            ));
        }
        self.vertices.extend(shapes::rect(
            p + Vec2::new(10.0, 23.0),
            Vec2::new(15.0, 2.0),
            colors::BLACK,
        ));
    }

    fn projectile(&mut self, shot: &Projectile) {
        let center = shot.rect().center();
        let radius = shot.size.x / 2.0;
        self.vertices
            .extend(shapes::circle(center, radius, colors::PROJECTILE, CIRCLE_SEGMENTS));
        self.vertices.extend(shapes::circle(
            center,
            radius / 2.0,
            colors::PROJECTILE_CORE,
            CIRCLE_SEGMENTS,
        ));
    }

    fn player(&mut self, player: &Player, shielded: bool) {
        let skin = player.skin.skin();
        let p = player.pos;

        if shielded {
            let center = player.center();
            let r = player.size.x * 0.75;
            self.vertices
                .extend(shapes::circle(center, r, colors::SHIELD_GLOW, CIRCLE_SEGMENTS * 2));
            self.vertices.extend(shapes::rect_outline(
                p - Vec2::splat(3.0),
                player.size + Vec2::splat(6.0),
                3.0,
                colors::SHIELD,
            ));
        }

        self.vertices.extend(shapes::rect(p, player.size, skin.body));
        for eye_x in [8.0, 22.0] {
            self.vertices.extend(shapes::rect(
                p + Vec2::new(eye_x, 10.0),
                Vec2::splat(10.0),
                skin.eye,
            ));
            self.vertices.extend(shapes::rect(
                p + Vec2::new(eye_x + 4.0, 14.0),
                Vec2::splat(4.0),
                skin.pupil,
            ));
        }
        self.vertices.extend(shapes::rect(
            p + Vec2::new(player.size.x / 2.0 - 8.0, 29.0),
            Vec2::new(16.0, 4.0),
            skin.mouth,
        ));
    }

    /// Dim the world and put a panel in the middle for the host's text
    fn start_prompt(&mut self) {
        self.vertices
            .extend(shapes::rect(Vec2::ZERO, self.size, colors::PROMPT_SHADE));
        let panel = Vec2::new(self.size.x * 0.7, 80.0);
        self.vertices.extend(shapes::rect(
            (self.size - panel) / 2.0,
            panel,
            colors::PROMPT_PANEL,
        ));
    }
}

impl Renderer for VertexRenderer {
    fn begin_frame(&mut self, width: f32, height: f32) {
        self.vertices.clear();
        self.size = Vec2::new(width, height);
    }

    fn draw(&mut self, item: Drawable<'_>) {
        match item {
            Drawable::TouchOverlay { pointer } => self.touch_overlay(pointer),
            Drawable::Platform(platform) => self.platform(platform),
            Drawable::Collectible(item) => self.collectible(item),
            Drawable::Enemy(enemy) => self.enemy(enemy),
            Drawable::Projectile(shot) => self.projectile(shot),
            Drawable::Player { player, shielded } => self.player(player, shielded),
            Drawable::StartPrompt { .. } => self.start_prompt(),
        }
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        log::trace!("Frame {}: {} vertices", self.frames, self.vertices.len());
    }
}

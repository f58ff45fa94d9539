//! Keyboard and touch input
//!
//! Hosts forward raw key and pointer events here; the game only ever asks
//! two questions: is the player steering left, or right?

use std::collections::HashSet;

use crate::sim::TickInput;

/// Source of the two steering signals, read once per tick
pub trait InputSource {
    fn moving_left(&self) -> bool;
    fn moving_right(&self) -> bool;

    /// Active touch/mouse side, for on-screen hints
    fn pointer(&self) -> Option<Pointer> {
        None
    }

    fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.moving_left(),
            move_right: self.moving_right(),
        }
    }
}

impl InputSource for TickInput {
    fn moving_left(&self) -> bool {
        self.move_left
    }

    fn moving_right(&self) -> bool {
        self.move_right
    }
}

/// Which half of the screen a touch or mouse press is held on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Left,
    Right,
}

const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];
const START_KEY: &str = " ";

/// Held keys plus the active pointer, if any
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<String>,
    pointer: Option<Pointer>,
    /// Visible width, used to split the screen into halves
    width: f32,
}

impl InputState {
    pub fn new(width: f32) -> Self {
        Self {
            keys: HashSet::new(),
            pointer: None,
            width,
        }
    }

    /// Record a key press; returns true if it was a start request
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string());
        key == START_KEY
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Touch start or mouse press at `x`; every press is also a start request
    pub fn pointer_down(&mut self, x: f32) -> bool {
        self.pointer_at(x);
        true
    }

    /// Touch/mouse drag to horizontal position `x` (surface-local)
    pub fn pointer_at(&mut self, x: f32) {
        self.pointer = Some(if x < self.width / 2.0 {
            Pointer::Left
        } else {
            Pointer::Right
        });
    }

    /// Touch end, mouse up or mouse leaving the surface
    pub fn pointer_released(&mut self) {
        self.pointer = None;
    }
}

impl InputSource for InputState {
    fn moving_left(&self) -> bool {
        LEFT_KEYS.iter().any(|k| self.keys.contains(*k)) || self.pointer == Some(Pointer::Left)
    }

    fn moving_right(&self) -> bool {
        RIGHT_KEYS.iter().any(|k| self.keys.contains(*k)) || self.pointer == Some(Pointer::Right)
    }

    fn pointer(&self) -> Option<Pointer> {
        self.pointer
    }
}

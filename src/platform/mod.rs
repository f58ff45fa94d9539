//! Platform abstraction layer
//!
//! Handles host differences for input events (keyboard, touch, mouse).

pub mod input;

pub use input::{InputSource, InputState, Pointer};

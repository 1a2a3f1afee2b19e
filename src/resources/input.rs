//! Per-frame pointer input resource.
//!
//! The host engine owns the mouse and the ray caster. Each frame it writes
//! what it saw into [`PointerState`]: whether the interact button is held,
//! which cubie (if any) is under the cursor, where it was hit and with which
//! face normal, and the cursor delta. The gesture system only reads this
//! resource, so the cube logic never talks to a windowing library.
use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};

/// Boolean button state with edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Feed the raw "button down" value for this frame.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// A ray hit on a cubie, in cube space (world units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    /// Entity of the cubie that was hit.
    pub cubie: Entity,
    /// Impact point.
    pub point: Vec3,
    /// Impact normal of the face that was hit.
    pub normal: Vec3,
}

/// Resource capturing the per-frame pointer state relevant to the puzzle.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerState {
    /// The interact button (usually the left mouse button).
    pub interact: BoolState,
    /// Cubie under the cursor this frame.
    pub hit: Option<PointerHit>,
    /// Cursor movement since the last frame, in screen units. Positive `y`
    /// means the cursor moved up.
    pub delta: Vec2,
}

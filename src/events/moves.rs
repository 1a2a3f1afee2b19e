//! Move requests and sequencer events.
//!
//! These events drive the cube state machine. They are handled by the
//! observers in [`crate::systems::moves`], [`crate::systems::scramble`] and
//! [`crate::systems::build`]:
//!
//! - [`RebuildCubeEvent`] – rebuild the cube, optionally with a new size
//! - [`RequestMoveEvent`] – an interactive layer turn
//! - [`ScrambleEvent`] – start a chain of random turns
//! - [`RotationFinishedEvent`] – the pivot tween reached its end

use bevy_ecs::prelude::*;

use crate::components::axis::Axis;

/// Default duration of an interactive turn, in seconds.
pub const DEFAULT_MOVE_SPEED: f32 = 0.4;

/// Duration of a scramble turn, in seconds.
pub const SCRAMBLE_MOVE_SPEED: f32 = 0.25;

/// A single layer turn waiting to be played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// Cubie whose layer turns.
    pub cubie: Entity,
    /// Axis of the turn; also picks the layer.
    pub axis: Axis,
    /// Signed angle in degrees, a multiple of 90.
    pub degrees: f32,
    /// Duration of the animation in seconds.
    pub speed: f32,
}

impl MoveRequest {
    pub fn new(cubie: Entity, axis: Axis, degrees: f32) -> Self {
        MoveRequest {
            cubie,
            axis,
            degrees,
            speed: DEFAULT_MOVE_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
}

/// Request an interactive move. Ignored while the cube is busy.
#[derive(Event, Debug, Clone, Copy)]
pub struct RequestMoveEvent(pub MoveRequest);

/// Start a scramble chain. Ignored while the cube is busy.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleEvent {
    pub steps: i32,
}

/// Rebuild the cube. `Some(size)` changes the size first (clamped).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildCubeEvent {
    pub size: Option<i32>,
}

/// Emitted exactly once when the pivot tween completes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationFinishedEvent {}

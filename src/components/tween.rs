//! Tween data for animated interpolation.
//!
//! - [`TweenRotation`] – animates a layer turn angle (held by the
//!   [`Pivot`](crate::resources::pivot::Pivot))
//! - [`TweenScale`] – animates the [`Scale`](super::scale::Scale) of an entity
//!
//! Both play once with an [`Easing`] curve.
//! See [`crate::systems::tween`] for the update systems.

use crate::components::axis::Axis;
use bevy_ecs::prelude::Component;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts fast, overshoots the target and settles back.
    BackOut,
}

/// Animates a layer turn of `from` to `to` degrees around `axis`.
#[derive(Clone, Debug)]
pub struct TweenRotation {
    /// Axis of the turn.
    pub axis: Axis,
    /// Starting angle in degrees.
    pub from: f32,
    /// Ending angle in degrees.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
}
impl TweenRotation {
    pub fn new(axis: Axis, from: f32, to: f32, duration: f32) -> Self {
        TweenRotation {
            axis,
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Animates an entity's [`Scale`](super::scale::Scale) between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    /// Starting scale.
    pub from: f32,
    /// Ending scale.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
}

impl TweenScale {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

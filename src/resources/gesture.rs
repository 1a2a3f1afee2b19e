//! Drag gesture tracking.
//!
//! [`GestureState`] remembers the first cubie hit of a press and whether the
//! current press is already spent (a turn was started) or is orbiting the
//! camera. It is reset when the interact button is released.

use bevy_ecs::prelude::Resource;

use crate::resources::input::PointerHit;

/// State of the press in progress.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GestureState {
    /// Cleared once a press produced a drag; set again on release.
    pub interaction_enabled: bool,
    /// The press started on empty space and orbits the camera.
    pub camera_moving: bool,
    /// First cubie hit of this press.
    pub clicked: Option<PointerHit>,
}

impl Default for GestureState {
    fn default() -> Self {
        GestureState {
            interaction_enabled: true,
            camera_moving: false,
            clicked: None,
        }
    }
}

impl GestureState {
    /// Forget the current press.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

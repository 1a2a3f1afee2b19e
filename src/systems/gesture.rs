//! Drag gestures on the cube.
//!
//! [`map_gesture`] turns the face a press started on and the direction of
//! the drag into a layer turn. [`gesture_system`] runs every frame, reads
//! the host's [`PointerState`] and either requests a move or orbits the
//! [`CameraRig`].

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::axis::Axis;
use crate::events::moves::{MoveRequest, RequestMoveEvent};
use crate::resources::camerarig::CameraRig;
use crate::resources::cube::Cube;
use crate::resources::cubeconfig::CubeConfig;
use crate::resources::gesture::GestureState;
use crate::resources::input::PointerState;

/// A drag component must exceed this to pick the turn.
pub const DOMINANCE_THRESHOLD: f32 = 0.9;
/// Tolerance when matching a hit normal against the six face normals.
const NORMAL_TOLERANCE: f32 = 1e-4;

/// Map a face normal and a normalized drag direction to a layer turn.
///
/// Returns `None` when the normal is not axis aligned or no drag component
/// is dominant enough.
pub fn map_gesture(normal: Vec3, drag: Vec3) -> Option<(Axis, f32)> {
    let matches = |n: Vec3| normal.abs_diff_eq(n, NORMAL_TOLERANCE);
    let dominant = |c: f32| c.abs() > DOMINANCE_THRESHOLD;
    let turn = |axis: Axis, sign: f32, c: f32| Some((axis, sign * 90.0 * c.signum()));

    if matches(Vec3::Z) {
        if dominant(drag.x) {
            return turn(Axis::Y, -1.0, drag.x);
        }
        if dominant(drag.y) {
            return turn(Axis::X, 1.0, drag.y);
        }
    } else if matches(Vec3::NEG_Z) {
        if dominant(drag.x) {
            return turn(Axis::Y, 1.0, drag.x);
        }
        if dominant(drag.y) {
            return turn(Axis::X, -1.0, drag.y);
        }
    } else if matches(Vec3::X) {
        if dominant(drag.z) {
            return turn(Axis::Y, 1.0, drag.z);
        }
        if dominant(drag.y) {
            return turn(Axis::Z, 1.0, drag.y);
        }
    } else if matches(Vec3::NEG_X) {
        if dominant(drag.z) {
            return turn(Axis::Y, -1.0, drag.z);
        }
        if dominant(drag.y) {
            return turn(Axis::Z, -1.0, drag.y);
        }
    } else if matches(Vec3::NEG_Y) {
        if dominant(drag.z) {
            return turn(Axis::X, 1.0, drag.z);
        }
        if dominant(drag.x) {
            return turn(Axis::Z, 1.0, drag.x);
        }
    } else if matches(Vec3::Y) {
        if dominant(drag.z) {
            return turn(Axis::X, -1.0, drag.z);
        }
        if dominant(drag.x) {
            return turn(Axis::Z, -1.0, drag.x);
        }
    }
    None
}

/// Turn pointer input into layer turns or camera orbiting.
///
/// A press on a cubie followed by a drag longer than the configured drag
/// distance requests one move; the press is then spent until release. A
/// press on empty space orbits the camera instead.
pub fn gesture_system(
    mut commands: Commands,
    pointer: Res<PointerState>,
    cube: Res<Cube>,
    config: Res<CubeConfig>,
    mut gesture: ResMut<GestureState>,
    mut rig: ResMut<CameraRig>,
) {
    if pointer.interact.just_released {
        gesture.reset();
    }
    if !pointer.interact.active || cube.scrambling {
        return;
    }
    if !gesture.interaction_enabled || cube.animating {
        return;
    }

    match (pointer.hit, gesture.clicked) {
        (Some(hit), None) if !gesture.camera_moving => {
            gesture.clicked = Some(hit);
        }
        (Some(hit), Some(clicked)) if !gesture.camera_moving => {
            let dir = hit.point - clicked.point;
            if dir.length() <= config.drag_distance {
                return;
            }
            gesture.interaction_enabled = false;
            gesture.clicked = None;
            match map_gesture(clicked.normal, dir.normalize()) {
                Some((axis, degrees)) => {
                    let request = MoveRequest::new(clicked.cubie, axis, degrees)
                        .with_speed(config.move_speed);
                    commands.trigger(RequestMoveEvent(request));
                }
                None => debug!("Drag {:?} on face {:?} maps to no turn", dir, clicked.normal),
            }
        }
        (_, None) => {
            gesture.camera_moving = true;
            let sensitivity = config.camera_sensitivity;
            rig.orbit(pointer.delta.x * sensitivity, pointer.delta.y * sensitivity);
        }
        _ => {}
    }
}

//! World setup and the per-frame schedule.
//!
//! [`setup_world`] inserts every resource the puzzle needs, spawns the cube
//! root, registers the observers and builds the first cube. The small
//! helpers below wrap the events so hosts and tests can drive the cube with
//! one call each.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::cubie::{CubeRoot, Cubie, CubieTransform};
use crate::components::scale::Scale;
use crate::events::moves::{MoveRequest, RebuildCubeEvent, RequestMoveEvent, ScrambleEvent};
use crate::resources::camerarig::CameraRig;
use crate::resources::cube::Cube;
use crate::resources::cubeconfig::CubeConfig;
use crate::resources::gesture::GestureState;
use crate::resources::input::PointerState;
use crate::resources::notifications::NotificationBridge;
use crate::resources::pivot::Pivot;
use crate::resources::scramblerng::ScrambleRng;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::build::rebuild_cube_observer;
use crate::systems::gesture::gesture_system;
use crate::systems::moves::{request_move_observer, rotation_finished_observer};
use crate::systems::notifications::{forward_cube_changed, forward_cube_solved};
use crate::systems::scramble::scramble_observer;
use crate::systems::signals::publish_cube_signals;
use crate::systems::solved::is_solved;
use crate::systems::tween::{tween_pivot_system, tween_scale_system};

/// Insert resources, register observers and build the first cube.
pub fn setup_world(world: &mut World, config: CubeConfig) {
    let rig = CameraRig {
        pitch_limit: config.pitch_limit,
        ..Default::default()
    };
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(GestureState::default());
    world.insert_resource(Pivot::default());
    world.insert_resource(NotificationBridge::default());
    world.insert_resource(ScrambleRng::default());
    world.insert_resource(Cube::new(config.size, config.piece_size));
    world.insert_resource(rig);
    world.insert_resource(config);

    world.spawn((CubeRoot, Scale::default()));

    world.add_observer(rebuild_cube_observer);
    world.add_observer(request_move_observer);
    world.add_observer(scramble_observer);
    world.add_observer(rotation_finished_observer);
    world.add_observer(forward_cube_changed);
    world.add_observer(forward_cube_solved);
    // Observers must exist before the first build is triggered.
    world.flush();

    build(world, None);
    info!("Cube world ready");
}

/// Systems run once per frame, after [`update_world_time`](crate::systems::time::update_world_time).
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            gesture_system,
            tween_pivot_system,
            tween_scale_system,
            publish_cube_signals,
        )
            .chain(),
    );
    update
}

/// Rebuild the cube, optionally with a new size.
pub fn build(world: &mut World, size: Option<i32>) {
    world.trigger(RebuildCubeEvent { size });
    world.flush();
}

/// Change the size (clamped) and rebuild.
pub fn set_size(world: &mut World, size: i32) {
    build(world, Some(size));
}

/// Start a scramble chain of `steps + 1` random turns.
pub fn scramble(world: &mut World, steps: i32) {
    world.trigger(ScrambleEvent { steps });
    world.flush();
}

/// Request an interactive turn. Ignored while the cube is busy.
pub fn request_move(world: &mut World, request: MoveRequest) {
    world.trigger(RequestMoveEvent(request));
    world.flush();
}

/// Moves made since the last build or scramble.
pub fn steps(world: &World) -> u32 {
    world.resource::<Cube>().steps
}

/// Current cube size.
pub fn size(world: &World) -> i32 {
    world.resource::<Cube>().size()
}

/// Whether every cubie faces the same way.
pub fn is_cube_solved(world: &mut World) -> bool {
    let mut transforms = world.query_filtered::<&CubieTransform, With<Cubie>>();
    let world: &World = world;
    let cube = world.resource::<Cube>();
    is_solved(
        cube.pieces
            .iter()
            .filter_map(|&e| transforms.get(world, e).ok())
            .map(|t| t.orientation),
    )
}

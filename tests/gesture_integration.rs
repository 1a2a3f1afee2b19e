//! Pointer gesture integration tests: drags on cubies and camera orbiting.

use bevy_ecs::prelude::*;
use glam::{IVec3, Vec2, Vec3};

use rubikscube::components::axis::Axis;
use rubikscube::components::cubie::Cubie;
use rubikscube::game;
use rubikscube::resources::camerarig::CameraRig;
use rubikscube::resources::cube::Cube;
use rubikscube::resources::cubeconfig::CubeConfig;
use rubikscube::resources::gesture::GestureState;
use rubikscube::resources::input::{PointerHit, PointerState};
use rubikscube::resources::pivot::Pivot;
use rubikscube::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> (World, Schedule) {
    let mut world = World::new();
    game::setup_world(&mut world, CubeConfig::new());
    (world, game::build_update_schedule())
}

fn piece_at(world: &mut World, cell: IVec3) -> Entity {
    let mut q = world.query::<(Entity, &Cubie)>();
    q.iter(world)
        .find(|(_, c)| c.grid == cell)
        .map(|(e, _)| e)
        .unwrap()
}

/// One frame with the button held (or not) and the given hit.
fn frame(world: &mut World, schedule: &mut Schedule, down: bool, hit: Option<PointerHit>, delta: Vec2) {
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.interact.update(down);
        pointer.hit = hit;
        pointer.delta = delta;
    }
    update_world_time(world, 1.0 / 60.0);
    schedule.run(world);
}

fn top_hit(cubie: Entity, x: f32) -> Option<PointerHit> {
    Some(PointerHit {
        cubie,
        point: Vec3::new(x, 0.0, 250.0),
        normal: Vec3::Z,
    })
}

#[test]
fn drag_on_top_face_requests_a_turn() {
    let (mut world, mut schedule) = make_world();
    let corner = piece_at(&mut world, IVec3::new(0, 0, 2));

    frame(&mut world, &mut schedule, true, top_hit(corner, 0.0), Vec2::ZERO);
    assert!(world.resource::<GestureState>().clicked.is_some());
    assert!(!world.resource::<Cube>().animating);

    // Below the drag distance: nothing yet.
    frame(&mut world, &mut schedule, true, top_hit(corner, 10.0), Vec2::ZERO);
    assert!(!world.resource::<Cube>().animating);

    frame(&mut world, &mut schedule, true, top_hit(corner, 20.0), Vec2::ZERO);
    assert!(world.resource::<Cube>().animating);
    assert_eq!(game::steps(&world), 1);
    let pending = world.resource::<Pivot>().pending.unwrap();
    assert_eq!(pending.cubie, corner);
    assert_eq!(pending.axis, Axis::Y);
    assert!(approx_eq(pending.degrees, -90.0));
    assert!(approx_eq(pending.speed, CubeConfig::new().move_speed));

    let gesture = world.resource::<GestureState>();
    assert!(!gesture.interaction_enabled);
    assert!(gesture.clicked.is_none());
}

#[test]
fn slightly_slanted_drag_still_turns() {
    let (mut world, mut schedule) = make_world();
    let corner = piece_at(&mut world, IVec3::new(0, 0, 2));
    let hit = |p: Vec3| {
        Some(PointerHit {
            cubie: corner,
            point: p,
            normal: Vec3::Z,
        })
    };
    frame(&mut world, &mut schedule, true, hit(Vec3::new(0.0, 0.0, 250.0)), Vec2::ZERO);
    frame(&mut world, &mut schedule, true, hit(Vec3::new(2.0, 19.0, 250.0)), Vec2::ZERO);
    assert!(world.resource::<Cube>().animating);
    let pending = world.resource::<Pivot>().pending.unwrap();
    assert_eq!(pending.axis, Axis::X);
    assert!(approx_eq(pending.degrees, 90.0));
}

#[test]
fn press_is_spent_until_release() {
    let (mut world, mut schedule) = make_world();
    let corner = piece_at(&mut world, IVec3::new(0, 0, 2));

    frame(&mut world, &mut schedule, true, top_hit(corner, 0.0), Vec2::ZERO);
    frame(&mut world, &mut schedule, true, top_hit(corner, 20.0), Vec2::ZERO);
    // Let the turn finish while still holding the button.
    for _ in 0..120 {
        frame(&mut world, &mut schedule, true, top_hit(corner, 40.0), Vec2::ZERO);
    }
    assert!(!world.resource::<Cube>().animating);
    assert_eq!(game::steps(&world), 1);

    frame(&mut world, &mut schedule, false, None, Vec2::ZERO);
    assert_eq!(*world.resource::<GestureState>(), GestureState::default());
}

#[test]
fn diagonal_drag_spends_the_press_without_turning() {
    let (mut world, mut schedule) = make_world();
    let corner = piece_at(&mut world, IVec3::new(0, 0, 2));
    let hit = |p: Vec3| {
        Some(PointerHit {
            cubie: corner,
            point: p,
            normal: Vec3::Z,
        })
    };
    frame(&mut world, &mut schedule, true, hit(Vec3::new(0.0, 0.0, 250.0)), Vec2::ZERO);
    frame(&mut world, &mut schedule, true, hit(Vec3::new(20.0, 20.0, 250.0)), Vec2::ZERO);
    assert!(!world.resource::<Cube>().animating);
    assert!(!world.resource::<GestureState>().interaction_enabled);
    assert_eq!(game::steps(&world), 0);
}

#[test]
fn drag_on_empty_space_orbits_the_camera() {
    let (mut world, mut schedule) = make_world();
    let before = *world.resource::<CameraRig>();
    let sensitivity = world.resource::<CubeConfig>().camera_sensitivity;

    frame(&mut world, &mut schedule, true, None, Vec2::new(10.0, 5.0));
    let after = *world.resource::<CameraRig>();
    assert!(world.resource::<GestureState>().camera_moving);
    assert!(approx_eq(after.yaw, (before.yaw + 10.0 * sensitivity).rem_euclid(360.0)));
    assert!(approx_eq(after.pitch, before.pitch + 5.0 * sensitivity));
}

#[test]
fn orbiting_ignores_cubies_under_the_cursor() {
    let (mut world, mut schedule) = make_world();
    let corner = piece_at(&mut world, IVec3::new(0, 0, 2));

    frame(&mut world, &mut schedule, true, None, Vec2::new(1.0, 0.0));
    frame(&mut world, &mut schedule, true, top_hit(corner, 0.0), Vec2::new(1.0, 0.0));
    frame(&mut world, &mut schedule, true, top_hit(corner, 50.0), Vec2::new(1.0, 0.0));
    assert!(world.resource::<GestureState>().clicked.is_none());
    assert!(!world.resource::<Cube>().animating);
}

#[test]
fn camera_pitch_is_clamped() {
    let (mut world, mut schedule) = make_world();
    for _ in 0..100 {
        frame(&mut world, &mut schedule, true, None, Vec2::new(0.0, 100.0));
    }
    let rig = world.resource::<CameraRig>();
    assert!(approx_eq(rig.pitch, rig.pitch_limit));
}

#[test]
fn gestures_are_ignored_while_scrambling() {
    let (mut world, mut schedule) = make_world();
    let corner = piece_at(&mut world, IVec3::new(0, 0, 2));
    game::scramble(&mut world, 3);
    let before = *world.resource::<CameraRig>();

    frame(&mut world, &mut schedule, true, top_hit(corner, 0.0), Vec2::new(30.0, 0.0));
    frame(&mut world, &mut schedule, true, top_hit(corner, 40.0), Vec2::new(30.0, 0.0));
    assert!(world.resource::<GestureState>().clicked.is_none());
    assert_eq!(*world.resource::<CameraRig>(), before);
    assert_eq!(game::steps(&world), 0);
}

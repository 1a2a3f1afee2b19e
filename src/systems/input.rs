//! Input systems for the reference host.
//!
//! - [`update_pointer_state`] reads the mouse from Raylib each frame, casts
//!   the cursor ray against the cubies and writes the result into
//!   [`PointerState`].
//! - [`handle_hotkeys`] maps keyboard shortcuts to cube events.
use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};
use raylib::prelude::*;

use crate::components::cubie::{Cubie, CubieTransform};
use crate::events::moves::{RebuildCubeEvent, ScrambleEvent};
use crate::resources::cube::Cube;
use crate::resources::cubeconfig::CubeConfig;
use crate::resources::input::{PointerHit, PointerState};
use crate::systems::render::{from_raylib, to_raylib};

/// Poll Raylib for the mouse and update the `PointerState` resource.
pub fn update_pointer_state(world: &mut World, rl: &RaylibHandle, camera: Camera3D) {
    let down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    let mouse_delta = rl.get_mouse_delta();
    let ray = rl.get_screen_to_world_ray(rl.get_mouse_position(), camera);

    let piece_size = world.resource::<Cube>().piece_size;
    let half = Vec3::splat(piece_size * 0.5);
    let mut cubies = world.query_filtered::<(Entity, &CubieTransform), With<Cubie>>();
    let mut nearest: Option<(f32, PointerHit)> = None;
    for (entity, transform) in cubies.iter(world) {
        let bounds = BoundingBox::new(
            to_raylib(transform.position - half, piece_size),
            to_raylib(transform.position + half, piece_size),
        );
        // The frame change flips Y, so rebuild a proper min/max box.
        let bounds = BoundingBox::new(
            Vector3::new(
                bounds.min.x.min(bounds.max.x),
                bounds.min.y.min(bounds.max.y),
                bounds.min.z.min(bounds.max.z),
            ),
            Vector3::new(
                bounds.min.x.max(bounds.max.x),
                bounds.min.y.max(bounds.max.y),
                bounds.min.z.max(bounds.max.z),
            ),
        );
        let collision = get_ray_collision_box(ray, bounds);
        if !collision.hit {
            continue;
        }
        if nearest.is_some_and(|(distance, _)| distance <= collision.distance) {
            continue;
        }
        let point = from_raylib(collision.point.x, collision.point.y, collision.point.z, piece_size);
        let normal = from_raylib(collision.normal.x, collision.normal.y, collision.normal.z, 1.0);
        nearest = Some((
            collision.distance,
            PointerHit {
                cubie: entity,
                point,
                normal: normal.normalize_or_zero(),
            },
        ));
    }

    let mut pointer = world.resource_mut::<PointerState>();
    pointer.interact.update(down);
    pointer.hit = nearest.map(|(_, hit)| hit);
    pointer.delta = Vec2::new(mouse_delta.x, -mouse_delta.y);
}

/// Space scrambles, R rebuilds, +/- change the size.
pub fn handle_hotkeys(world: &mut World, rl: &RaylibHandle) {
    let size = world.resource::<Cube>().size();
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        let steps = world.resource::<CubeConfig>().scramble_steps;
        world.trigger(ScrambleEvent { steps });
    }
    if rl.is_key_pressed(KeyboardKey::KEY_R) {
        world.trigger(RebuildCubeEvent::default());
    }
    if rl.is_key_pressed(KeyboardKey::KEY_EQUAL) || rl.is_key_pressed(KeyboardKey::KEY_KP_ADD) {
        world.trigger(RebuildCubeEvent {
            size: Some(size + 1),
        });
    }
    if rl.is_key_pressed(KeyboardKey::KEY_MINUS) || rl.is_key_pressed(KeyboardKey::KEY_KP_SUBTRACT)
    {
        world.trigger(RebuildCubeEvent {
            size: Some(size - 1),
        });
    }
    world.flush();
}

//! Raylib drawing for the reference host.
//!
//! The cube lives in a right-handed, Z-up frame measured in world units.
//! Raylib is Y-up, so every point goes through [`to_raylib`], which also
//! scales one cubie down to one raylib unit.
//!
//! Cubies are drawn as triangles computed from their [`CubieTransform`], so
//! turning layers need no matrix stack.

use bevy_ecs::prelude::*;
use glam::Vec3;
use raylib::prelude::*;

use crate::components::axis::{Face, exterior_faces};
use crate::components::cubie::{CubeRoot, Cubie, CubieTransform};
use crate::components::scale::Scale;
use crate::resources::camerarig::CameraRig;
use crate::resources::cube::Cube;
use crate::resources::worldsignals::WorldSignals;

/// Sticker inset relative to the cubie half width.
const STICKER_SIZE: f32 = 0.85;
/// Sticker lift above the body, relative to the cubie half width.
const STICKER_LIFT: f32 = 0.01;
const BODY_COLOR: Color = Color::new(20, 20, 24, 255);

/// Map a cube-frame point (world units) to raylib space.
pub fn to_raylib(v: Vec3, piece_size: f32) -> Vector3 {
    let v = v / piece_size;
    Vector3::new(v.x, v.z, -v.y)
}

/// Map a raylib-space point back to the cube frame (world units).
pub fn from_raylib(x: f32, y: f32, z: f32, piece_size: f32) -> Vec3 {
    Vec3::new(x, -z, y) * piece_size
}

/// Sticker color of a face slot.
pub fn face_color(face: Face) -> Color {
    match face {
        Face::Front => Color::new(0, 155, 72, 255),
        Face::Back => Color::new(0, 70, 173, 255),
        Face::Left => Color::new(255, 88, 0, 255),
        Face::Right => Color::new(183, 18, 52, 255),
        Face::Up => Color::new(255, 255, 255, 255),
        Face::Down => Color::new(255, 213, 0, 255),
    }
}

/// Perspective camera looking through the rig.
pub fn rig_camera(rig: &CameraRig, piece_size: f32) -> Camera3D {
    Camera3D::perspective(
        to_raylib(rig.eye(), piece_size),
        to_raylib(rig.target, piece_size),
        Vector3::new(0.0, 1.0, 0.0),
        45.0,
    )
}

/// Counter-clockwise quad seen from the `normal` side.
fn draw_quad<D: RaylibDraw3D>(
    d3: &mut D,
    center: Vec3,
    normal: Vec3,
    half: f32,
    piece_size: f32,
    color: Color,
) {
    let u = normal.any_orthonormal_vector() * half;
    let v = normal.cross(u);
    let corners = [
        center - u - v,
        center + u - v,
        center + u + v,
        center - u + v,
    ]
    .map(|c| to_raylib(c, piece_size));
    d3.draw_triangle3D(corners[0], corners[1], corners[2], color);
    d3.draw_triangle3D(corners[0], corners[2], corners[3], color);
}

/// Draw every cubie with its stickers.
pub fn render_pass<D: RaylibDraw3D>(world: &mut World, d3: &mut D) {
    let mut roots = world.query_filtered::<&Scale, With<CubeRoot>>();
    let scale = roots.iter(world).next().map(|s| s.scale).unwrap_or(1.0);
    let (size, piece_size, center) = {
        let cube = world.resource::<Cube>();
        (cube.size(), cube.piece_size, cube.center())
    };
    let half = piece_size * 0.5 * scale;

    let mut cubies = world.query::<(&Cubie, &CubieTransform)>();
    for (cubie, transform) in cubies.iter(world) {
        let position = center + (transform.position - center) * scale;
        for face in Face::ALL {
            let normal = transform.orientation * face.normal();
            draw_quad(d3, position + normal * half, normal, half, piece_size, BODY_COLOR);
        }
        for face in exterior_faces(cubie.home, size) {
            let normal = transform.orientation * face.normal();
            let lifted = position + normal * half * (1.0 + STICKER_LIFT);
            draw_quad(
                d3,
                lifted,
                normal,
                half * STICKER_SIZE,
                piece_size,
                face_color(face),
            );
        }
    }
}

/// Move counter and state flags in the corner of the screen.
pub fn render_hud(world: &World, d: &mut RaylibDrawHandle) {
    let signals = world.resource::<WorldSignals>();
    let steps = signals.get_integer("steps").unwrap_or(0);
    let size = signals.get_integer("size").unwrap_or(0);
    let state = if signals.has_flag("scrambling") {
        "scrambling"
    } else if signals.has_flag("solved") {
        "solved"
    } else {
        ""
    };
    let (width, height) = (d.get_screen_width(), d.get_screen_height());
    d.draw_text(
        &format!("{size}x{size}x{size}  moves: {steps}  {state}"),
        10,
        10,
        20,
        Color::DARKGRAY,
    );
    d.draw_text(
        "drag: turn / orbit   space: scramble   r: rebuild   +/-: size",
        10,
        height - 24,
        16,
        Color::GRAY,
    );
    d.draw_fps(width - 90, 10);
}

//! Solved-state detection.
//!
//! The cube counts as solved when every cubie faces the same way as the
//! first one. Positions are not compared.

use bevy_ecs::prelude::*;
use glam::Quat;

use crate::components::cubie::{Cubie, CubieTransform};
use crate::resources::cube::Cube;

/// Per-component tolerance on the forward/up/right vectors.
pub const SOLVED_TOLERANCE: f32 = 0.01;

/// Whether all orientations match the first one. Empty input is solved.
pub fn is_solved(orientations: impl IntoIterator<Item = Quat>) -> bool {
    let mut orientations = orientations.into_iter().map(|q| CubieTransform {
        position: Default::default(),
        orientation: q,
    });
    let Some(first) = orientations.next() else {
        return true;
    };
    let (forward, up, right) = (first.forward(), first.up(), first.right());
    orientations.all(|t| {
        t.forward().abs_diff_eq(forward, SOLVED_TOLERANCE)
            && t.up().abs_diff_eq(up, SOLVED_TOLERANCE)
            && t.right().abs_diff_eq(right, SOLVED_TOLERANCE)
    })
}

/// Solved check over the cube's pieces, in index order.
pub fn cube_is_solved(cube: &Cube, transforms: &Query<&CubieTransform, With<Cubie>>) -> bool {
    is_solved(
        cube.pieces
            .iter()
            .filter_map(|&e| transforms.get(e).ok())
            .map(|t| t.orientation),
    )
}

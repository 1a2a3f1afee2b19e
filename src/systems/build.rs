//! Cube construction.
//!
//! [`surface_cells`] lists the cells a cube of a given size occupies;
//! [`rebuild_cube_observer`] despawns the current cubies and spawns a fresh,
//! solved cube whenever a [`RebuildCubeEvent`] is triggered.

use bevy_ecs::prelude::*;
use glam::IVec3;
use log::info;

use crate::components::cubie::{CubeRoot, Cubie, CubieTransform};
use crate::components::scale::Scale;
use crate::components::tween::{Easing, TweenScale};
use crate::events::cube::CubeChangedEvent;
use crate::events::moves::RebuildCubeEvent;
use crate::resources::camerarig::CameraRig;
use crate::resources::cube::Cube;
use crate::resources::pivot::Pivot;

/// Scale the cube root starts from on build.
const POP_SCALE: f32 = 1.05;
/// Duration of the build pop, in seconds.
const POP_DURATION: f32 = 0.3;

/// Cells on the surface of a cube of `size` (clamped), in build order.
///
/// Loops run Y outermost, then X, then Z; the position in the returned list
/// is the cubie index.
pub fn surface_cells(size: i32) -> Vec<IVec3> {
    let size = Cube::clamp_size(size);
    let last = size - 1;
    let on_surface = |c: i32| c == 0 || c == last;
    let inner = (size - 2).max(0).pow(3);
    let mut cells = Vec::with_capacity((size.pow(3) - inner) as usize);
    for i in 0..size {
        for j in 0..size {
            for k in 0..size {
                if on_surface(i) || on_surface(j) || on_surface(k) {
                    cells.push(IVec3::new(j, i, k));
                }
            }
        }
    }
    cells
}

/// Rebuild the cube from scratch.
///
/// Cancels any turn in flight without completing it, clears the sequencer
/// modes, announces a zero move count, respawns every cubie at its home
/// cell and re-aims the camera rig.
pub fn rebuild_cube_observer(
    trigger: On<RebuildCubeEvent>,
    mut commands: Commands,
    mut cube: ResMut<Cube>,
    mut pivot: ResMut<Pivot>,
    mut rig: ResMut<CameraRig>,
    roots: Query<Entity, With<CubeRoot>>,
) {
    if let Some(size) = trigger.event().size {
        cube.set_size(size);
    }

    pivot.reset();
    cube.reset_modes();
    commands.trigger(CubeChangedEvent { steps: 0 });

    for entity in cube.pieces.drain(..) {
        commands.entity(entity).despawn();
    }

    let cells = surface_cells(cube.size());
    let mut pieces = Vec::with_capacity(cells.len());
    for (index, cell) in cells.into_iter().enumerate() {
        let entity = commands
            .spawn((
                Cubie::new(index, cell),
                CubieTransform::new(cube.cell_position(cell)),
            ))
            .id();
        pieces.push(entity);
    }
    cube.pieces = pieces;
    cube.steps = 0;
    pivot.center = cube.center();
    rig.reset_for(cube.center(), cube.side_width());

    for root in roots.iter() {
        commands.entity(root).insert((
            Scale::new(POP_SCALE),
            TweenScale::new(POP_SCALE, 1.0, POP_DURATION).with_easing(Easing::BackOut),
        ));
    }

    info!(
        "Built a {0}x{0}x{0} cube with {1} pieces",
        cube.size(),
        cube.pieces.len()
    );
}

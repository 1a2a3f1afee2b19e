//! Move sequencer.
//!
//! A turn goes through three steps:
//!
//! 1. [`request_move_observer`] accepts a [`RequestMoveEvent`] when the cube
//!    is idle and calls [`start_rotation`].
//! 2. [`tween_pivot_system`](crate::systems::tween::tween_pivot_system)
//!    plays the turn and triggers [`RotationFinishedEvent`] at the end.
//! 3. [`rotation_finished_observer`] bakes the turn into the cubies, then
//!    either notifies listeners or, during a scramble, issues the next turn.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::cubie::{Cubie, CubieTransform, PivotChild};
use crate::components::tween::{Easing, TweenRotation};
use crate::events::cube::{CubeChangedEvent, CubeSolvedEvent};
use crate::events::moves::{MoveRequest, RequestMoveEvent, RotationFinishedEvent};
use crate::resources::cube::Cube;
use crate::resources::cubeconfig::CubeConfig;
use crate::resources::pivot::Pivot;
use crate::resources::scramblerng::ScrambleRng;
use crate::systems::group::select_group;
use crate::systems::scramble::issue_scramble_move;
use crate::systems::solved::is_solved;

/// Cubie entities with their transforms, in index order.
pub(crate) type PieceSnapshot = Vec<(Entity, CubieTransform)>;

/// Snapshot of the cube's pieces taken through `lookup`.
pub(crate) fn snapshot_pieces(
    cube: &Cube,
    lookup: impl Fn(Entity) -> Option<CubieTransform>,
) -> PieceSnapshot {
    cube.pieces
        .iter()
        .filter_map(|&e| lookup(e).map(|t| (e, t)))
        .collect()
}

/// Attach the layer of `request.cubie` to the pivot and start the turn.
///
/// Returns `false` when the reference cubie is not part of the cube; nothing
/// changes in that case.
pub(crate) fn start_rotation(
    commands: &mut Commands,
    cube: &mut Cube,
    pivot: &mut Pivot,
    request: MoveRequest,
    pieces: &[(Entity, CubieTransform)],
    tolerance: f32,
) -> bool {
    let Some((_, reference)) = pieces.iter().find(|(e, _)| *e == request.cubie) else {
        warn!("Move requested on unknown cubie {:?}", request.cubie);
        return false;
    };

    pivot.reset();
    pivot.center = cube.center();
    pivot.group = select_group(
        pieces.iter().map(|(e, t)| (*e, t.position)),
        request.axis,
        reference.position,
        tolerance,
    );
    for (entity, transform) in pieces {
        if pivot.group.contains(entity) {
            commands
                .entity(*entity)
                .insert(PivotChild { rest: *transform });
        }
    }
    pivot.tween = Some(
        TweenRotation::new(request.axis, 0.0, request.degrees, request.speed)
            .with_easing(Easing::BackOut),
    );
    pivot.pending = Some(request);
    cube.animating = true;
    true
}

/// Accept an interactive move unless a turn or scramble is running.
pub fn request_move_observer(
    trigger: On<RequestMoveEvent>,
    mut commands: Commands,
    mut cube: ResMut<Cube>,
    mut pivot: ResMut<Pivot>,
    config: Res<CubeConfig>,
    transforms: Query<&CubieTransform, With<Cubie>>,
) {
    let request = trigger.event().0;
    if cube.is_busy() {
        debug!(
            "Rejected {:?} {} turn: cube is busy (animating={}, scrambling={})",
            request.axis, request.degrees, cube.animating, cube.scrambling
        );
        return;
    }

    let pieces = snapshot_pieces(&cube, |e| transforms.get(e).ok().copied());
    if start_rotation(
        &mut commands,
        &mut cube,
        &mut pivot,
        request,
        &pieces,
        config.group_tolerance,
    ) {
        cube.steps += 1;
        debug!(
            "Turning {} pieces {} degrees around {:?}",
            pivot.group.len(),
            request.degrees,
            request.axis
        );
    }
}

/// Bake the finished turn into the cubies and advance the sequencer.
///
/// Grid cells are rotated exactly around the grid center and positions are
/// re-snapped to them, so no drift survives a turn.
pub fn rotation_finished_observer(
    _trigger: On<RotationFinishedEvent>,
    mut commands: Commands,
    mut cube: ResMut<Cube>,
    mut pivot: ResMut<Pivot>,
    mut rng: ResMut<ScrambleRng>,
    config: Res<CubeConfig>,
    mut query: Query<(&mut Cubie, &mut CubieTransform, Option<&PivotChild>)>,
) {
    let Some(tween) = pivot.tween.take() else {
        return;
    };
    let rotation = tween.axis.rotation(tween.to);
    let center = pivot.center;
    let grid_center = cube.grid_center();

    for &entity in pivot.group.iter() {
        let Ok((mut cubie, mut transform, child)) = query.get_mut(entity) else {
            continue;
        };
        let rest = child.map(|c| c.rest).unwrap_or(*transform);
        let baked = rest.rotated_about(center, rotation);
        let grid = grid_center + rotation * (cubie.grid.as_vec3() - grid_center);
        cubie.grid = grid.round().as_ivec3();
        transform.orientation = baked.orientation;
        transform.position = cube.cell_position(cubie.grid);
        commands.entity(entity).remove::<PivotChild>();
    }
    pivot.reset();

    if cube.scrambling {
        cube.scramble_remaining -= 1;
        if cube.scramble_remaining >= 0 {
            let pieces = snapshot_pieces(&cube, |e| query.get(e).ok().map(|(_, t, _)| *t));
            if !issue_scramble_move(
                &mut commands,
                &mut cube,
                &mut pivot,
                &mut rng,
                &config,
                &pieces,
            ) {
                cube.reset_modes();
            }
        } else {
            cube.scrambling = false;
            cube.animating = false;
            info!("Scramble finished");
        }
        return;
    }

    cube.animating = false;
    commands.trigger(CubeChangedEvent { steps: cube.steps });
    let solved = is_solved(
        cube.pieces
            .iter()
            .filter_map(|&e| query.get(e).ok())
            .map(|(_, t, _)| t.orientation),
    );
    if solved {
        info!("Cube solved in {} moves", cube.steps);
        commands.trigger(CubeSolvedEvent {});
    }
}

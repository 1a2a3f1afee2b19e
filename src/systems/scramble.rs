//! Scramble chains.
//!
//! A [`ScrambleEvent`] resets the move counter and plays random turns back
//! to back. The chain is driven by
//! [`rotation_finished_observer`](crate::systems::moves::rotation_finished_observer),
//! which calls [`issue_scramble_move`] after every turn until
//! `scramble_remaining` drops below zero.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::axis::Axis;
use crate::components::cubie::{Cubie, CubieTransform};
use crate::events::cube::CubeChangedEvent;
use crate::events::moves::{MoveRequest, ScrambleEvent};
use crate::resources::cube::Cube;
use crate::resources::cubeconfig::CubeConfig;
use crate::resources::pivot::Pivot;
use crate::resources::scramblerng::ScrambleRng;
use crate::systems::moves::{snapshot_pieces, start_rotation};

/// A random quarter turn of a random layer. `None` when there are no pieces.
pub fn random_scramble_move(
    rng: &mut fastrand::Rng,
    pieces: &[Entity],
    speed: f32,
) -> Option<MoveRequest> {
    if pieces.is_empty() {
        return None;
    }
    let axis = Axis::ALL[rng.usize(..Axis::ALL.len())];
    let cubie = pieces[rng.usize(..pieces.len())];
    let sign = if rng.bool() { 1.0 } else { -1.0 };
    Some(MoveRequest::new(cubie, axis, 90.0 * sign).with_speed(speed))
}

/// Start the next random turn of the chain.
pub(crate) fn issue_scramble_move(
    commands: &mut Commands,
    cube: &mut Cube,
    pivot: &mut Pivot,
    rng: &mut ScrambleRng,
    config: &CubeConfig,
    pieces: &[(Entity, CubieTransform)],
) -> bool {
    let entities: Vec<Entity> = pieces.iter().map(|(e, _)| *e).collect();
    let Some(request) = random_scramble_move(&mut rng.0, &entities, config.scramble_speed) else {
        return false;
    };
    start_rotation(commands, cube, pivot, request, pieces, config.group_tolerance)
}

/// Start a scramble chain of `steps + 1` random turns.
///
/// Ignored while a turn or another scramble is running. The move counter is
/// reset and announced before the first turn; the chain itself is silent.
pub fn scramble_observer(
    trigger: On<ScrambleEvent>,
    mut commands: Commands,
    mut cube: ResMut<Cube>,
    mut pivot: ResMut<Pivot>,
    mut rng: ResMut<ScrambleRng>,
    config: Res<CubeConfig>,
    transforms: Query<&CubieTransform, With<Cubie>>,
) {
    if cube.is_busy() {
        debug!("Scramble ignored: cube is busy");
        return;
    }
    let steps = trigger.event().steps;
    cube.scramble_remaining = steps;
    cube.scrambling = true;
    cube.steps = 0;
    commands.trigger(CubeChangedEvent { steps: 0 });

    let pieces = snapshot_pieces(&cube, |e| transforms.get(e).ok().copied());
    if issue_scramble_move(
        &mut commands,
        &mut cube,
        &mut pivot,
        &mut rng,
        &config,
        &pieces,
    ) {
        info!("Scrambling with {} turns", steps.max(0) + 1);
    } else {
        cube.reset_modes();
    }
}

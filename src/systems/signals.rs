//! Mirror the cube state into [`WorldSignals`].
//!
//! Runs once per tick so HUDs can read the move counter and the sequencer
//! flags by key.

use crate::components::cubie::{Cubie, CubieTransform};
use crate::resources::cube::Cube;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::solved::cube_is_solved;
use bevy_ecs::prelude::*;

/// Publish `steps`, `size`, `scramble_remaining` and the `solved`,
/// `animating`, `scrambling` flags.
pub fn publish_cube_signals(
    cube: Res<Cube>,
    transforms: Query<&CubieTransform, With<Cubie>>,
    mut signals: ResMut<WorldSignals>,
) {
    signals.set_integer("steps", cube.steps.min(i32::MAX as u32) as i32);
    signals.set_integer("size", cube.size());
    signals.set_integer("scramble_remaining", cube.scramble_remaining);
    signals.set_flag_to("animating", cube.animating);
    signals.set_flag_to("scrambling", cube.scrambling);
    let solved = !cube.is_busy() && cube_is_solved(&cube, &transforms);
    signals.set_flag_to("solved", solved);
}

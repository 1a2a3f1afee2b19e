//! Authoritative cube state.
//!
//! The [`Cube`] resource owns the ordered list of cubie entities and the
//! sequencer's counters and mode flags. Only the observers in
//! [`crate::systems`] mutate it; hosts read it (or the mirrored
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals)).

use bevy_ecs::prelude::{Entity, Resource};
use glam::{IVec3, Vec3};

/// Smallest supported cube.
pub const MIN_SIZE: i32 = 2;
/// Largest supported cube.
pub const MAX_SIZE: i32 = 16;
/// Size used when nothing else is configured.
pub const DEFAULT_SIZE: i32 = 3;
/// Side width of one cubie in world units.
pub const DEFAULT_PIECE_SIZE: f32 = 100.0;

/// The puzzle: pieces, size, move counter and sequencer flags.
#[derive(Resource, Debug, Clone)]
pub struct Cube {
    size: i32,
    /// Side width of one cubie in world units.
    pub piece_size: f32,
    /// Cubie entities in build order; index `i` holds the cubie with `index == i`.
    pub pieces: Vec<Entity>,
    /// Moves made since the last build or scramble.
    pub steps: u32,
    /// Scramble turns still to issue after the current one.
    pub scramble_remaining: i32,
    /// A scramble chain is running.
    pub scrambling: bool,
    /// A layer turn is in flight.
    pub animating: bool,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_PIECE_SIZE)
    }
}

impl Cube {
    pub fn new(size: i32, piece_size: f32) -> Self {
        Cube {
            size: Self::clamp_size(size),
            piece_size,
            pieces: Vec::new(),
            steps: 0,
            scramble_remaining: 0,
            scrambling: false,
            animating: false,
        }
    }

    /// Clamp a requested size into the supported range.
    pub fn clamp_size(size: i32) -> i32 {
        size.clamp(MIN_SIZE, MAX_SIZE)
    }

    /// Number of cubies along one edge.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Only the rebuild observer changes the size; pieces must be respawned.
    pub(crate) fn set_size(&mut self, size: i32) {
        self.size = Self::clamp_size(size);
    }

    /// Whether the sequencer is running a turn or a scramble chain.
    pub fn is_busy(&self) -> bool {
        self.scrambling || self.animating
    }

    /// Drop every mode flag.
    pub fn reset_modes(&mut self) {
        self.scrambling = false;
        self.animating = false;
        self.scramble_remaining = 0;
    }

    /// Full side width of the cube in world units.
    pub fn side_width(&self) -> f32 {
        self.piece_size * self.size as f32
    }

    /// World position of a grid cell (cubie centers sit on integer multiples of the piece size).
    pub fn cell_position(&self, cell: IVec3) -> Vec3 {
        cell.as_vec3() * self.piece_size
    }

    /// Center of the cube, the point layers turn around.
    pub fn center(&self) -> Vec3 {
        Vec3::splat((self.size - 1) as f32 * self.piece_size / 2.0)
    }

    /// Center of the cube in grid units.
    pub fn grid_center(&self) -> Vec3 {
        Vec3::splat((self.size - 1) as f32 / 2.0)
    }
}

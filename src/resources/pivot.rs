//! Shared rotation anchor for layer turns.
//!
//! Instead of reparenting cubies in a scene graph, the turning layer is
//! listed in [`Pivot::group`] and every grouped cubie carries a
//! [`PivotChild`](crate::components::cubie::PivotChild) with its rest
//! transform. The tween system writes [`Pivot::rotation`] each tick and
//! re-derives the group's transforms from it.

use bevy_ecs::prelude::{Entity, Resource};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::components::tween::TweenRotation;
use crate::events::moves::MoveRequest;

/// Cubies turning together. A 16x16 face layer has 256 pieces; most layers fit inline.
pub type PieceGroup = SmallVec<[Entity; 32]>;

/// The pivot and the turn it is playing.
#[derive(Resource, Debug, Clone)]
pub struct Pivot {
    /// Point the layer turns around.
    pub center: Vec3,
    /// Current rotation applied to the group.
    pub rotation: Quat,
    /// Cubies attached to the pivot.
    pub group: PieceGroup,
    /// Turn animation; `None` when idle.
    pub tween: Option<TweenRotation>,
    /// The move being played.
    pub pending: Option<MoveRequest>,
}

impl Default for Pivot {
    fn default() -> Self {
        Pivot {
            center: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            group: PieceGroup::new(),
            tween: None,
            pending: None,
        }
    }
}

impl Pivot {
    /// Back to identity with nothing attached. Drops any running tween.
    pub fn reset(&mut self) {
        self.rotation = Quat::IDENTITY;
        self.group.clear();
        self.tween = None;
        self.pending = None;
    }

    pub fn is_rotating(&self) -> bool {
        self.tween.is_some()
    }
}

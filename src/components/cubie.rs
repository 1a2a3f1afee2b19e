//! Cubie components.
//!
//! Every visible sub-cube of the puzzle is an entity carrying a [`Cubie`]
//! (identity and logical grid cell) and a [`CubieTransform`] (continuous
//! position and orientation relative to the cube root). While a layer turns,
//! the moving cubies also carry a [`PivotChild`] holding the transform they
//! had when they were attached to the pivot.

use bevy_ecs::prelude::Component;
use glam::{IVec3, Quat, Vec3};

/// Identity and logical placement of one cubie.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cubie {
    /// Stable index in build order.
    pub index: usize,
    /// Cell the cubie was built at. Decides which faces carry stickers.
    pub home: IVec3,
    /// Cell the cubie currently occupies. Rotated exactly on each move.
    pub grid: IVec3,
}

impl Cubie {
    pub fn new(index: usize, cell: IVec3) -> Self {
        Cubie {
            index,
            home: cell,
            grid: cell,
        }
    }
}

/// Continuous transform of a cubie in cube space (world units).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CubieTransform {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CubieTransform {
    pub fn new(position: Vec3) -> Self {
        CubieTransform {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Local +X in cube space.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Local +Y in cube space.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Local +Z in cube space.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// This transform carried by `rotation` around `center`.
    pub fn rotated_about(&self, center: Vec3, rotation: Quat) -> Self {
        CubieTransform {
            position: center + rotation * (self.position - center),
            orientation: (rotation * self.orientation).normalize(),
        }
    }
}

/// Marks a cubie attached to the pivot during a layer turn.
#[derive(Component, Clone, Copy, Debug)]
pub struct PivotChild {
    /// Transform at the moment of attachment.
    pub rest: CubieTransform,
}

/// Marker for the cube root entity (the whole puzzle, scaled on build).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CubeRoot;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::axis::Axis;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_cubie_new_sets_home_and_grid() {
        let c = Cubie::new(4, IVec3::new(1, 2, 0));
        assert_eq!(c.index, 4);
        assert_eq!(c.home, IVec3::new(1, 2, 0));
        assert_eq!(c.grid, c.home);
    }

    #[test]
    fn test_transform_default_axes() {
        let t = CubieTransform::new(Vec3::ZERO);
        assert!(t.forward().abs_diff_eq(Vec3::X, EPSILON));
        assert!(t.right().abs_diff_eq(Vec3::Y, EPSILON));
        assert!(t.up().abs_diff_eq(Vec3::Z, EPSILON));
    }

    #[test]
    fn test_rotated_about_center() {
        let t = CubieTransform::new(Vec3::new(200.0, 100.0, 100.0));
        let center = Vec3::splat(100.0);
        let r = t.rotated_about(center, Axis::Z.rotation(90.0));
        assert!(r.position.abs_diff_eq(Vec3::new(100.0, 200.0, 100.0), 1e-3));
        assert!(r.forward().abs_diff_eq(Vec3::Y, EPSILON));
        assert!(r.up().abs_diff_eq(Vec3::Z, EPSILON));
    }

    #[test]
    fn test_rotated_about_keeps_center_piece_in_place() {
        let center = Vec3::splat(100.0);
        let t = CubieTransform::new(center);
        let r = t.rotated_about(center, Axis::X.rotation(-90.0));
        assert!(r.position.abs_diff_eq(center, 1e-4));
    }
}

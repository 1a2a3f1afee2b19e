//! Layer selection.
//!
//! A layer is every cubie whose coordinate along the turn axis matches the
//! reference cubie's. Matching is geometric with a tolerance, so it works on
//! the continuous positions the tween writes as well as on snapped ones.

use glam::Vec3;
use smallvec::SmallVec;

use crate::components::axis::Axis;

/// Default selection tolerance in world units.
pub const DEFAULT_GROUP_TOLERANCE: f32 = 5.0;

/// Pieces sharing the reference's plane perpendicular to `axis`.
///
/// A piece is selected when its coordinate along `axis` differs from the
/// reference's by strictly less than `tolerance`. Input order is kept.
pub fn select_group<I: Copy>(
    pieces: impl IntoIterator<Item = (I, Vec3)>,
    axis: Axis,
    reference: Vec3,
    tolerance: f32,
) -> SmallVec<[I; 32]> {
    let plane = axis.component(reference);
    pieces
        .into_iter()
        .filter(|(_, position)| (axis.component(*position) - plane).abs() < tolerance)
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::build::surface_cells;

    fn cube_positions(size: i32) -> Vec<(usize, Vec3)> {
        surface_cells(size)
            .into_iter()
            .enumerate()
            .map(|(i, cell)| (i, cell.as_vec3() * 100.0))
            .collect()
    }

    #[test]
    fn test_face_layer_of_size_three() {
        let pieces = cube_positions(3);
        let group = select_group(pieces, Axis::Z, Vec3::new(0.0, 0.0, 200.0), 5.0);
        assert_eq!(group.len(), 9);
    }

    #[test]
    fn test_middle_layer_of_size_three() {
        let pieces = cube_positions(3);
        let group = select_group(pieces, Axis::X, Vec3::new(100.0, 0.0, 0.0), 5.0);
        assert_eq!(group.len(), 8);
    }

    #[test]
    fn test_every_layer_matches_plane_count() {
        for size in [2, 4, 5] {
            let pieces = cube_positions(size);
            for axis in Axis::ALL {
                for layer in 0..size {
                    let reference = axis.unit() * layer as f32 * 100.0;
                    let group = select_group(pieces.iter().copied(), axis, reference, 5.0);
                    let expected = pieces
                        .iter()
                        .filter(|(_, p)| (axis.component(*p) - layer as f32 * 100.0).abs() < 0.5)
                        .count();
                    assert_eq!(group.len(), expected, "size {size} {axis:?} layer {layer}");
                }
            }
        }
    }

    #[test]
    fn test_tolerance_is_strict() {
        let pieces = vec![(0, Vec3::ZERO), (1, Vec3::new(0.0, 0.0, 5.0))];
        let group = select_group(pieces, Axis::Z, Vec3::ZERO, 5.0);
        assert_eq!(group.as_slice(), &[0]);
    }

    #[test]
    fn test_tolerance_absorbs_drift() {
        let pieces = vec![(7, Vec3::new(0.0, 0.0, 99.99)), (8, Vec3::new(0.0, 0.0, 200.0))];
        let group = select_group(pieces, Axis::Z, Vec3::new(50.0, 50.0, 100.0), 5.0);
        assert_eq!(group.as_slice(), &[7]);
    }

    #[test]
    fn test_empty_input() {
        let group = select_group(Vec::<(u32, Vec3)>::new(), Axis::Y, Vec3::ZERO, 5.0);
        assert!(group.is_empty());
    }
}

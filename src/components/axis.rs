//! Rotation axes and cube faces.
//!
//! [`Axis`] names the three layer axes a move can turn around and converts
//! signed move angles into quaternions. [`Face`] names the six exterior
//! faces a cubie can show and maps them to material slots and normals.

use arrayvec::ArrayVec;
use glam::{IVec3, Quat, Vec3};

/// Axis a layer turns around. Pieces sharing a coordinate on this axis
/// form the group that moves together.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in declaration order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Coordinate of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Rotation for a move of `degrees` around this axis.
    ///
    /// Positive angles turn clockwise seen from +X and +Y, and
    /// counter-clockwise seen from +Z. The gesture table in
    /// [`crate::systems::gesture::map_gesture`] relies on this.
    pub fn rotation(self, degrees: f32) -> Quat {
        let radians = degrees.to_radians();
        match self {
            Axis::X => Quat::from_rotation_x(-radians),
            Axis::Y => Quat::from_rotation_y(-radians),
            Axis::Z => Quat::from_rotation_z(radians),
        }
    }
}

/// Exterior face of the cube. The discriminant is the material slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    Up = 4,
    Down = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
    ];

    /// Material slot index of this face.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Outward normal of this face in cube space.
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::NEG_X,
            Face::Back => Vec3::X,
            Face::Left => Vec3::NEG_Y,
            Face::Right => Vec3::Y,
            Face::Up => Vec3::Z,
            Face::Down => Vec3::NEG_Z,
        }
    }
}

/// Faces a cell occupies on a cube of `size`, in slot order.
///
/// Only cosmetic: renderers use it to decide which sides get a sticker.
pub fn exterior_faces(cell: IVec3, size: i32) -> ArrayVec<Face, 6> {
    let last = size - 1;
    let mut faces = ArrayVec::new();
    if cell.x == 0 {
        faces.push(Face::Front);
    }
    if cell.x == last {
        faces.push(Face::Back);
    }
    if cell.y == 0 {
        faces.push(Face::Left);
    }
    if cell.y == last {
        faces.push(Face::Right);
    }
    if cell.z == last {
        faces.push(Face::Up);
    }
    if cell.z == 0 {
        faces.push(Face::Down);
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, EPSILON)
    }

    #[test]
    fn test_axis_component() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.component(v), 1.0);
        assert_eq!(Axis::Y.component(v), 2.0);
        assert_eq!(Axis::Z.component(v), 3.0);
    }

    #[test]
    fn test_axis_rotation_keeps_axis_fixed() {
        for axis in Axis::ALL {
            let q = axis.rotation(90.0);
            assert!(vec_approx_eq(q * axis.unit(), axis.unit()));
        }
    }

    #[test]
    fn test_axis_rotation_sign_convention() {
        // Negative Y turn carries the top of the cube towards +X.
        assert!(vec_approx_eq(Axis::Y.rotation(-90.0) * Vec3::Z, Vec3::X));
        // Positive X turn carries the top towards +Y.
        assert!(vec_approx_eq(Axis::X.rotation(90.0) * Vec3::Z, Vec3::Y));
        // Positive Z turn carries +X towards +Y.
        assert!(vec_approx_eq(Axis::Z.rotation(90.0) * Vec3::X, Vec3::Y));
    }

    #[test]
    fn test_axis_rotation_opposite_angles_cancel() {
        for axis in Axis::ALL {
            let q = axis.rotation(90.0) * axis.rotation(-90.0);
            assert!(vec_approx_eq(q * Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0)));
        }
    }

    #[test]
    fn test_face_slots_are_unique() {
        let mut slots: Vec<usize> = Face::ALL.iter().map(|f| f.slot()).collect();
        slots.sort();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exterior_faces_corner() {
        let faces = exterior_faces(IVec3::new(0, 0, 0), 3);
        assert_eq!(faces.as_slice(), &[Face::Front, Face::Left, Face::Down]);

        let faces = exterior_faces(IVec3::new(2, 2, 2), 3);
        assert_eq!(faces.as_slice(), &[Face::Back, Face::Right, Face::Up]);
    }

    #[test]
    fn test_exterior_faces_center_pieces() {
        let faces = exterior_faces(IVec3::new(1, 1, 2), 3);
        assert_eq!(faces.as_slice(), &[Face::Up]);
        let faces = exterior_faces(IVec3::new(1, 0, 1), 3);
        assert_eq!(faces.as_slice(), &[Face::Left]);
    }

    #[test]
    fn test_exterior_faces_match_normals() {
        // Every exterior face points away from the cube center.
        let size = 4;
        let center = Vec3::splat((size - 1) as f32 / 2.0);
        let cell = IVec3::new(3, 0, 3);
        for face in exterior_faces(cell, size) {
            let outward = cell.as_vec3() - center;
            assert!(outward.dot(face.normal()) > 0.0, "{face:?}");
        }
    }
}

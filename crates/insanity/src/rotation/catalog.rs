//! The 24 proper rotations of a cube, built once per process.
//!
//! Six face-to-front basis changes are each composed with four in-plane turns
//! about the front axis: `net = in_plane * face_to_front`. Entries keep the
//! fixed build order; searches iterate in that order.

use nalgebra::{Matrix4, Rotation3, Unit, Vector3};
use once_cell::sync::Lazy;

use crate::cfg::MATCH_EPS;

/// 4×4 homogeneous rotation (zero translation, zero perspective).
pub type RotationMatrix = Matrix4<f64>;

/// World/local coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// Right-handed rotation by `degrees` about `axis`, as a homogeneous matrix.
pub fn rotation_about(axis: Axis, degrees: f64) -> RotationMatrix {
    Rotation3::from_axis_angle(&axis.unit(), degrees.to_radians()).to_homogeneous()
}

/// Read-only table of the cube rotation group.
#[derive(Clone, Debug)]
pub struct RotationCatalog {
    rotations: Vec<RotationMatrix>,
}

static CATALOG: Lazy<RotationCatalog> = Lazy::new(RotationCatalog::build);

/// Process-wide catalog; computed on first use, never mutated.
pub fn catalog() -> &'static RotationCatalog {
    &CATALOG
}

impl RotationCatalog {
    /// Number of proper rotations of a cube.
    pub const SIZE: usize = 24;

    fn build() -> Self {
        let face_to_front = [
            rotation_about(Axis::Y, 0.0),
            rotation_about(Axis::Y, 180.0),
            rotation_about(Axis::Y, -90.0),
            rotation_about(Axis::Y, 90.0),
            rotation_about(Axis::X, 90.0),
            rotation_about(Axis::X, -90.0),
        ];
        let mut rotations = Vec::with_capacity(Self::SIZE);
        for f in face_to_front {
            for quarter in 0..4 {
                let in_plane = rotation_about(Axis::Z, 90.0 * f64::from(quarter));
                rotations.push(in_plane * f);
            }
        }
        Self { rotations }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&RotationMatrix> {
        self.rotations.get(idx)
    }

    #[inline]
    pub fn as_slice(&self) -> &[RotationMatrix] {
        &self.rotations
    }

    pub fn iter(&self) -> impl Iterator<Item = &RotationMatrix> + '_ {
        self.rotations.iter()
    }

    /// Catalog position of `m`, up to rounding noise.
    pub fn index_of(&self, m: &RotationMatrix) -> Option<usize> {
        self.rotations
            .iter()
            .position(|r| (r - m).amax() < MATCH_EPS)
    }
}

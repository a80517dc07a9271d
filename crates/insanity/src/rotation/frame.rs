//! Local cube frame: face normals, pair axes, and lookups back from world
//! directions. Directions are homogeneous with `w = 0`, so translation never
//! applies.

use nalgebra::{Matrix3, Vector4};

use super::catalog::RotationMatrix;
use crate::cfg::PROPER_EPS;
use crate::puzzle::{Face, PairAxis};

/// Outward normal of `face` in the cube's local frame (y points down).
pub fn local_normal(face: Face) -> Vector4<f64> {
    match face {
        Face::Top => Vector4::new(0.0, -1.0, 0.0, 0.0),
        Face::Left => Vector4::new(-1.0, 0.0, 0.0, 0.0),
        Face::Front => Vector4::new(0.0, 0.0, 1.0, 0.0),
        Face::Right => Vector4::new(1.0, 0.0, 0.0, 0.0),
        Face::Back => Vector4::new(0.0, 0.0, -1.0, 0.0),
        Face::Bottom => Vector4::new(0.0, 1.0, 0.0, 0.0),
    }
}

/// Local axis through the two faces of `pair`.
pub fn pair_axis(pair: PairAxis) -> Vector4<f64> {
    match pair {
        PairAxis::TopBottom => Vector4::new(0.0, 1.0, 0.0, 0.0),
        PairAxis::LeftRight => Vector4::new(1.0, 0.0, 0.0, 0.0),
        PairAxis::FrontBack => Vector4::new(0.0, 0.0, 1.0, 0.0),
    }
}

#[inline]
pub fn world_normal(m: &RotationMatrix, face: Face) -> Vector4<f64> {
    m * local_normal(face)
}

/// Face whose local normal best matches the local direction `dir`.
pub fn face_for_normal(dir: &Vector4<f64>) -> Face {
    let mut best = Face::Top;
    let mut best_dot = f64::NEG_INFINITY;
    for face in Face::ALL {
        let d = local_normal(face).dot(dir);
        if d > best_dot {
            best_dot = d;
            best = face;
        }
    }
    best
}

/// Face of a cube in orientation `m` that points along world direction `dir`.
pub fn face_towards(m: &RotationMatrix, dir: &Vector4<f64>) -> Face {
    face_for_normal(&(m.transpose() * dir))
}

/// Round a drag angle to the nearest quarter turn; halves round up.
pub fn snap_quarter(degrees: f64) -> f64 {
    (degrees / 90.0 + 0.5).floor() * 90.0
}

/// Orthonormal linear part, determinant +1, no translation or perspective.
pub fn is_proper_rotation(m: &RotationMatrix) -> bool {
    let lin: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let gram = lin.transpose() * lin - Matrix3::identity();
    let affine_ok = m.fixed_view::<3, 1>(0, 3).amax() < PROPER_EPS
        && m.fixed_view::<1, 3>(3, 0).amax() < PROPER_EPS
        && (m[(3, 3)] - 1.0).abs() < PROPER_EPS;
    affine_ok && gram.amax() < PROPER_EPS && (lin.determinant() - 1.0).abs() < PROPER_EPS
}

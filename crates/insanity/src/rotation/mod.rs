//! Cube rotations: the fixed 24-element catalog and the local face frame.
//!
//! Purpose
//! - Provide the read-only rotation group used by the orientation search.
//! - Map faces to outward normals and pair indices to local axes, and back.
//!
//! Conventions
//! - Matrices act on column vectors; a rotation applied to a running
//!   orientation composes on the left: `next = turn * current`.
//! - A face's world normal under `m` is `m * local_normal(face)`.

mod catalog;
mod frame;

pub use catalog::{catalog, rotation_about, Axis, RotationCatalog, RotationMatrix};
pub use frame::{
    face_for_normal, face_towards, is_proper_rotation, local_normal, pair_axis, snap_quarter,
    world_normal,
};

#[cfg(test)]
mod tests;

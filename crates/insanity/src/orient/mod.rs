//! Orientation stage: turn a decomposition into one rotation per cube.
//!
//! Purpose
//! - Restrict each cube to catalog rotations that put its `g1` axis on world Z
//!   (front/back) and its `g2` axis on world X (left/right).
//! - Backtrack over cubes until the front colors are pairwise distinct and the
//!   left colors are pairwise distinct.
//!
//! A correct decomposition always admits such a choice, but the search still
//! reports failure instead of assuming it.

mod candidates;
mod search;

pub use candidates::{candidate_sets, filter_candidates, is_axis_aligned, CandidateSet};
pub use search::{facing_colors, solve_orientation, solve_orientation_with_cfg, Orientation};

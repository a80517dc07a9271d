//! Instant Insanity solver.
//!
//! Four cubes, six colored faces each; stack them so every vertical side of the
//! tower shows each of the four colors exactly once.
//!
//! Pipeline
//! - `graph`: opposite-face pairs become edges of a color multigraph; two
//!   edge-disjoint 2-regular subgraphs fix each cube's front/back and
//!   left/right axes.
//! - `orient`: pick one of the 24 cube rotations per cube realizing those axes
//!   with distinct front colors and distinct left colors.
//! - `solve`: both stages, with the two failure kinds kept apart.
//!
//! Every search is synchronous and keeps its state local to one call; the
//! rotation catalog is the only shared state and is read-only.

pub mod api;
pub mod cfg;
pub mod error;
pub mod graph;
pub mod orient;
pub mod puzzle;
pub mod rotation;
pub mod solve;
pub mod tower;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::AlignCfg;
pub use error::{ParseError, SolveError};
pub use solve::{solve, solve_with_cfg, Solution};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{decompose, Decomposition, Edge, Subgraph};
    pub use crate::orient::{solve_orientation, Orientation};
    pub use crate::puzzle::{Color, Face, PairAxis, Preset, Puzzle};
    pub use crate::rotation::{catalog, Axis, RotationMatrix};
    pub use crate::tower::{Side, Tower};
    pub use crate::{solve, AlignCfg, Solution, SolveError};
}

#[cfg(test)]
mod tests_pipeline;

//! Curated surface for front ends (CLI, renderers, benches).
//!
//! Groups the pieces a caller needs to load a puzzle, run each stage on its
//! own, and drive a tower. Internal module paths may move; these names stay.

// Input
pub use crate::puzzle::rand::{draw_scrambled, ReplayToken};
pub use crate::puzzle::{parse_row, paste_row, Color, Cube, Face, PairAxis, Preset, Puzzle};
// Stage 1: decomposition
pub use crate::graph::{
    decompose, decompose_edges, extract_edges, find_regular_subgraph, Decomposition, Edge, EdgeId,
    EdgeSet, Subgraph,
};
// Stage 2: orientation
pub use crate::orient::{candidate_sets, solve_orientation, CandidateSet, Orientation};
pub use crate::rotation::{catalog, rotation_about, Axis, RotationCatalog, RotationMatrix};
// Pipeline and interaction
pub use crate::solve::{solve, solve_with_cfg, Solution};
pub use crate::tower::{Side, Tower};
pub use crate::{AlignCfg, ParseError, SolveError};

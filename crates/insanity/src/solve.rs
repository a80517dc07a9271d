//! End-to-end pipeline: puzzle → decomposition → orientation.

use crate::cfg::AlignCfg;
use crate::error::SolveError;
use crate::graph::{decompose, Decomposition};
use crate::orient::{solve_orientation_with_cfg, Orientation};
use crate::puzzle::Puzzle;

/// A decomposition together with the orientation realizing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub decomposition: Decomposition,
    pub orientation: Orientation,
}

/// Solve with default tolerances.
pub fn solve(puzzle: &Puzzle) -> Result<Solution, SolveError> {
    solve_with_cfg(puzzle, AlignCfg::default())
}

/// First solution under the fixed search order; not canonical, and a
/// solvable puzzle may still report `Decomposition` since `g1` is never
/// revisited.
pub fn solve_with_cfg(puzzle: &Puzzle, cfg: AlignCfg) -> Result<Solution, SolveError> {
    let decomposition = decompose(puzzle).ok_or(SolveError::Decomposition)?;
    let Some(orientation) = solve_orientation_with_cfg(puzzle, &decomposition, cfg) else {
        tracing::warn!("decomposition found but orientation search failed");
        return Err(SolveError::Orientation {
            decomposition: Box::new(decomposition),
        });
    };
    tracing::debug!(front = ?orientation.front, left = ?orientation.left, "solved");
    Ok(Solution {
        decomposition,
        orientation,
    })
}

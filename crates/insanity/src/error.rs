//! Error types for puzzle input and the solver pipeline.
//!
//! The two solver failures stay distinct: a puzzle without a decomposition is a
//! normal "no solution" answer, while a decomposition that cannot be oriented
//! is an internal error. Neither leaves state behind; callers may retry freely.

use thiserror::Error;

use crate::graph::Decomposition;
use crate::puzzle::NUM_CUBES;

/// A single editor row could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {found} cells, a cube has 6 faces")]
    TooManyCells { found: usize },
    #[error("unknown color letter {ch:?} (expected R, G, B, Y or X)")]
    UnknownColor { ch: char },
}

/// Free-text puzzle input rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {} cube rows, found {found}", NUM_CUBES)]
    WrongCubeCount { found: usize },
    #[error("cube {}: {source}", .cube + 1)]
    Row {
        cube: usize,
        #[source]
        source: RowError,
    },
}

/// Solver pipeline failure.
#[derive(Clone, Debug, Error)]
pub enum SolveError {
    /// No pair of edge-disjoint 2-regular subgraphs was found.
    #[error("no solution for this puzzle")]
    Decomposition,
    /// A decomposition exists but no per-cube rotation choice satisfies the
    /// front/left uniqueness constraints.
    #[error("internal error: no valid orientation for the found decomposition")]
    Orientation { decomposition: Box<Decomposition> },
}

impl SolveError {
    /// Short machine-readable kind, used in CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            SolveError::Decomposition => "decomposition",
            SolveError::Orientation { .. } => "orientation",
        }
    }
}

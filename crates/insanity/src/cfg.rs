//! Tolerances for the orientation stage.
//!
//! Catalog matrices are built from `sin`/`cos` and carry rounding noise, so
//! every axis or facing test compares against a threshold instead of exact
//! zeros and ones.

/// Lookup tolerance (max-abs difference) when matching a matrix against the
/// catalog in `RotationCatalog::index_of`.
pub(crate) const MATCH_EPS: f64 = 1e-9;
/// Tolerance for the orthonormality and determinant checks.
pub(crate) const PROPER_EPS: f64 = 1e-9;

/// Alignment thresholds used by candidate filtering and face lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignCfg {
    /// Max deviation of a rotated axis component from 0 or ±1.
    pub axis_eps: f64,
    /// Minimum normal component for a face to count as facing a direction.
    pub normal_min: f64,
}

impl Default for AlignCfg {
    fn default() -> Self {
        Self {
            axis_eps: 0.1,
            normal_min: 0.9,
        }
    }
}

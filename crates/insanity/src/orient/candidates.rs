//! Per-cube candidate rotations consistent with the chosen axes.

use nalgebra::Vector4;

use crate::cfg::AlignCfg;
use crate::graph::Decomposition;
use crate::puzzle::{PairAxis, NUM_CUBES};
use crate::rotation::{catalog, pair_axis, Axis, RotationMatrix};

/// Catalog rotations allowed for one cube, in catalog order.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateSet {
    pub cube: usize,
    pub rotations: Vec<RotationMatrix>,
    /// The filter matched nothing and `rotations` holds only the identity.
    pub fallback: bool,
}

/// `v` lies along world `axis`, either sign.
pub fn is_axis_aligned(v: &Vector4<f64>, axis: Axis, eps: f64) -> bool {
    let (along, off_a, off_b) = match axis {
        Axis::X => (v.x, v.y, v.z),
        Axis::Y => (v.y, v.x, v.z),
        Axis::Z => (v.z, v.x, v.y),
    };
    (along.abs() - 1.0).abs() < eps && off_a.abs() < eps && off_b.abs() < eps
}

/// Rotations sending the `front_back` pair axis onto world Z and the
/// `left_right` pair axis onto world X.
pub fn filter_candidates(
    front_back: PairAxis,
    left_right: PairAxis,
    cfg: AlignCfg,
) -> Vec<RotationMatrix> {
    let a1 = pair_axis(front_back);
    let a2 = pair_axis(left_right);
    catalog()
        .iter()
        .filter(|m| {
            is_axis_aligned(&(*m * a1), Axis::Z, cfg.axis_eps)
                && is_axis_aligned(&(*m * a2), Axis::X, cfg.axis_eps)
        })
        .copied()
        .collect()
}

/// Candidate sets for all cubes of a decomposition. A cube whose filter comes
/// back empty gets the identity instead.
pub fn candidate_sets(decomp: &Decomposition, cfg: AlignCfg) -> [CandidateSet; NUM_CUBES] {
    std::array::from_fn(|cube| {
        let p1 = decomp.g1.edge_for_cube(cube).pair;
        let p2 = decomp.g2.edge_for_cube(cube).pair;
        let rotations = filter_candidates(p1, p2, cfg);
        if rotations.is_empty() {
            tracing::warn!(cube, ?p1, ?p2, "no aligned rotation; using identity");
            CandidateSet {
                cube,
                rotations: vec![RotationMatrix::identity()],
                fallback: true,
            }
        } else {
            CandidateSet {
                cube,
                rotations,
                fallback: false,
            }
        }
    })
}

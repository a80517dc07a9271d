use super::extract::extract_edges;
use super::subgraph::find_regular_subgraph;
use super::types::{Decomposition, EdgeList, EdgeSet};
use crate::puzzle::Puzzle;

/// Extract edges and decompose in one step.
pub fn decompose(puzzle: &Puzzle) -> Option<Decomposition> {
    decompose_edges(extract_edges(puzzle))
}

/// Find `g1`, then `g2` avoiding exactly `g1`'s four edges.
///
/// Each cube then has two edges left for `g2`, so per cube the two chosen
/// edges always sit on different pair axes. Greedy: a `g1` that leaves no
/// valid `g2` is not revisited.
pub fn decompose_edges(all_edges: EdgeList) -> Option<Decomposition> {
    let Some(g1) = find_regular_subgraph(&all_edges, EdgeSet::new()) else {
        tracing::debug!("no 2-regular subgraph for g1");
        return None;
    };
    let Some(g2) = find_regular_subgraph(&all_edges, g1.ids()) else {
        tracing::debug!(g1 = ?g1.ids(), "no 2-regular subgraph disjoint from g1");
        return None;
    };
    tracing::debug!(g1 = ?g1.ids(), g2 = ?g2.ids(), "decomposition found");
    Some(Decomposition { g1, g2, all_edges })
}

use super::types::{Edge, EdgeId, EdgeList, EDGES_PER_CUBE};
use crate::puzzle::{PairAxis, Puzzle};

/// Turn face data into the 12-edge multigraph, three edges per cube in
/// `PairAxis` order. Cannot fail.
pub fn extract_edges(puzzle: &Puzzle) -> EdgeList {
    std::array::from_fn(|i| {
        let cube = i / EDGES_PER_CUBE;
        let pair = PairAxis::ALL[i % EDGES_PER_CUBE];
        let (a, b) = pair.faces();
        let faces = puzzle.cube(cube);
        Edge {
            id: EdgeId(i),
            u: faces[a],
            v: faces[b],
            cube,
            pair,
        }
    })
}

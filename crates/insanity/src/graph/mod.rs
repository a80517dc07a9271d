//! Color multigraph of a puzzle and its decomposition into two 2-regular
//! subgraphs.
//!
//! Purpose
//! - Each cube contributes three edges, one per opposite-face pair, joining
//!   the two colors on that pair.
//! - A 2-regular subgraph picking one edge per cube fixes one tower axis for
//!   every cube; two edge-disjoint ones fix front/back and left/right.
//!
//! Layout
//! - `types.rs` (edges, edge sets, subgraphs), `extract.rs` (edge list),
//!   `subgraph.rs` (DFS for one subgraph), `decompose.rs` (two runs).

mod decompose;
mod extract;
mod subgraph;
mod types;

pub use decompose::{decompose, decompose_edges};
pub use extract::extract_edges;
pub use subgraph::find_regular_subgraph;
pub use types::{
    Decomposition, Degrees, Edge, EdgeId, EdgeList, EdgeSet, Subgraph, EDGES_PER_CUBE, NUM_EDGES,
};

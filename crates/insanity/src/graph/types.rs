//! Data types for the color multigraph and its 2-regular subgraphs.
//!
//! Edges are identified by position (`EdgeId`), never by their color values:
//! two cubes may well contribute identical `(u, v)` pairs.

use crate::puzzle::{Color, PairAxis, NUM_CUBES};

/// Edges per cube, one per opposite-face pair.
pub const EDGES_PER_CUBE: usize = 3;
/// Edges in the full multigraph.
pub const NUM_EDGES: usize = NUM_CUBES * EDGES_PER_CUBE;

/// Position of an edge in the extracted edge list (`cube * 3 + pair`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Unordered color pair contributed by one cube axis. `u == v` is a self-loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub u: Color,
    pub v: Color,
    pub cube: usize,
    pub pair: PairAxis,
}

impl Edge {
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

/// The full extracted multigraph, ordered by `EdgeId`.
pub type EdgeList = [Edge; NUM_EDGES];

/// Identity set of edges (bit `i` = `EdgeId(i)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeSet(u16);

impl EdgeSet {
    #[inline]
    pub fn new() -> Self {
        Self(0)
    }
    #[inline]
    pub fn insert(&mut self, id: EdgeId) {
        self.0 |= 1 << id.0;
    }
    #[inline]
    pub fn contains(&self, id: EdgeId) -> bool {
        self.0 & (1 << id.0) != 0
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<EdgeId> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = EdgeId>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Degree per color; a self-loop adds 2 to its single node.
pub type Degrees = [u8; Color::COUNT];

/// One edge per cube, in cube order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subgraph {
    edges: [Edge; NUM_CUBES],
}

impl Subgraph {
    /// Accepts exactly one edge per cube, listed in cube order.
    pub fn from_edges(edges: &[Edge]) -> Option<Self> {
        let edges: [Edge; NUM_CUBES] = edges.try_into().ok()?;
        edges
            .iter()
            .enumerate()
            .all(|(i, e)| e.cube == i)
            .then_some(Self { edges })
    }

    #[inline]
    pub fn edges(&self) -> &[Edge; NUM_CUBES] {
        &self.edges
    }

    /// The edge chosen for `cube`.
    #[inline]
    pub fn edge_for_cube(&self, cube: usize) -> &Edge {
        &self.edges[cube]
    }

    pub fn ids(&self) -> EdgeSet {
        self.edges.iter().map(|e| e.id).collect()
    }

    pub fn degrees(&self) -> Degrees {
        let mut deg = [0u8; Color::COUNT];
        for e in &self.edges {
            deg[e.u.index()] += 1;
            deg[e.v.index()] += 1;
        }
        deg
    }

    /// Every touched color has degree exactly 2.
    pub fn is_two_regular(&self) -> bool {
        self.degrees().iter().all(|&d| d == 0 || d == 2)
    }
}

/// Two edge-disjoint 2-regular subgraphs: `g1` fixes each cube's front/back
/// axis, `g2` its left/right axis. Keeps the full edge list for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    pub g1: Subgraph,
    pub g2: Subgraph,
    pub all_edges: EdgeList,
}

//! Depth-first search for one 2-regular subgraph (one edge per cube).
//!
//! Cubes are visited in order 0..4 and each cube's edges in `PairAxis` order,
//! so the first subgraph found is fully determined by the input. Degree
//! counters and the selection stack live in the runner; every tentative edge
//! is held by a `ScopedEdge` guard whose `Drop` undoes it, so state is
//! restored on every exit path, early success included.

use std::ops::{Deref, DerefMut};

use super::types::{Degrees, Edge, EdgeList, EdgeSet, Subgraph};
use crate::puzzle::{Color, NUM_CUBES};

/// Max degree of any color node in a 2-regular subgraph.
const MAX_DEGREE: u8 = 2;

/// First 2-regular subgraph in search order that avoids every edge in
/// `excluded` (by identity). `None` if the space is exhausted.
pub fn find_regular_subgraph(edges: &EdgeList, excluded: EdgeSet) -> Option<Subgraph> {
    SubgraphRunner::new(edges, excluded).solve()
}

/// DFS runner carrying per-cube candidates and the mutable search state.
struct SubgraphRunner {
    by_cube: [Vec<Edge>; NUM_CUBES],
    degrees: Degrees,
    stack: Vec<Edge>,
    found: Option<Subgraph>,
}

impl SubgraphRunner {
    fn new(edges: &EdgeList, excluded: EdgeSet) -> Self {
        let by_cube = std::array::from_fn(|c| {
            edges
                .iter()
                .filter(|e| e.cube == c && !excluded.contains(e.id))
                .copied()
                .collect()
        });
        Self {
            by_cube,
            degrees: [0; Color::COUNT],
            stack: Vec::with_capacity(NUM_CUBES),
            found: None,
        }
    }

    fn solve(mut self) -> Option<Subgraph> {
        self.recur(0);
        debug_assert!(self.stack.is_empty());
        debug_assert!(self.degrees.iter().all(|&d| d == 0));
        self.found
    }

    fn recur(&mut self, depth: usize) -> bool {
        if depth == NUM_CUBES {
            if self.degrees.iter().all(|&d| d == 0 || d == MAX_DEGREE) {
                self.found = Subgraph::from_edges(&self.stack);
                return self.found.is_some();
            }
            return false;
        }
        for k in 0..self.by_cube[depth].len() {
            let edge = self.by_cube[depth][k];
            let mut placed = ScopedEdge::place(self, edge);
            if placed.within_limit() && placed.recur(depth + 1) {
                return true;
            }
        }
        false
    }
}

/// A tentatively selected edge; dropping it rolls the runner back.
struct ScopedEdge<'r> {
    runner: &'r mut SubgraphRunner,
    edge: Edge,
}

impl<'r> ScopedEdge<'r> {
    fn place(runner: &'r mut SubgraphRunner, edge: Edge) -> Self {
        runner.degrees[edge.u.index()] += 1;
        runner.degrees[edge.v.index()] += 1;
        runner.stack.push(edge);
        Self { runner, edge }
    }

    fn within_limit(&self) -> bool {
        self.runner.degrees[self.edge.u.index()] <= MAX_DEGREE
            && self.runner.degrees[self.edge.v.index()] <= MAX_DEGREE
    }
}

impl Drop for ScopedEdge<'_> {
    fn drop(&mut self) {
        self.runner.stack.pop();
        self.runner.degrees[self.edge.u.index()] -= 1;
        self.runner.degrees[self.edge.v.index()] -= 1;
    }
}

impl Deref for ScopedEdge<'_> {
    type Target = SubgraphRunner;
    fn deref(&self) -> &SubgraphRunner {
        self.runner
    }
}

impl DerefMut for ScopedEdge<'_> {
    fn deref_mut(&mut self) -> &mut SubgraphRunner {
        self.runner
    }
}

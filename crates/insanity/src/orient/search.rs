//! Depth-first search over per-cube candidates for globally distinct front and
//! left colors.
//!
//! Used-color marks live in the runner and are set through `ScopedMarks`,
//! which clears them on drop, so every backtrack path restores them.

use std::ops::{Deref, DerefMut};

use nalgebra::Vector4;

use super::candidates::{candidate_sets, CandidateSet};
use crate::cfg::AlignCfg;
use crate::graph::Decomposition;
use crate::puzzle::{Color, Cube, Face, Puzzle, NUM_CUBES};
use crate::rotation::{world_normal, RotationMatrix};

/// One rotation per cube plus the colors it puts on the front and left sides.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    pub rotations: [RotationMatrix; NUM_CUBES],
    pub front: [Color; NUM_CUBES],
    pub left: [Color; NUM_CUBES],
}

/// Colors shown on the front (+Z) and left (−X) sides by `cube` under `m`.
pub fn facing_colors(
    cube: &Cube,
    m: &RotationMatrix,
    cfg: AlignCfg,
) -> (Option<Color>, Option<Color>) {
    let mut front = None;
    let mut left = None;
    for face in Face::ALL {
        let n: Vector4<f64> = world_normal(m, face);
        if n.z > cfg.normal_min {
            front = Some(cube.color(face));
        }
        if n.x < -cfg.normal_min {
            left = Some(cube.color(face));
        }
    }
    (front, left)
}

/// Orient every cube with the default tolerances.
pub fn solve_orientation(puzzle: &Puzzle, decomp: &Decomposition) -> Option<Orientation> {
    solve_orientation_with_cfg(puzzle, decomp, AlignCfg::default())
}

/// First orientation in search order (cubes 0..4, candidates in catalog
/// order) whose front colors are pairwise distinct and whose left colors are
/// pairwise distinct.
pub fn solve_orientation_with_cfg(
    puzzle: &Puzzle,
    decomp: &Decomposition,
    cfg: AlignCfg,
) -> Option<Orientation> {
    let sets = candidate_sets(decomp, cfg);
    OrientRunner::new(puzzle, &sets, cfg).solve()
}

struct OrientRunner<'a> {
    puzzle: &'a Puzzle,
    sets: &'a [CandidateSet; NUM_CUBES],
    cfg: AlignCfg,
    used_front: [bool; Color::COUNT],
    used_left: [bool; Color::COUNT],
    chosen: Vec<(RotationMatrix, Color, Color)>,
    found: Option<Orientation>,
}

impl<'a> OrientRunner<'a> {
    fn new(puzzle: &'a Puzzle, sets: &'a [CandidateSet; NUM_CUBES], cfg: AlignCfg) -> Self {
        Self {
            puzzle,
            sets,
            cfg,
            used_front: [false; Color::COUNT],
            used_left: [false; Color::COUNT],
            chosen: Vec::with_capacity(NUM_CUBES),
            found: None,
        }
    }

    fn solve(mut self) -> Option<Orientation> {
        self.recur(0);
        debug_assert!(self.chosen.is_empty());
        self.found
    }

    fn recur(&mut self, depth: usize) -> bool {
        if depth == NUM_CUBES {
            self.found = Some(self.snapshot());
            return true;
        }
        let (sets, puzzle, cfg) = (self.sets, self.puzzle, self.cfg);
        let cube = puzzle.cube(depth);
        for m in &sets[depth].rotations {
            let (Some(front), Some(left)) = facing_colors(cube, m, cfg) else {
                continue;
            };
            if self.used_front[front.index()] || self.used_left[left.index()] {
                continue;
            }
            let mut marked = ScopedMarks::mark(self, *m, front, left);
            if marked.recur(depth + 1) {
                return true;
            }
        }
        false
    }

    fn snapshot(&self) -> Orientation {
        Orientation {
            rotations: std::array::from_fn(|i| self.chosen[i].0),
            front: std::array::from_fn(|i| self.chosen[i].1),
            left: std::array::from_fn(|i| self.chosen[i].2),
        }
    }
}

/// Front/left colors claimed by one tentatively placed cube.
struct ScopedMarks<'r, 'a> {
    runner: &'r mut OrientRunner<'a>,
    front: Color,
    left: Color,
}

impl<'r, 'a> ScopedMarks<'r, 'a> {
    fn mark(
        runner: &'r mut OrientRunner<'a>,
        m: RotationMatrix,
        front: Color,
        left: Color,
    ) -> Self {
        runner.used_front[front.index()] = true;
        runner.used_left[left.index()] = true;
        runner.chosen.push((m, front, left));
        Self {
            runner,
            front,
            left,
        }
    }
}

impl Drop for ScopedMarks<'_, '_> {
    fn drop(&mut self) {
        self.runner.chosen.pop();
        self.runner.used_front[self.front.index()] = false;
        self.runner.used_left[self.left.index()] = false;
    }
}

impl<'a> Deref for ScopedMarks<'_, 'a> {
    type Target = OrientRunner<'a>;
    fn deref(&self) -> &OrientRunner<'a> {
        self.runner
    }
}

impl<'a> DerefMut for ScopedMarks<'_, 'a> {
    fn deref_mut(&mut self) -> &mut OrientRunner<'a> {
        self.runner
    }
}

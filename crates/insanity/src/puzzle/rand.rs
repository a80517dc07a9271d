//! Reproducible random puzzles that are solvable by construction.
//!
//! Model
//! - Build a tower that already wins: each of the four sides gets an
//!   independent permutation of the playable colors; top and bottom are free.
//! - Re-orient every cube by a random catalog rotation, so the face data no
//!   longer shows the solution directly.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Color, Cube, Face, Puzzle, NUM_CUBES, NUM_FACES};
use crate::rotation::{catalog, face_for_normal, world_normal};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A tower whose four sides already show every playable color once, with
/// cubes in the identity orientation.
pub fn draw_solved<R: Rng>(rng: &mut R) -> Puzzle {
    let mut side = || {
        let mut colors = Color::PLAYABLE;
        colors.shuffle(rng);
        colors
    };
    let (front, left, back, right) = (side(), side(), side(), side());
    let cubes: [Cube; NUM_CUBES] = std::array::from_fn(|c| {
        let mut faces = [Color::Unset; NUM_FACES];
        faces[Face::Front.index()] = front[c];
        faces[Face::Left.index()] = left[c];
        faces[Face::Back.index()] = back[c];
        faces[Face::Right.index()] = right[c];
        Cube::new(faces)
    });
    let mut puzzle = Puzzle::new(cubes);
    for cube in &mut puzzle.cubes {
        for face in [Face::Top, Face::Bottom] {
            cube.faces[face.index()] = Color::PLAYABLE[rng.gen_range(0..Color::PLAYABLE.len())];
        }
    }
    puzzle
}

/// Relabel `cube` by catalog entry `rot`: local face `f` takes the color the
/// original shows in direction `rot * n_f`. Turning the result by `rot`
/// therefore shows exactly what the original shows unturned.
pub fn reorient(cube: &Cube, rot: usize) -> Cube {
    let m = &catalog().as_slice()[rot % catalog().len()];
    Cube::new(Face::ALL.map(|f| cube.color(face_for_normal(&world_normal(m, f)))))
}

/// Draw a solvable puzzle for `tok`.
pub fn draw_scrambled(tok: ReplayToken) -> Puzzle {
    let mut rng = tok.to_std_rng();
    let solved = draw_solved(&mut rng);
    Puzzle::new(solved.cubes.map(|c| reorient(&c, rng.gen_range(0..catalog().len()))))
}

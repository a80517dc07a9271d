//! Built-in puzzles.

use super::types::{Color, Puzzle, NUM_CUBES, NUM_FACES};
use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

const STANDARD: [[Color; NUM_FACES]; NUM_CUBES] = [
    [B, R, Y, G, B, R],
    [R, R, Y, B, G, Y],
    [G, B, B, R, Y, G],
    [B, G, Y, R, G, Y],
];

const HARD: [[Color; NUM_FACES]; NUM_CUBES] = [
    [R, B, G, Y, R, G],
    [Y, R, B, R, G, Y],
    [G, Y, R, B, Y, B],
    [B, G, Y, G, R, R],
];

const EXPERT: [[Color; NUM_FACES]; NUM_CUBES] = [
    [Y, G, R, B, G, R],
    [R, B, G, Y, R, Y],
    [G, Y, B, R, Y, B],
    [B, R, Y, G, B, G],
];

/// Named preset puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Standard,
    Hard,
    Expert,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Standard, Preset::Hard, Preset::Expert];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Hard => "hard",
            Preset::Expert => "expert",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn puzzle(self) -> Puzzle {
        Puzzle::from_rows(match self {
            Preset::Standard => STANDARD,
            Preset::Hard => HARD,
            Preset::Expert => EXPERT,
        })
    }
}

//! Puzzle data model: colors, face slots, opposite-face pairs, cubes.
//!
//! - `Color`: the four puzzle colors plus the editor's blank sentinel `X`.
//! - `Face`: fixed face order `[top, left, front, right, back, bottom]`.
//! - `PairAxis`: the three opposite-face pairs; each becomes one graph edge.
//! - `Cube`, `Puzzle`: immutable face data for the four cubes.

use std::fmt;
use std::ops::Index;

/// Number of cubes in a tower.
pub const NUM_CUBES: usize = 4;
/// Number of faces per cube.
pub const NUM_FACES: usize = 6;

/// Face color. `Unset` is a blank editor cell, written `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Unset,
}

impl Color {
    /// Number of distinct labels, sentinel included. Sizes per-color counters.
    pub const COUNT: usize = 5;
    /// The four playable colors, in display order.
    pub const PLAYABLE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Parse a single color letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            'X' => Some(Color::Unset),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Unset => 'X',
        }
    }

    /// Dense index in `0..Color::COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Face slot of a cube in its local frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

impl Face {
    pub const ALL: [Face; NUM_FACES] = [
        Face::Top,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Bottom,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Bottom => Face::Top,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Left => "left",
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Bottom => "bottom",
        }
    }
}

/// Opposite-face pair of a cube (the "pair index" of an edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairAxis {
    TopBottom,
    LeftRight,
    FrontBack,
}

impl PairAxis {
    /// Iteration order used by every search over a cube's edges.
    pub const ALL: [PairAxis; 3] = [PairAxis::TopBottom, PairAxis::LeftRight, PairAxis::FrontBack];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two faces joined by this pair, in edge endpoint order.
    pub fn faces(self) -> (Face, Face) {
        match self {
            PairAxis::TopBottom => (Face::Top, Face::Bottom),
            PairAxis::LeftRight => (Face::Left, Face::Right),
            PairAxis::FrontBack => (Face::Front, Face::Back),
        }
    }
}

/// One cube's face colors, indexed by `Face`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub faces: [Color; NUM_FACES],
}

impl Cube {
    #[inline]
    pub fn new(faces: [Color; NUM_FACES]) -> Self {
        Self { faces }
    }

    #[inline]
    pub fn color(&self, face: Face) -> Color {
        self.faces[face.index()]
    }
}

impl Index<Face> for Cube {
    type Output = Color;
    fn index(&self, face: Face) -> &Color {
        &self.faces[face.index()]
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.faces {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Face data of all four cubes. Immutable once loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Puzzle {
    pub cubes: [Cube; NUM_CUBES],
}

impl Puzzle {
    #[inline]
    pub fn new(cubes: [Cube; NUM_CUBES]) -> Self {
        Self { cubes }
    }

    pub fn from_rows(rows: [[Color; NUM_FACES]; NUM_CUBES]) -> Self {
        Self {
            cubes: rows.map(Cube::new),
        }
    }

    #[inline]
    pub fn cube(&self, idx: usize) -> &Cube {
        &self.cubes[idx]
    }

    /// True if any face is still the blank sentinel.
    pub fn has_unset(&self) -> bool {
        self.cubes
            .iter()
            .any(|c| c.faces.contains(&Color::Unset))
    }
}

/// One row per cube, in editor text form (`BRYGBR`).
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cube) in self.cubes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{cube}")?;
        }
        Ok(())
    }
}

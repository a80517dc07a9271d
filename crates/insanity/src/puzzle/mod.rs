//! Puzzle input: colors, faces, cubes, and the ways a puzzle gets loaded.
//!
//! - `types.rs`: data model (fixed face order `[top, left, front, right, back, bottom]`).
//! - `parse.rs`: editor-style free text, blanks default to `X`.
//! - `presets.rs`: built-in puzzles.
//! - `rand.rs`: reproducible solvable scrambles for tests and benchmarks.

mod parse;
mod presets;
pub mod rand;
mod types;

pub use parse::{parse_row, paste_row};
pub use presets::Preset;
pub use types::{Color, Cube, Face, PairAxis, Puzzle, NUM_CUBES, NUM_FACES};

#[cfg(test)]
mod tests;

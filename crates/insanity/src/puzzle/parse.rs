//! Editor-style text input.
//!
//! Rows are separated by newlines, `;` or `,`. Within a row, letters are
//! upper-cased, `.`, `_` and `-` mark blank cells, other non-letters are
//! ignored, and missing trailing cells default to `X`. `#` starts a comment.

use std::str::FromStr;

use super::types::{Color, Puzzle, NUM_CUBES, NUM_FACES};
use crate::error::{ParseError, RowError};

const BLANK_MARKERS: [char; 3] = ['.', '_', '-'];

/// Parse one cube row. Short rows are padded with `X`.
pub fn parse_row(row: &str) -> Result<[Color; NUM_FACES], RowError> {
    let mut cells = Vec::with_capacity(NUM_FACES);
    for ch in row.chars() {
        if BLANK_MARKERS.contains(&ch) {
            cells.push(Color::Unset);
        } else if ch.is_ascii_alphabetic() {
            cells.push(Color::from_char(ch).ok_or(RowError::UnknownColor { ch })?);
        }
    }
    if cells.len() > NUM_FACES {
        return Err(RowError::TooManyCells { found: cells.len() });
    }
    let mut out = [Color::Unset; NUM_FACES];
    out[..cells.len()].copy_from_slice(&cells);
    Ok(out)
}

/// Pasted text fills a whole row only when exactly six valid letters remain
/// after dropping everything that is not a letter.
pub fn paste_row(text: &str) -> Option<[Color; NUM_FACES]> {
    let letters: Vec<char> = text.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.len() != NUM_FACES {
        return None;
    }
    let mut out = [Color::Unset; NUM_FACES];
    for (slot, ch) in out.iter_mut().zip(letters) {
        *slot = Color::from_char(ch)?;
    }
    Some(out)
}

impl Puzzle {
    /// Parse free text into the fixed 4×6 color array.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(|line| line.split([';', ',']))
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != NUM_CUBES {
            return Err(ParseError::WrongCubeCount { found: rows.len() });
        }
        let mut out = [[Color::Unset; NUM_FACES]; NUM_CUBES];
        for (cube, row) in rows.into_iter().enumerate() {
            out[cube] = parse_row(row).map_err(|source| ParseError::Row { cube, source })?;
        }
        Ok(Puzzle::from_rows(out))
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Puzzle::parse(s)
    }
}

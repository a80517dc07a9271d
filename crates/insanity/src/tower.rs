//! Running cube orientations and the full winning check.
//!
//! Each cube starts at the identity. Manual quarter turns compose on the left
//! (`next = turn * current`), and a solver result replaces all orientations at
//! once. Side colors are read by mapping a world direction back into the
//! cube's local frame.

use nalgebra::Vector4;

use crate::orient::Orientation;
use crate::puzzle::{Color, Puzzle, NUM_CUBES};
use crate::rotation::{face_towards, rotation_about, snap_quarter, Axis, RotationMatrix};

/// Vertical side of the tower, as seen from the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Left,
    Back,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Front, Side::Left, Side::Back, Side::Right];

    /// World direction the side faces.
    pub fn direction(self) -> Vector4<f64> {
        match self {
            Side::Front => Vector4::new(0.0, 0.0, 1.0, 0.0),
            Side::Left => Vector4::new(-1.0, 0.0, 0.0, 0.0),
            Side::Back => Vector4::new(0.0, 0.0, -1.0, 0.0),
            Side::Right => Vector4::new(1.0, 0.0, 0.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tower {
    puzzle: Puzzle,
    orientations: [RotationMatrix; NUM_CUBES],
}

impl Tower {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            orientations: [RotationMatrix::identity(); NUM_CUBES],
        }
    }

    #[inline]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    pub fn orientations(&self) -> &[RotationMatrix; NUM_CUBES] {
        &self.orientations
    }

    /// Turn one cube about a world axis by `degrees`, snapped to a quarter
    /// turn. Returns false when the index is out of range or the drag snaps
    /// to zero.
    pub fn turn_cube(&mut self, cube: usize, axis: Axis, degrees: f64) -> bool {
        let snapped = snap_quarter(degrees);
        let Some(current) = self.orientations.get_mut(cube) else {
            return false;
        };
        if snapped == 0.0 {
            return false;
        }
        *current = rotation_about(axis, snapped) * *current;
        true
    }

    /// Load a solver result.
    pub fn apply(&mut self, orientation: &Orientation) {
        self.orientations = orientation.rotations;
    }

    pub fn reset(&mut self) {
        self.orientations = [RotationMatrix::identity(); NUM_CUBES];
    }

    /// Color shown by `cube` on `side`, or `None` when the index is out of
    /// range.
    pub fn color_on(&self, cube: usize, side: Side) -> Option<Color> {
        let m = self.orientations.get(cube)?;
        Some(self.puzzle.cube(cube).color(face_towards(m, &side.direction())))
    }

    /// Colors per side (outer index follows `Side::ALL`), top cube first.
    pub fn sides(&self) -> [[Color; NUM_CUBES]; 4] {
        Side::ALL.map(|side| {
            std::array::from_fn(|cube| {
                let face = face_towards(&self.orientations[cube], &side.direction());
                self.puzzle.cube(cube).color(face)
            })
        })
    }

    /// Every vertical side shows four pairwise distinct colors, none blank.
    pub fn is_solved(&self) -> bool {
        self.sides().iter().all(|colors| {
            let mut seen = [false; Color::COUNT];
            colors.iter().all(|&c| {
                let fresh = c != Color::Unset && !seen[c.index()];
                seen[c.index()] = true;
                fresh
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::decompose;
    use crate::orient::solve_orientation;
    use crate::puzzle::{Color, Preset};

    #[test]
    fn identity_tower_reads_local_faces() {
        let t = Tower::new(Preset::Standard.puzzle());
        // B R Y G B R: left R, front Y, right G, back B.
        assert_eq!(t.color_on(0, Side::Front), Some(Color::Yellow));
        assert_eq!(t.color_on(0, Side::Left), Some(Color::Red));
        assert_eq!(t.color_on(0, Side::Back), Some(Color::Blue));
        assert_eq!(t.color_on(0, Side::Right), Some(Color::Green));
        assert!(!t.is_solved());
    }

    #[test]
    fn solver_result_solves_all_four_sides() {
        for preset in Preset::ALL {
            let p = preset.puzzle();
            let d = decompose(&p).unwrap();
            let o = solve_orientation(&p, &d).unwrap();
            let mut t = Tower::new(p);
            t.apply(&o);
            assert_eq!(t.sides()[0], o.front);
            assert_eq!(t.sides()[1], o.left);
            assert!(t.is_solved(), "{}", preset.name());
            t.reset();
            assert_eq!(t, Tower::new(p));
        }
    }

    #[test]
    fn quarter_turns_compose_on_the_left() {
        let mut t = Tower::new(Preset::Standard.puzzle());
        assert!(t.turn_cube(0, Axis::Y, 80.0));
        assert!(t.turn_cube(0, Axis::X, -100.0));
        let expected = rotation_about(Axis::X, -90.0) * rotation_about(Axis::Y, 90.0);
        assert!((t.orientations()[0] - expected).amax() < 1e-12);
        // Ry(+90) carries the local front normal onto world +X.
        let mut u = Tower::new(Preset::Standard.puzzle());
        u.turn_cube(0, Axis::Y, 90.0);
        assert_eq!(u.color_on(0, Side::Right), Some(Color::Yellow));
    }

    #[test]
    fn small_drags_and_bad_indices_do_nothing() {
        let mut t = Tower::new(Preset::Hard.puzzle());
        assert!(!t.turn_cube(1, Axis::Z, 30.0));
        assert!(!t.turn_cube(4, Axis::Z, 90.0));
        assert_eq!(t, Tower::new(Preset::Hard.puzzle()));
        assert_eq!(t.color_on(4, Side::Front), None);
        assert_eq!(t.color_on(usize::MAX, Side::Left), None);
        // Four quarter turns come back to the start.
        for _ in 0..4 {
            assert!(t.turn_cube(2, Axis::Z, 90.0));
        }
        assert!((t.orientations()[2] - RotationMatrix::identity()).amax() < 1e-9);
    }

    #[test]
    fn blank_faces_never_count_as_solved() {
        let mut t = Tower::new(
            crate::puzzle::Puzzle::parse("XXXXXX\nXXXXXX\nXXXXXX\nXXXXXX").unwrap(),
        );
        assert!(!t.is_solved());
        t.turn_cube(0, Axis::Y, 90.0);
        assert!(!t.is_solved());
    }
}

use super::*;
use crate::puzzle::{Face, PairAxis};
use nalgebra::{Matrix4, Vector4};

#[test]
fn catalog_has_24_distinct_proper_rotations() {
    let cat = catalog();
    assert_eq!(cat.len(), RotationCatalog::SIZE);
    for (i, m) in cat.iter().enumerate() {
        assert!(is_proper_rotation(m), "entry {i} is not a proper rotation");
        for (j, other) in cat.iter().enumerate().skip(i + 1) {
            assert!((m - other).amax() > 0.5, "entries {i} and {j} coincide");
        }
    }
}

#[test]
fn catalog_is_shared_and_starts_at_identity() {
    assert!(std::ptr::eq(catalog(), catalog()));
    assert!((catalog().as_slice()[0] - Matrix4::identity()).amax() < 1e-12);
    assert_eq!(catalog().index_of(&Matrix4::identity()), Some(0));
}

#[test]
fn index_of_matches_within_lookup_tolerance() {
    for (i, m) in catalog().iter().enumerate() {
        let noisy = m.map(|x| x + 0.5 * crate::cfg::MATCH_EPS);
        assert_eq!(catalog().index_of(&noisy), Some(i));
    }
    // Composed turns carry rounding noise but still resolve.
    let z180 = rotation_about(Axis::Z, 90.0) * rotation_about(Axis::Z, 90.0);
    assert_eq!(catalog().index_of(&z180), catalog().index_of(&rotation_about(Axis::Z, 180.0)));
    assert!(catalog().index_of(&z180).is_some());
    // Off by more than the tolerance, or not a rotation at all.
    let off = catalog().as_slice()[5].map(|x| x + 1e-6);
    assert_eq!(catalog().index_of(&off), None);
    assert_eq!(catalog().index_of(&Matrix4::zeros()), None);
}

#[test]
fn in_plane_turn_composes_on_the_left() {
    // Entry 13 = Rz(90) * Ry(90); the two factors do not commute.
    let left = rotation_about(Axis::Z, 90.0) * rotation_about(Axis::Y, 90.0);
    let right = rotation_about(Axis::Y, 90.0) * rotation_about(Axis::Z, 90.0);
    let got = catalog().get(13).unwrap();
    assert!((got - left).amax() < 1e-12);
    assert!((got - right).amax() > 0.5);
}

#[test]
fn every_face_reaches_the_front_in_exactly_four_entries() {
    let front = Vector4::new(0.0, 0.0, 1.0, 0.0);
    for face in Face::ALL {
        let hits = catalog()
            .iter()
            .filter(|m| world_normal(m, face).dot(&front) > 0.9)
            .count();
        assert_eq!(hits, 4, "{face:?}");
    }
}

#[test]
fn normals_are_opposite_per_pair_and_parallel_to_the_axis() {
    for pair in PairAxis::ALL {
        let (a, b) = pair.faces();
        assert_eq!(a.opposite(), b);
        let na = local_normal(a);
        let nb = local_normal(b);
        assert!((na + nb).norm() < 1e-12);
        assert!((na.dot(&pair_axis(pair)).abs() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn face_lookup_inverts_world_normals() {
    for m in catalog().iter() {
        for face in Face::ALL {
            let w = world_normal(m, face);
            assert_eq!(face_towards(m, &w), face);
        }
    }
    assert_eq!(
        face_for_normal(&Vector4::new(0.1, -0.95, 0.2, 0.0)),
        Face::Top
    );
}

#[test]
fn quarter_turns_snap_like_a_drag() {
    assert_eq!(snap_quarter(0.0), 0.0);
    assert_eq!(snap_quarter(44.0), 0.0);
    assert_eq!(snap_quarter(45.0), 90.0);
    assert_eq!(snap_quarter(-44.0), 0.0);
    assert_eq!(snap_quarter(-46.0), -90.0);
    assert_eq!(snap_quarter(-45.0), 0.0);
    assert_eq!(snap_quarter(200.0), 180.0);
}

#[test]
fn non_rotations_are_rejected() {
    let mut mirror = Matrix4::identity();
    mirror[(0, 0)] = -1.0;
    assert!(!is_proper_rotation(&mirror));
    let mut shifted = Matrix4::identity();
    shifted[(0, 3)] = 2.0;
    assert!(!is_proper_rotation(&shifted));
    assert!(is_proper_rotation(&rotation_about(Axis::X, 90.0)));
}

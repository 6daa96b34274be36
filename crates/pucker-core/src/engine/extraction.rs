use crate::core::models::molecule::Molecule;
use crate::core::models::ring::RingGeometry;
use crate::engine::error::PuckerError;
use nalgebra::Point3;

/// Resolves an ordered ring geometry from a molecule by atom name.
///
/// The output order exactly follows `query_names`; the caller supplies
/// ring-connectivity order. Each name must resolve to exactly one atom.
///
/// # Errors
///
/// [`PuckerError::UnknownAtom`] when a name is absent or duplicated,
/// [`PuckerError::RingSizeMismatch`] when the query length differs from
/// `expected_size`, and [`PuckerError::InvalidParameter`] on non-finite
/// coordinates.
pub fn ring_from_names(
    molecule: &Molecule,
    query_names: &[&str],
    expected_size: usize,
) -> Result<RingGeometry, PuckerError> {
    if query_names.len() != expected_size {
        return Err(PuckerError::RingSizeMismatch {
            expected: expected_size,
            actual: query_names.len(),
        });
    }

    let mut points = Vec::with_capacity(query_names.len());
    for &name in query_names {
        let mut found: Option<usize> = None;
        let mut matches = 0;
        for (i, candidate) in molecule.atom_names.iter().enumerate() {
            if candidate == name {
                matches += 1;
                found = Some(i);
            }
        }
        if matches != 1 {
            return Err(PuckerError::UnknownAtom {
                name: name.to_string(),
                matches,
            });
        }
        points.push(molecule.coordinates[found.expect("matches == 1")]);
    }

    ensure_finite(&points)?;
    Ok(RingGeometry::new(points))
}

/// Resolves an ordered ring geometry from explicit 0-based indices into a
/// coordinate table.
///
/// # Errors
///
/// [`PuckerError::IndexOutOfBounds`] on a bad index,
/// [`PuckerError::RingSizeMismatch`] on a wrong index count, and
/// [`PuckerError::InvalidParameter`] on non-finite coordinates.
pub fn ring_from_indices(
    coordinates: &[Point3<f64>],
    indices: &[usize],
    expected_size: usize,
) -> Result<RingGeometry, PuckerError> {
    if indices.len() != expected_size {
        return Err(PuckerError::RingSizeMismatch {
            expected: expected_size,
            actual: indices.len(),
        });
    }

    let mut points = Vec::with_capacity(indices.len());
    for &index in indices {
        let point = coordinates
            .get(index)
            .ok_or(PuckerError::IndexOutOfBounds {
                index,
                len: coordinates.len(),
            })?;
        points.push(*point);
    }

    ensure_finite(&points)?;
    Ok(RingGeometry::new(points))
}

fn ensure_finite(points: &[Point3<f64>]) -> Result<(), PuckerError> {
    for (i, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(PuckerError::InvalidParameter(format!(
                "non-finite coordinate for ring atom {i}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Molecule {
        let names = ["O4'", "C1'", "C2'", "C3'", "C4'", "C5'", "H1'"];
        Molecule::new(
            names.iter().map(|s| s.to_string()).collect(),
            (0..names.len())
                .map(|i| Point3::new(i as f64, 2.0 * i as f64, 0.5))
                .collect(),
        )
    }

    #[test]
    fn resolves_names_in_query_order() {
        let mol = fixture();
        let ring =
            ring_from_names(&mol, &["C4'", "C3'", "C2'", "C1'", "O4'"], 5).unwrap();
        assert_eq!(ring.len(), 5);
        // first entry is C4' (index 4 in the fixture)
        assert_eq!(ring.points()[0], Point3::new(4.0, 8.0, 0.5));
        assert_eq!(ring.points()[4], Point3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn absent_name_is_unknown_atom() {
        let mol = fixture();
        let err = ring_from_names(&mol, &["O4'", "C1'", "C2'", "C3'", "XX'"], 5).unwrap_err();
        assert_eq!(
            err,
            PuckerError::UnknownAtom {
                name: "XX'".to_string(),
                matches: 0
            }
        );
    }

    #[test]
    fn duplicated_name_is_unknown_atom() {
        let mut mol = fixture();
        mol.atom_names[5] = "C1'".to_string(); // duplicate C1'
        let err = ring_from_names(&mol, &["O4'", "C1'", "C2'", "C3'", "C4'"], 5).unwrap_err();
        assert_eq!(
            err,
            PuckerError::UnknownAtom {
                name: "C1'".to_string(),
                matches: 2
            }
        );
    }

    #[test]
    fn wrong_query_length_is_size_mismatch() {
        let mol = fixture();
        let err = ring_from_names(&mol, &["O4'", "C1'", "C2'", "C3'"], 5).unwrap_err();
        assert_eq!(
            err,
            PuckerError::RingSizeMismatch {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn four_indices_into_a_sixring_transform_is_size_mismatch() {
        let mol = fixture();
        let err = ring_from_indices(&mol.coordinates, &[0, 1, 2, 3], 6).unwrap_err();
        assert_eq!(
            err,
            PuckerError::RingSizeMismatch {
                expected: 6,
                actual: 4
            }
        );
    }

    #[test]
    fn out_of_bounds_index_is_reported() {
        let mol = fixture();
        let err = ring_from_indices(&mol.coordinates, &[0, 1, 2, 3, 99], 5).unwrap_err();
        assert_eq!(err, PuckerError::IndexOutOfBounds { index: 99, len: 7 });
    }

    #[test]
    fn non_finite_coordinate_is_invalid_parameter() {
        let mut mol = fixture();
        mol.coordinates[2] = Point3::new(f64::NAN, 0.0, 0.0);
        let err = ring_from_indices(&mol.coordinates, &[0, 1, 2, 3, 4], 5).unwrap_err();
        assert!(matches!(err, PuckerError::InvalidParameter(_)));
    }
}

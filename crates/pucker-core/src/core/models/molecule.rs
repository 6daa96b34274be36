use nalgebra::Point3;

/// An immutable snapshot of a parsed molecule: atom names and coordinates.
///
/// The two lists are index-aligned; `atom_names[i]` labels `coordinates[i]`.
/// Names may repeat (e.g. across residues in a multi-residue PDB) — ambiguity
/// is only an error at ring-extraction time, when a query name must resolve to
/// exactly one atom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    /// The atom names, in file order (e.g. "O4'", "C1'").
    pub atom_names: Vec<String>,
    /// The 3D coordinates of each atom in Angstroms, index-aligned with `atom_names`.
    pub coordinates: Vec<Point3<f64>>,
}

impl Molecule {
    /// Creates a molecule from index-aligned name and coordinate lists.
    pub fn new(atom_names: Vec<String>, coordinates: Vec<Point3<f64>>) -> Self {
        debug_assert_eq!(atom_names.len(), coordinates.len());
        Self {
            atom_names,
            coordinates,
        }
    }

    /// The number of atoms in the snapshot.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` if the snapshot contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_molecule_keeps_alignment_and_order() {
        let m = Molecule::new(
            vec!["O4'".to_string(), "C1'".to_string()],
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.5, 0.0, 0.0)],
        );
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
        assert_eq!(m.atom_names[1], "C1'");
        assert_eq!(m.coordinates[1], Point3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn default_molecule_is_empty() {
        let m = Molecule::default();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }
}

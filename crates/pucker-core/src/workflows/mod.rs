//! # Workflows Module
//!
//! The highest-level, user-facing layer: it ties the `core` data models and
//! the `engine` transforms into the three end-user operations of the
//! library — analyze a ring out of a molecule, invert a descriptor back
//! into Cartesian coordinates, and generate descriptor-space sampling
//! grids. The CLI is a thin shell over these entry points.

use crate::core::models::descriptor::PuckeringDescriptor;
use crate::core::models::molecule::Molecule;
use crate::core::models::ring::RingGeometry;
use crate::engine::error::PuckerError;
use crate::engine::{altona_sundaralingam, cremer_pople, extraction, strauss_pickett};
use std::str::FromStr;
use tracing::instrument;

pub use crate::engine::sampling::fivering::{FiveringGrid, sample_fivering};
pub use crate::engine::sampling::peptide::{PeptideGrid, sample_peptide};
pub use crate::engine::sampling::sixring::{SixringGrid, sample_sixring};

/// Ring atom names emitted alongside inverted five-membered geometries,
/// in ring-connectivity order (furanose convention).
pub const FURANOSE_RING_ATOMS: [&str; 5] = ["O4'", "C1'", "C2'", "C3'", "C4'"];

/// Ring atom names emitted alongside inverted six-membered geometries,
/// in ring-connectivity order (pyranose convention).
pub const PYRANOSE_RING_ATOMS: [&str; 6] = ["O5'", "C1'", "C2'", "C3'", "C4'", "C5'"];

/// The descriptor family to compute in an [`analyze`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formalism {
    /// Cremer-Pople, five-membered rings.
    CremerPople5,
    /// Cremer-Pople, six-membered rings.
    CremerPople6,
    /// Altona-Sundaralingam, five-membered rings.
    AltonaSundaralingam,
    /// Strauss-Pickett, six-membered rings.
    StraussPickett,
}

impl Formalism {
    /// The ring size this formalism requires.
    pub fn ring_size(&self) -> usize {
        match self {
            Self::CremerPople5 | Self::AltonaSundaralingam => 5,
            Self::CremerPople6 | Self::StraussPickett => 6,
        }
    }
}

impl FromStr for Formalism {
    type Err = PuckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cp5" | "cremer-pople-5" => Ok(Self::CremerPople5),
            "cp6" | "cremer-pople-6" => Ok(Self::CremerPople6),
            "as" | "altona-sundaralingam" => Ok(Self::AltonaSundaralingam),
            "sp" | "strauss-pickett" => Ok(Self::StraussPickett),
            other => Err(PuckerError::InvalidParameter(format!(
                "unknown formalism '{other}' (expected cp5, cp6, as, or sp)"
            ))),
        }
    }
}

/// Selects the ring atoms out of a molecule snapshot, in connectivity order.
#[derive(Debug, Clone, PartialEq)]
pub enum RingSelection {
    /// Resolve by atom name; each name must match exactly one atom.
    Names(Vec<String>),
    /// Take explicit 0-based indices into the coordinate table.
    Indices(Vec<usize>),
}

/// Extracts the selected ring from a molecule and computes the requested
/// puckering descriptor.
///
/// # Errors
///
/// Propagates extraction failures ([`PuckerError::UnknownAtom`],
/// [`PuckerError::IndexOutOfBounds`], [`PuckerError::RingSizeMismatch`])
/// and transform failures ([`PuckerError::DegenerateRing`]).
#[instrument(level = "debug", skip(molecule))]
pub fn analyze(
    molecule: &Molecule,
    selection: &RingSelection,
    formalism: Formalism,
) -> Result<PuckeringDescriptor, PuckerError> {
    let ring = extract(molecule, selection, formalism.ring_size())?;
    match formalism {
        Formalism::CremerPople5 => cremer_pople::cp5_forward(&ring),
        Formalism::CremerPople6 => cremer_pople::cp6_forward(&ring),
        Formalism::AltonaSundaralingam => altona_sundaralingam::as_forward(&ring),
        Formalism::StraussPickett => strauss_pickett::sp_forward(&ring),
    }
}

fn extract(
    molecule: &Molecule,
    selection: &RingSelection,
    size: usize,
) -> Result<RingGeometry, PuckerError> {
    match selection {
        RingSelection::Names(names) => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            extraction::ring_from_names(molecule, &names, size)
        }
        RingSelection::Indices(indices) => {
            extraction::ring_from_indices(&molecule.coordinates, indices, size)
        }
    }
}

/// Inverts a descriptor into a representative ring geometry, paired with
/// the conventional ring atom names for writing.
///
/// Altona-Sundaralingam descriptors take the documented path through the
/// exact conversion to Cremer-Pople before inversion; Strauss-Pickett
/// defines no inverse.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] for out-of-domain descriptor values or
/// a Strauss-Pickett descriptor.
#[instrument(level = "debug")]
pub fn invert(
    descriptor: &PuckeringDescriptor,
) -> Result<(RingGeometry, &'static [&'static str]), PuckerError> {
    match *descriptor {
        PuckeringDescriptor::CremerPople5 { amplitude, phase } => Ok((
            cremer_pople::cp5_inverse(amplitude, phase)?,
            &FURANOSE_RING_ATOMS,
        )),
        PuckeringDescriptor::CremerPople6 {
            amplitude,
            phase,
            theta,
        } => Ok((
            cremer_pople::cp6_inverse(amplitude, phase, theta)?,
            &PYRANOSE_RING_ATOMS,
        )),
        PuckeringDescriptor::AltonaSundaralingam { amplitude, phase } => {
            match altona_sundaralingam::as_to_cp5(amplitude, phase)? {
                PuckeringDescriptor::CremerPople5 { amplitude, phase } => Ok((
                    cremer_pople::cp5_inverse(amplitude, phase)?,
                    &FURANOSE_RING_ATOMS,
                )),
                other => unreachable!("as_to_cp5 returned {other:?}"),
            }
        }
        PuckeringDescriptor::StraussPickett { .. } => Err(PuckerError::InvalidParameter(
            "Strauss-Pickett descriptors define no inverse".to_string(),
        )),
    }
}

/// Packages an inverted ring as a molecule snapshot ready for writing.
pub fn to_molecule(ring: RingGeometry, atom_names: &[&str]) -> Molecule {
    Molecule::new(
        atom_names.iter().map(|s| s.to_string()).collect(),
        ring.into_points(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn furanose_molecule() -> Molecule {
        // A C3'-endo-like ring embedded among decoy atoms.
        let (ring, names) = invert(&PuckeringDescriptor::CremerPople5 {
            amplitude: 0.35,
            phase: 288.0,
        })
        .unwrap();
        let mut molecule = to_molecule(ring, names);
        molecule.atom_names.push("H1'".to_string());
        molecule
            .coordinates
            .push(nalgebra::Point3::new(5.0, 5.0, 5.0));
        molecule
    }

    #[test]
    fn analyze_by_names_recovers_the_descriptor() {
        let molecule = furanose_molecule();
        let selection = RingSelection::Names(
            FURANOSE_RING_ATOMS.iter().map(|s| s.to_string()).collect(),
        );
        match analyze(&molecule, &selection, Formalism::CremerPople5).unwrap() {
            PuckeringDescriptor::CremerPople5 { amplitude, phase } => {
                assert_relative_eq!(amplitude, 0.35, epsilon = 1e-9);
                assert_relative_eq!(phase, 288.0, epsilon = 1e-6);
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn analyze_by_indices_matches_names() {
        let molecule = furanose_molecule();
        let by_index = analyze(
            &molecule,
            &RingSelection::Indices(vec![0, 1, 2, 3, 4]),
            Formalism::AltonaSundaralingam,
        )
        .unwrap();
        match by_index {
            PuckeringDescriptor::AltonaSundaralingam { phase, .. } => {
                assert_relative_eq!(phase, 18.0, epsilon = 1e-6);
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn analyze_enforces_the_formalism_ring_size() {
        let molecule = furanose_molecule();
        let selection = RingSelection::Indices(vec![0, 1, 2, 3, 4]);
        assert!(matches!(
            analyze(&molecule, &selection, Formalism::CremerPople6),
            Err(PuckerError::RingSizeMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn altona_inversion_routes_through_cremer_pople() {
        let (ring, names) = invert(&PuckeringDescriptor::AltonaSundaralingam {
            amplitude: 35.875,
            phase: 18.0,
        })
        .unwrap();
        assert_eq!(names, FURANOSE_RING_ATOMS);
        // 35.875 / 102.5 = 0.35 A at CP phase 288.
        match crate::engine::cremer_pople::cp5_forward(&ring).unwrap() {
            PuckeringDescriptor::CremerPople5 { amplitude, phase } => {
                assert_relative_eq!(amplitude, 0.35, epsilon = 1e-9);
                assert_relative_eq!(phase, 288.0, epsilon = 1e-6);
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn strauss_pickett_has_no_inverse() {
        let err = invert(&PuckeringDescriptor::StraussPickett {
            alphas: [0.0; 3],
            betas: [109.5; 3],
        })
        .unwrap_err();
        assert!(matches!(err, PuckerError::InvalidParameter(_)));
    }

    #[test]
    fn formalism_parses_from_short_names() {
        assert_eq!(Formalism::from_str("cp5").unwrap(), Formalism::CremerPople5);
        assert_eq!(Formalism::from_str("CP6").unwrap(), Formalism::CremerPople6);
        assert_eq!(
            Formalism::from_str("as").unwrap(),
            Formalism::AltonaSundaralingam
        );
        assert_eq!(
            Formalism::from_str("strauss-pickett").unwrap(),
            Formalism::StraussPickett
        );
        assert!(Formalism::from_str("cp7").is_err());
    }
}

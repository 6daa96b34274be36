pub mod analyze;
pub mod invert;
pub mod sample;

use crate::error::{CliError, Result};
use puckerpp::core::io::pdb::PdbFile;
use puckerpp::core::io::traits::MoleculeFile;
use puckerpp::core::io::xyz::XyzFile;
use puckerpp::core::models::molecule::Molecule;
use std::path::Path;

/// Structure file formats the CLI reads and writes, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Pdb,
    Xyz,
}

impl StructureFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("pdb") => Ok(Self::Pdb),
            Some("xyz") => Ok(Self::Xyz),
            _ => Err(CliError::Argument(format!(
                "cannot infer structure format from '{}' (expected .pdb or .xyz)",
                path.display()
            ))),
        }
    }
}

pub fn read_molecule(path: &Path) -> Result<Molecule> {
    match StructureFormat::from_path(path)? {
        StructureFormat::Pdb => Ok(PdbFile::read_from_path(path)?),
        StructureFormat::Xyz => Ok(XyzFile::read_from_path(path)?),
    }
}

pub fn write_molecule(molecule: &Molecule, path: &Path) -> Result<()> {
    match StructureFormat::from_path(path)? {
        StructureFormat::Pdb => Ok(PdbFile::write_to_path(molecule, path)?),
        StructureFormat::Xyz => Ok(XyzFile::write_to_path(molecule, path)?),
    }
}

use crate::core::io::traits::MoleculeFile;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("No ATOM/HETATM records found")]
    Empty,
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Invalid residue sequence number (value: '{value}')")]
    InvalidResidueNumber { value: String },
    #[error("Line is too short for an ATOM/HETATM record (needs 54 columns)")]
    LineTooShort,
    #[error("Atom name field in columns 13-16 is empty")]
    MissingAtomName,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coord(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse::<f64>().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: raw.to_string(),
        },
    })
}

fn parse_atom_record(line: &str, line_num: usize) -> Result<(String, Point3<f64>), PdbError> {
    if line.len() < 54 {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }
    let name = slice_and_trim(line, 12, 16);
    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingAtomName,
        });
    }
    let x = parse_coord(line, line_num, 30, 38)?;
    let y = parse_coord(line, line_num, 38, 46)?;
    let z = parse_coord(line, line_num, 46, 54)?;
    Ok((name.to_string(), Point3::new(x, y, z)))
}

fn is_atom_record(line: &str) -> bool {
    line.starts_with("ATOM") || line.starts_with("HETATM")
}

/// Single-molecule PDB reader/writer.
///
/// Reading collects every ATOM/HETATM record in file order: the atom name
/// from columns 13-16 and the orthogonal coordinates from columns 31-54.
/// All other record types are ignored. Writing emits one fixed-width ATOM
/// record per atom, with the element symbol inferred from the first
/// alphabetic character of the atom name.
pub struct PdbFile;

impl MoleculeFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let mut atom_names = Vec::new();
        let mut coordinates = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if !is_atom_record(&line) {
                continue;
            }
            let (name, position) = parse_atom_record(&line, line_num + 1)?;
            atom_names.push(name);
            coordinates.push(position);
        }

        if atom_names.is_empty() {
            return Err(PdbError::Empty);
        }
        Ok(Molecule::new(atom_names, coordinates))
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        for (i, (name, pos)) in molecule
            .atom_names
            .iter()
            .zip(molecule.coordinates.iter())
            .enumerate()
        {
            let element = name
                .chars()
                .find(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('X');
            writeln!(
                writer,
                "ATOM  {:>5} {:<4} {:>3} A{:>4}    {:8.3}{:8.3}{:8.3}  1.00  0.00          {:>2}",
                i + 1,
                name,
                "LIG",
                1,
                pos.x,
                pos.y,
                pos.z,
                element
            )?;
        }
        writeln!(writer, "END")?;
        Ok(())
    }
}

impl PdbFile {
    /// Reads a multi-residue PDB and splits it at every change of the residue
    /// sequence number (columns 23-26), one [`Molecule`] per residue.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed ATOM/HETATM records or when the file
    /// holds none at all.
    pub fn read_by_residue(reader: &mut impl BufRead) -> Result<Vec<Molecule>, PdbError> {
        let mut molecules = Vec::new();
        let mut names = Vec::new();
        let mut coords = Vec::new();
        let mut current_residue: Option<isize> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if !is_atom_record(&line) {
                continue;
            }
            let line_num = line_num + 1;
            let res_raw = slice_and_trim(&line, 22, 26);
            let residue = res_raw.parse::<isize>().map_err(|_| PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::InvalidResidueNumber {
                    value: res_raw.to_string(),
                },
            })?;

            if current_residue.is_some_and(|r| r != residue) {
                molecules.push(Molecule::new(
                    std::mem::take(&mut names),
                    std::mem::take(&mut coords),
                ));
            }
            current_residue = Some(residue);

            let (name, position) = parse_atom_record(&line, line_num)?;
            names.push(name);
            coords.push(position);
        }

        if names.is_empty() {
            return Err(PdbError::Empty);
        }
        molecules.push(Molecule::new(names, coords));
        Ok(molecules)
    }
}

use crate::core::io::traits::MoleculeFile;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: invalid float (value: '{value}')")]
    InvalidFloat { line: usize, value: String },
    #[error("No coordinate records found")]
    Empty,
}

/// XYZ reader/writer.
///
/// The two-line header (atom count, comment) is skipped on read; every
/// following line with exactly four whitespace-separated fields is taken as
/// `element x y z`. Lines with any other field count are ignored, matching
/// the tolerant behavior of common converters.
pub struct XyzFile;

impl MoleculeFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let mut atom_names = Vec::new();
        let mut coordinates = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if line_num < 2 {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 4 {
                continue;
            }
            let mut xyz = [0.0_f64; 3];
            for (slot, raw) in xyz.iter_mut().zip(&fields[1..]) {
                *slot = raw.parse::<f64>().map_err(|_| XyzError::InvalidFloat {
                    line: line_num + 1,
                    value: (*raw).to_string(),
                })?;
            }
            atom_names.push(fields[0].to_string());
            coordinates.push(Point3::new(xyz[0], xyz[1], xyz[2]));
        }

        if atom_names.is_empty() {
            return Err(XyzError::Empty);
        }
        Ok(Molecule::new(atom_names, coordinates))
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", molecule.len())?;
        writeln!(writer, "generated by puckerpp")?;
        for (name, pos) in molecule.atom_names.iter().zip(molecule.coordinates.iter()) {
            writeln!(
                writer,
                "{:<4} {:>14.8} {:>14.8} {:>14.8}",
                name, pos.x, pos.y, pos.z
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::BufReader;

    const SAMPLE: &str = "\
4
Coordinates from a conformer optimization
  H   4.01196826     2.03352822     2.01847310
  O   3.76770440     1.71999235     1.14581625
  C   2.53548022     2.32709191     0.78140278
  H   2.69801966     3.28480341     0.28455391
";

    #[test]
    fn read_skips_header_and_parses_records() {
        let mol = XyzFile::read_from(&mut BufReader::new(SAMPLE.as_bytes())).unwrap();
        assert_eq!(mol.len(), 4);
        assert_eq!(mol.atom_names[1], "O");
        assert_relative_eq!(mol.coordinates[2].y, 2.32709191, epsilon = 1e-9);
    }

    #[test]
    fn read_ignores_lines_with_wrong_field_count() {
        let noisy = "2\ncomment\nO 1.0 2.0 3.0\nsome trailing note\nC 0.0 0.0 1.0\n";
        let mol = XyzFile::read_from(&mut BufReader::new(noisy.as_bytes())).unwrap();
        assert_eq!(mol.len(), 2);
    }

    #[test]
    fn read_reports_bad_float() {
        let bad = "1\ncomment\nO one 2.0 3.0\n";
        let err = XyzFile::read_from(&mut BufReader::new(bad.as_bytes())).unwrap_err();
        match err {
            XyzError::InvalidFloat { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "one");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let mol = Molecule::new(
            vec!["O".into(), "C".into()],
            vec![
                Point3::new(3.76770440, 1.71999235, 1.14581625),
                Point3::new(-2.53548022, 0.0, 42.5),
            ],
        );
        let mut buf = Vec::new();
        XyzFile::write_to(&mol, &mut buf).unwrap();
        let parsed = XyzFile::read_from(&mut BufReader::new(buf.as_slice())).unwrap();
        assert_eq!(parsed.atom_names, mol.atom_names);
        for (a, b) in parsed.coordinates.iter().zip(mol.coordinates.iter()) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-7);
        }
    }
}

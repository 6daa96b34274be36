use crate::engine::error::PuckerError;
use serde::Serialize;

/// A uniform grid over the peptide backbone dihedrals φ and ψ,
/// index-aligned and row-major (φ outer, ψ inner).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeptideGrid {
    pub phi: Vec<f64>,
    pub psi: Vec<f64>,
}

impl PeptideGrid {
    /// The number of grid points.
    pub fn len(&self) -> usize {
        self.phi.len()
    }

    /// Returns `true` if the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.phi.is_empty()
    }
}

/// Builds the φ/ψ Cartesian product over the half-open torus [0°,360°)²
/// with `interval` values per axis (step 360/interval), yielding exactly
/// `interval²` ordered pairs. The half-open domain keeps 0° and 360° from
/// both appearing as duplicate rows.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] when `interval` ≤ 1.
pub fn sample_peptide(interval: usize) -> Result<PeptideGrid, PuckerError> {
    if interval <= 1 {
        return Err(PuckerError::InvalidParameter(format!(
            "peptide interval must be at least 2, got {interval}"
        )));
    }

    let step = 360.0 / interval as f64;
    let axis: Vec<f64> = (0..interval).map(|i| step * i as f64).collect();
    let amount = interval * interval;
    let mut phi = Vec::with_capacity(amount);
    let mut psi = Vec::with_capacity(amount);
    for &outer in &axis {
        for &inner in &axis {
            phi.push(outer);
            psi.push(inner);
        }
    }
    Ok(PeptideGrid { phi, psi })
}

use crate::engine::error::PuckerError;
use crate::engine::sampling::linspace;
use serde::Serialize;

/// A uniform grid over the two restrained endocyclic torsions ν₁ and ν₃ of
/// a five-membered ring, index-aligned and row-major (ν₁ outer, ν₃ inner).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveringGrid {
    pub nu1: Vec<f64>,
    pub nu3: Vec<f64>,
}

impl FiveringGrid {
    /// The number of grid points.
    pub fn len(&self) -> usize {
        self.nu1.len()
    }

    /// Returns `true` if the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.nu1.is_empty()
    }
}

/// Builds the ν₁/ν₃ Cartesian product over [−60°,60°] with `interval`
/// evenly spaced values per axis (step 120/(interval−1)), yielding exactly
/// `interval²` ordered pairs.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] when `interval` ≤ 1 — a degenerate
/// axis is refused rather than silently collapsed.
pub fn sample_fivering(interval: usize) -> Result<FiveringGrid, PuckerError> {
    if interval <= 1 {
        return Err(PuckerError::InvalidParameter(format!(
            "fivering interval must be at least 2, got {interval}"
        )));
    }

    let axis = linspace(-60.0, 60.0, interval);
    let amount = interval * interval;
    let mut nu1 = Vec::with_capacity(amount);
    let mut nu3 = Vec::with_capacity(amount);
    for &outer in &axis {
        for &inner in &axis {
            nu1.push(outer);
            nu3.push(inner);
        }
    }
    Ok(FiveringGrid { nu1, nu3 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn grid_is_the_full_cartesian_product() {
        let grid = sample_fivering(3).unwrap();
        assert_eq!(grid.len(), 9);
        let expected = [
            (-60.0, -60.0),
            (-60.0, 0.0),
            (-60.0, 60.0),
            (0.0, -60.0),
            (0.0, 0.0),
            (0.0, 60.0),
            (60.0, -60.0),
            (60.0, 0.0),
            (60.0, 60.0),
        ];
        for (i, (n1, n3)) in expected.iter().enumerate() {
            assert_relative_eq!(grid.nu1[i], *n1, epsilon = 1e-12);
            assert_relative_eq!(grid.nu3[i], *n3, epsilon = 1e-12);
        }
    }

    #[test]
    fn point_count_is_interval_squared() {
        for interval in [2usize, 7, 21] {
            let grid = sample_fivering(interval).unwrap();
            assert_eq!(grid.len(), interval * interval);
            assert_eq!(grid.nu3.len(), interval * interval);
        }
    }

    #[test]
    fn step_spans_the_domain() {
        let grid = sample_fivering(7).unwrap();
        assert_relative_eq!(grid.nu1[0], -60.0, epsilon = 1e-12);
        assert_relative_eq!(grid.nu3[6], 60.0, epsilon = 1e-12);
        assert_relative_eq!(grid.nu3[1] - grid.nu3[0], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_interval_is_refused() {
        assert!(matches!(
            sample_fivering(1),
            Err(PuckerError::InvalidParameter(_))
        ));
        assert!(matches!(
            sample_fivering(0),
            Err(PuckerError::InvalidParameter(_))
        ));
    }
}

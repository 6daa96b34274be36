use crate::engine::error::PuckerError;
use crate::engine::sampling::reconstruct;
use rayon::prelude::*;
use serde::Serialize;
use std::f64::consts::{PI, TAU};
use tracing::{info, instrument};

/// Fixed Cremer-Pople amplitude (Angstroms) of the sampling sphere; the
/// typical total puckering amplitude of a pyranose ring.
pub const SIXRING_AMPLITUDE: f64 = 0.67;

/// The three restraint dihedrals per sampled point on the puckering sphere,
/// index-aligned across the arrays and ordered band by band from the north
/// pole, each band swept from φ = 0.
///
/// `achieved` is the realized point count; the equal-area banding scheme
/// may deviate slightly from the requested amount and the difference is
/// reported, never truncated or padded away.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SixringGrid {
    pub alpha1: Vec<f64>,
    pub alpha2: Vec<f64>,
    pub alpha3: Vec<f64>,
    pub requested: usize,
    pub achieved: usize,
}

impl SixringGrid {
    /// The number of grid points actually generated.
    pub fn len(&self) -> usize {
        self.alpha1.len()
    }

    /// Returns `true` if the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.alpha1.is_empty()
    }
}

/// A point on the unit puckering sphere, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpherePoint {
    pub theta: f64,
    pub phi: f64,
}

/// Distributes approximately `amount` points evenly in solid angle over the
/// sphere: latitude bands of equal area, each band holding a number of
/// equally spaced longitudes proportional to its circumference.
pub(crate) fn equidistance_sphere(amount: usize) -> Vec<SpherePoint> {
    let area_per_point = 2.0 * TAU / amount as f64;
    let band_height = area_per_point.sqrt();
    let bands = (PI / band_height).round().max(1.0) as usize;
    let band_step = PI / bands as f64;
    let phi_step = area_per_point / band_step;

    let mut points = Vec::with_capacity(amount + bands);
    for band in 0..bands {
        let theta = PI * (band as f64 + 0.5) / bands as f64;
        let slots = (TAU * theta.sin() / phi_step).round().max(1.0) as usize;
        for slot in 0..slots {
            points.push(SpherePoint {
                theta,
                phi: TAU * slot as f64 / slots as f64,
            });
        }
    }
    points
}

/// Places ≈`amount` points evenly over the six-ring puckering sphere at
/// amplitude [`SIXRING_AMPLITUDE`] and derives, for each point, the three
/// dihedral restraints that fully constrain a six-membered ring.
///
/// Points are reconstructed independently in parallel; output order is
/// deterministic (band by band, φ ascending) for reproducible downstream
/// job indexing.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] when `amount` is zero.
#[instrument(level = "debug")]
pub fn sample_sixring(amount: usize) -> Result<SixringGrid, PuckerError> {
    if amount == 0 {
        return Err(PuckerError::InvalidParameter(
            "sixring amount must be positive".to_string(),
        ));
    }

    let sphere = equidistance_sphere(amount);
    let achieved = sphere.len();
    if achieved != amount {
        info!(requested = amount, achieved, "equal-area banding adjusted the sixring grid size");
    }

    let alphas = sphere
        .par_iter()
        .map(|p| reconstruct::restraint_dihedrals(SIXRING_AMPLITUDE, p.theta, p.phi))
        .collect::<Result<Vec<_>, _>>()?;

    let mut grid = SixringGrid {
        alpha1: Vec::with_capacity(achieved),
        alpha2: Vec::with_capacity(achieved),
        alpha3: Vec::with_capacity(achieved),
        requested: amount,
        achieved,
    };
    for [a1, a2, a3] in alphas {
        grid.alpha1.push(a1);
        grid.alpha2.push(a2);
        grid.alpha3.push(a3);
    }
    Ok(grid)
}

use crate::core::models::descriptor::PuckeringDescriptor;
use crate::core::models::ring::RingGeometry;
use crate::core::utils::geometry::{dihedral, normalize_degrees};
use crate::engine::error::PuckerError;
use crate::engine::expect_ring_size;
use std::f64::consts::TAU;
use tracing::instrument;

/// Torsional amplitude (degrees) per Angstrom of Cremer-Pople amplitude for
/// a furanose ring. Published domain constant; the physical ratio drifts
/// slowly with amplitude, the conversion itself is an exact linear map.
pub const DEGREES_PER_ANGSTROM: f64 = 102.5;

/// Fixed offset between the pseudorotation phase P and the Cremer-Pople
/// phase φ for the same ring: P = φ + 90°.
pub const PHASE_OFFSET_DEGREES: f64 = 90.0;

/// The five endocyclic torsions ν₀..ν₄, with νⱼ taken about the bond
/// (j, j+1): νⱼ = τ(pⱼ₋₁, pⱼ, pⱼ₊₁, pⱼ₊₂), indices modulo 5.
fn endocyclic_torsions(ring: &RingGeometry) -> Result<[f64; 5], PuckerError> {
    let p = ring.points();
    let mut nu = [0.0; 5];
    for (j, slot) in nu.iter_mut().enumerate() {
        *slot = dihedral(
            &p[(j + 4) % 5],
            &p[j],
            &p[(j + 1) % 5],
            &p[(j + 2) % 5],
        )
        .ok_or_else(|| {
            PuckerError::DegenerateRing(format!(
                "colinear atoms around ring bond {}-{}: torsion undefined",
                j,
                (j + 1) % 5
            ))
        })?;
    }
    Ok(nu)
}

/// Altona-Sundaralingam forward transform of a five-membered ring.
///
/// Fits the endocyclic torsions to νⱼ = τₘ·cos(P + 4π(j−2)/5) by closed-form
/// trigonometric regression, in the torsion-sign convention of the classic
/// nucleoside treatment (C3'-endo sits at P ≈ 18°). Returns τₘ ≥ 0 in
/// degrees and P ∈ [0°,360°).
///
/// # Errors
///
/// [`PuckerError::RingSizeMismatch`] for a non-five-membered ring and
/// [`PuckerError::DegenerateRing`] when a torsion is undefined.
#[instrument(level = "trace", skip_all)]
pub fn as_forward(ring: &RingGeometry) -> Result<PuckeringDescriptor, PuckerError> {
    expect_ring_size(ring, 5)?;
    let nu = endocyclic_torsions(ring)?;

    let mut cos_sum = 0.0;
    let mut sin_sum = 0.0;
    for (j, nu_j) in nu.iter().enumerate() {
        let w = 2.0 * TAU * (j as f64 - 2.0) / 5.0;
        cos_sum -= nu_j * w.cos();
        sin_sum += nu_j * w.sin();
    }
    let a = 0.4 * cos_sum;
    let b = 0.4 * sin_sum;

    Ok(PuckeringDescriptor::AltonaSundaralingam {
        amplitude: a.hypot(b),
        phase: normalize_degrees(b.atan2(a).to_degrees()),
    })
}

/// Converts Altona-Sundaralingam `(τₘ, P)` to Cremer-Pople `(Q, φ)`.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] for a negative/non-finite amplitude or
/// non-finite phase.
pub fn as_to_cp5(amplitude: f64, phase: f64) -> Result<PuckeringDescriptor, PuckerError> {
    validate(amplitude, phase)?;
    Ok(PuckeringDescriptor::CremerPople5 {
        amplitude: amplitude / DEGREES_PER_ANGSTROM,
        phase: normalize_degrees(phase - PHASE_OFFSET_DEGREES),
    })
}

/// Converts Cremer-Pople `(Q, φ)` to Altona-Sundaralingam `(τₘ, P)`.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] for a negative/non-finite amplitude or
/// non-finite phase.
pub fn cp5_to_as(amplitude: f64, phase: f64) -> Result<PuckeringDescriptor, PuckerError> {
    validate(amplitude, phase)?;
    Ok(PuckeringDescriptor::AltonaSundaralingam {
        amplitude: amplitude * DEGREES_PER_ANGSTROM,
        phase: normalize_degrees(phase + PHASE_OFFSET_DEGREES),
    })
}

fn validate(amplitude: f64, phase: f64) -> Result<(), PuckerError> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(PuckerError::InvalidParameter(format!(
            "amplitude must be finite and non-negative, got {amplitude}"
        )));
    }
    if !phase.is_finite() {
        return Err(PuckerError::InvalidParameter(format!(
            "phase must be finite, got {phase}"
        )));
    }
    Ok(())
}

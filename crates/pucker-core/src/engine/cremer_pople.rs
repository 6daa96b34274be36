use crate::core::models::descriptor::PuckeringDescriptor;
use crate::core::models::ring::RingGeometry;
use crate::core::utils::geometry::normalize_degrees;
use crate::engine::error::PuckerError;
use crate::engine::mean_plane::MeanPlane;
use crate::engine::{expect_ring_size, sampling};
use nalgebra::Point3;
use std::f64::consts::TAU;
use tracing::instrument;

// A total amplitude below this is a planar ring; an m=2 amplitude below it
// is the chair pole. In both cases the phase angle is undefined.
const AMPLITUDE_EPS: f64 = 1e-9;

/// Trigonometric sums of the m=2 puckering mode over the atomic elevations:
/// `(q2·cos φ2, q2·sin φ2)`.
fn mode2_sums(elevations: &[f64]) -> (f64, f64) {
    let n = elevations.len() as f64;
    let scale = (2.0 / n).sqrt();
    let mut cos_sum = 0.0;
    let mut sin_sum = 0.0;
    for (j, z) in elevations.iter().enumerate() {
        let w = 2.0 * TAU * j as f64 / n;
        cos_sum += z * w.cos();
        sin_sum -= z * w.sin();
    }
    (scale * cos_sum, scale * sin_sum)
}

fn total_amplitude(elevations: &[f64]) -> f64 {
    elevations.iter().map(|z| z * z).sum::<f64>().sqrt()
}

/// Cremer-Pople forward transform of a five-membered ring.
///
/// Returns the single nontrivial mode as `(Q, φ)` with Q in Angstroms and
/// φ in [0°,360°).
///
/// # Errors
///
/// [`PuckerError::RingSizeMismatch`] for a non-five-membered ring and
/// [`PuckerError::DegenerateRing`] for a planar ring, whose phase angle is
/// undefined.
#[instrument(level = "trace", skip_all)]
pub fn cp5_forward(ring: &RingGeometry) -> Result<PuckeringDescriptor, PuckerError> {
    expect_ring_size(ring, 5)?;
    let plane = MeanPlane::fit(ring)?;
    let z = plane.elevations(ring);

    let amplitude = total_amplitude(&z);
    if amplitude <= AMPLITUDE_EPS {
        return Err(PuckerError::DegenerateRing(
            "planar five-membered ring: phase angle is undefined".to_string(),
        ));
    }

    let (qcos, qsin) = mode2_sums(&z);
    Ok(PuckeringDescriptor::CremerPople5 {
        amplitude,
        phase: normalize_degrees(qsin.atan2(qcos).to_degrees()),
    })
}

/// Cremer-Pople forward transform of a six-membered ring.
///
/// Returns `(Q, φ, θ)`: total amplitude Q = √(q₂²+q₃²) in Angstroms, phase
/// φ in [0°,360°), and polar angle θ = atan2(q₂,q₃) in [0°,180°].
///
/// # Errors
///
/// [`PuckerError::RingSizeMismatch`] for a non-six-membered ring;
/// [`PuckerError::DegenerateRing`] for a planar ring or at the chair poles
/// (q₂ ≈ 0, θ ≈ 0° or 180°), where the phase angle is undefined.
#[instrument(level = "trace", skip_all)]
pub fn cp6_forward(ring: &RingGeometry) -> Result<PuckeringDescriptor, PuckerError> {
    expect_ring_size(ring, 6)?;
    let plane = MeanPlane::fit(ring)?;
    let z = plane.elevations(ring);

    let amplitude = total_amplitude(&z);
    if amplitude <= AMPLITUDE_EPS {
        return Err(PuckerError::DegenerateRing(
            "planar six-membered ring: phase angle is undefined".to_string(),
        ));
    }

    let (qcos, qsin) = mode2_sums(&z);
    let q2 = qcos.hypot(qsin);
    let q3 = (1.0 / 6.0_f64).sqrt()
        * z.iter()
            .enumerate()
            .map(|(j, zj)| if j % 2 == 0 { *zj } else { -zj })
            .sum::<f64>();

    if q2 <= AMPLITUDE_EPS {
        return Err(PuckerError::DegenerateRing(format!(
            "chair pole (Q = {amplitude:.6} A, q2 = 0): phase angle is undefined"
        )));
    }

    Ok(PuckeringDescriptor::CremerPople6 {
        amplitude,
        phase: normalize_degrees(qsin.atan2(qcos).to_degrees()),
        theta: q2.atan2(q3).to_degrees(),
    })
}

/// Reconstructs a five-membered ring from `(Q, φ)`.
///
/// In-plane positions sit on an idealized regular pentagon (1.54 Å sides)
/// oriented so that re-analysis with [`cp5_forward`] reproduces the input
/// descriptor; each vertex is then displaced along the plane normal by the
/// inverse trigonometric sums. A generator of representative conformers,
/// not a structure restorer.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] for a negative or non-finite amplitude
/// or a non-finite phase.
#[instrument(level = "trace")]
pub fn cp5_inverse(amplitude: f64, phase: f64) -> Result<RingGeometry, PuckerError> {
    validate_amplitude(amplitude)?;
    let phase = validate_angle("phase", phase)?.to_radians();

    let scale = (2.0 / 5.0_f64).sqrt();
    let elevations: Vec<f64> = (0..5)
        .map(|j| amplitude * scale * (phase + 2.0 * TAU * j as f64 / 5.0).cos())
        .collect();
    Ok(embed_on_polygon(&elevations))
}

/// Reconstructs a six-membered ring from `(Q, φ, θ)`.
///
/// Elevations combine the m=2 mode (q₂ = Q·sin θ) and the alternating m=3
/// mode (q₃ = Q·cos θ); in-plane positions follow the same idealized-hexagon
/// embedding as [`cp5_inverse`].
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] for a negative/non-finite amplitude, a
/// non-finite phase, or theta outside [0°,180°].
#[instrument(level = "trace")]
pub fn cp6_inverse(amplitude: f64, phase: f64, theta: f64) -> Result<RingGeometry, PuckerError> {
    validate_amplitude(amplitude)?;
    let phase = validate_angle("phase", phase)?.to_radians();
    if !theta.is_finite() || !(0.0..=180.0).contains(&theta) {
        return Err(PuckerError::InvalidParameter(format!(
            "theta must lie in [0, 180] degrees, got {theta}"
        )));
    }
    let theta = theta.to_radians();

    let q2 = amplitude * theta.sin();
    let q3 = amplitude * theta.cos();
    let elevations: Vec<f64> = (0..6)
        .map(|j| {
            let m2 = (1.0 / 3.0_f64).sqrt() * q2 * (phase + TAU * j as f64 / 3.0).cos();
            let m3 = (1.0 / 6.0_f64).sqrt() * q3 * if j % 2 == 0 { 1.0 } else { -1.0 };
            m2 + m3
        })
        .collect();
    Ok(embed_on_polygon(&elevations))
}

/// Places elevations onto an idealized regular N-gon with 1.54 Å sides.
///
/// Vertex angles decrease with ring index so the R1 x R2 normal of the
/// result is +z; the forward transforms then read the elevations back
/// exactly as given.
fn embed_on_polygon(elevations: &[f64]) -> RingGeometry {
    let n = elevations.len();
    let radius = sampling::reconstruct::RING_BOND / (2.0 * (std::f64::consts::PI / n as f64).sin());
    RingGeometry::new(
        elevations
            .iter()
            .enumerate()
            .map(|(j, z)| {
                let a = -TAU * j as f64 / n as f64;
                Point3::new(radius * a.cos(), radius * a.sin(), *z)
            })
            .collect(),
    )
}

fn validate_amplitude(amplitude: f64) -> Result<(), PuckerError> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(PuckerError::InvalidParameter(format!(
            "amplitude must be finite and non-negative, got {amplitude}"
        )));
    }
    Ok(())
}

fn validate_angle(name: &str, value: f64) -> Result<f64, PuckerError> {
    if !value.is_finite() {
        return Err(PuckerError::InvalidParameter(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(normalize_degrees(value))
}

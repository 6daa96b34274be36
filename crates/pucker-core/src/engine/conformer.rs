use crate::core::models::descriptor::PuckeringDescriptor;
use crate::core::utils::geometry::normalize_degrees;
use crate::engine::altona_sundaralingam::PHASE_OFFSET_DEGREES;
use crate::engine::error::PuckerError;
use phf::phf_map;

/// Canonical five-membered conformer names on the pseudorotation wheel,
/// keyed to their ideal phase angle P (degrees). Envelope (E) and twist (T)
/// forms alternate every 18°; superscripts/subscripts are flattened into
/// plain text (e.g. ³E → "3E", ²T₁ → "2T1", ⁰E → "0E" for the ring oxygen).
pub static FIVERING_CANONICAL: phf::Map<&'static str, f64> = phf_map! {
    "3T2" => 0.0,
    "3E"  => 18.0,
    "3T4" => 36.0,
    "E4"  => 54.0,
    "0T4" => 72.0,
    "0E"  => 90.0,
    "0T1" => 108.0,
    "E1"  => 126.0,
    "2T1" => 144.0,
    "2E"  => 162.0,
    "2T3" => 180.0,
    "E3"  => 198.0,
    "4T3" => 216.0,
    "4E"  => 234.0,
    "4T0" => 252.0,
    "E0"  => 270.0,
    "1T0" => 288.0,
    "1E"  => 306.0,
    "1T2" => 324.0,
    "E2"  => 342.0,
};

/// Canonical six-membered conformers on the puckering sphere, keyed to
/// their ideal `[theta, phi]` position (degrees): the two chairs at the
/// poles and the six boat (B) / six twist-boat (S) forms on the equator.
pub static SIXRING_CANONICAL: phf::Map<&'static str, [f64; 2]> = phf_map! {
    "4C1"  => [0.0, 0.0],
    "1C4"  => [180.0, 0.0],
    "3,0B" => [90.0, 0.0],
    "3S1"  => [90.0, 30.0],
    "B1,4" => [90.0, 60.0],
    "5S1"  => [90.0, 90.0],
    "2,5B" => [90.0, 120.0],
    "2S0"  => [90.0, 150.0],
    "B3,0" => [90.0, 180.0],
    "1S3"  => [90.0, 210.0],
    "1,4B" => [90.0, 240.0],
    "1S5"  => [90.0, 270.0],
    "B2,5" => [90.0, 300.0],
    "0S2"  => [90.0, 330.0],
};

fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Great-circle angle (degrees) between two points on the puckering sphere.
fn spherical_distance(theta_a: f64, phi_a: f64, theta_b: f64, phi_b: f64) -> f64 {
    let (ta, tb) = (theta_a.to_radians(), theta_b.to_radians());
    let dphi = (phi_a - phi_b).to_radians();
    let cos_gamma = ta.sin() * tb.sin() * dphi.cos() + ta.cos() * tb.cos();
    cos_gamma.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Names the pseudorotation-wheel sector of a five-membered descriptor.
///
/// Accepts either family: a Cremer-Pople phase is shifted onto the wheel by
/// the fixed 90° offset first.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] when called with a six-membered
/// descriptor family or a non-finite phase.
pub fn classify_fivering(descriptor: &PuckeringDescriptor) -> Result<&'static str, PuckerError> {
    let p = match descriptor {
        PuckeringDescriptor::AltonaSundaralingam { phase, .. } => *phase,
        PuckeringDescriptor::CremerPople5 { phase, .. } => phase + PHASE_OFFSET_DEGREES,
        other => {
            return Err(PuckerError::InvalidParameter(format!(
                "not a five-membered descriptor: {other:?}"
            )));
        }
    };
    if !p.is_finite() {
        return Err(PuckerError::InvalidParameter(format!(
            "phase must be finite, got {p}"
        )));
    }
    let p = normalize_degrees(p);

    FIVERING_CANONICAL
        .entries()
        .min_by(|(_, a), (_, b)| {
            circular_distance(p, **a)
                .partial_cmp(&circular_distance(p, **b))
                .expect("distances are finite")
        })
        .map(|(name, _)| *name)
        .ok_or_else(|| PuckerError::InvalidParameter("empty conformer table".to_string()))
}

/// Names the nearest canonical chair/boat/twist-boat form of a six-membered
/// Cremer-Pople descriptor by great-circle distance on the puckering sphere.
///
/// # Errors
///
/// [`PuckerError::InvalidParameter`] when called with anything but a
/// `CremerPople6` descriptor or with non-finite angles.
pub fn classify_sixring(descriptor: &PuckeringDescriptor) -> Result<&'static str, PuckerError> {
    let (phase, theta) = match descriptor {
        PuckeringDescriptor::CremerPople6 { phase, theta, .. } => (*phase, *theta),
        other => {
            return Err(PuckerError::InvalidParameter(format!(
                "not a six-membered Cremer-Pople descriptor: {other:?}"
            )));
        }
    };
    if !phase.is_finite() || !theta.is_finite() {
        return Err(PuckerError::InvalidParameter(
            "phase and theta must be finite".to_string(),
        ));
    }

    SIXRING_CANONICAL
        .entries()
        .min_by(|(_, a), (_, b)| {
            spherical_distance(theta, phase, a[0], a[1])
                .partial_cmp(&spherical_distance(theta, phase, b[0], b[1]))
                .expect("distances are finite")
        })
        .map(|(name, _)| *name)
        .ok_or_else(|| PuckerError::InvalidParameter("empty conformer table".to_string()))
}

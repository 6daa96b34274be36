use crate::core::utils::geometry::{dihedral, normalize_degrees};
use crate::engine::error::PuckerError;
use nalgebra::{Point2, Point3};
use std::f64::consts::TAU;

/// Reference C-C bond length (Angstroms) of the reconstructed ring.
pub(crate) const RING_BOND: f64 = 1.54;
/// cos of the ideal sp3 bond angle (109.47°).
const COS_TETRAHEDRAL: f64 = -1.0 / 3.0;

/// Atomic elevations of a six-membered ring at spherical puckering
/// coordinates (ρ, θ, φ): the m=2 mode q₂ = ρ·sin θ plus the alternating
/// m=3 mode q₃ = ρ·cos θ. Angles in radians.
pub(crate) fn elevations(rho: f64, theta: f64, phi: f64) -> [f64; 6] {
    let mut z = [0.0; 6];
    for (j, slot) in z.iter_mut().enumerate() {
        let m2 = (1.0 / 3.0_f64).sqrt() * theta.sin() * (phi + TAU * j as f64 / 3.0).cos();
        let m3 = (1.0 / 6.0_f64).sqrt() * theta.cos() * if j % 2 == 0 { 1.0 } else { -1.0 };
        *slot = (m2 + m3) * rho;
    }
    z
}

/// The mean-plane projection of a ring with elevations `z`: the six
/// projected bond lengths, and the three diagonals of the even-atom
/// triangle obtained from the projected flap angles at atoms 1, 3, 5.
struct Projection {
    bond: [f64; 6],
    diagonal: [f64; 3],
}

fn project(z: &[f64; 6]) -> Result<Projection, PuckerError> {
    let mut bond = [0.0; 6];
    for (j, slot) in bond.iter_mut().enumerate() {
        let dz = z[j] - z[(j + 1) % 6];
        let sq = RING_BOND * RING_BOND - dz * dz;
        if sq <= 0.0 {
            return Err(PuckerError::InvalidParameter(format!(
                "puckering amplitude too large: elevation step {dz:.3} A exceeds the {RING_BOND} A bond"
            )));
        }
        *slot = sq.sqrt();
    }

    // Law of cosines across each flap atom, with the flap angle fixed at
    // the tetrahedral value in 3D and deflated to its projected cosine.
    let mut diagonal = [0.0; 3];
    for (k, slot) in diagonal.iter_mut().enumerate() {
        let j = 2 * k;
        let cos_projected = ((z[(j + 2) % 6] - z[j]).powi(2)
            - (z[(j + 1) % 6] - z[j]).powi(2)
            - (z[(j + 2) % 6] - z[(j + 1) % 6]).powi(2)
            + 2.0 * RING_BOND * RING_BOND * COS_TETRAHEDRAL)
            / (2.0 * bond[j] * bond[(j + 1) % 6]);
        *slot = (bond[j].powi(2) + bond[(j + 1) % 6].powi(2)
            - 2.0 * bond[j] * bond[(j + 1) % 6] * cos_projected)
            .sqrt();
    }

    Ok(Projection { bond, diagonal })
}

/// Intersection of two circles, taking the solution on the opposite side of
/// the line `c0→c1` from `away`. The flap atoms always lie outside the
/// diagonal triangle, so `away` is its far vertex.
fn flap_vertex(c0: Point2<f64>, r0: f64, c1: Point2<f64>, r1: f64, away: Point2<f64>) -> Point2<f64> {
    let d = c1 - c0;
    let dist = d.norm();
    let along = (r0 * r0 - r1 * r1 + dist * dist) / (2.0 * dist);
    let off = (r0 * r0 - along * along).max(0.0).sqrt();

    let base = c0 + d * (along / dist);
    let normal = nalgebra::Vector2::new(d.y, -d.x) / dist;
    let p = base + normal * off;
    let q = base - normal * off;

    let side = |pt: Point2<f64>| d.x * (pt.y - c0.y) - d.y * (pt.x - c0.x);
    if side(p) * side(away) < 0.0 { p } else { q }
}

/// Rebuilds a six-membered ring with exact 1.54 Å bonds from its six
/// elevations: the even atoms form a triangle placed from the projected
/// diagonals (clockwise, so the mean-plane normal is +z), each odd flap
/// atom is placed by two-circle intersection on the outer side, and every
/// atom is lifted to its elevation.
pub(crate) fn reconstruct_ring(z: &[f64; 6]) -> Result<[Point3<f64>; 6], PuckerError> {
    let projection = project(z)?;
    let [op, qp, oq] = projection.diagonal;

    let v0 = Point2::new(0.0, 0.0);
    let v2 = Point2::new(op, 0.0);
    let x4 = (op * op + oq * oq - qp * qp) / (2.0 * op);
    let v4 = Point2::new(x4, -(oq * oq - x4 * x4).max(0.0).sqrt());

    let v1 = flap_vertex(v0, projection.bond[0], v2, projection.bond[1], v4);
    let v3 = flap_vertex(v2, projection.bond[2], v4, projection.bond[3], v0);
    let v5 = flap_vertex(v4, projection.bond[4], v0, projection.bond[5], v2);

    let flat = [v0, v1, v2, v3, v4, v5];
    let mut ring = [Point3::origin(); 6];
    for (j, (v, zj)) in flat.iter().zip(z.iter()).enumerate() {
        ring[j] = Point3::new(v.x, v.y, *zj);
    }
    Ok(ring)
}

/// The three restraint dihedrals α₁..α₃ (flap dihedrals across the ring)
/// of the ring reconstructed at (ρ, θ, φ), mapped into [0°,360°) for
/// direct use as torsion restraint targets.
pub(crate) fn restraint_dihedrals(rho: f64, theta: f64, phi: f64) -> Result<[f64; 3], PuckerError> {
    let ring = reconstruct_ring(&elevations(rho, theta, phi))?;
    let alpha = |a: usize, b: usize, c: usize, d: usize| {
        dihedral(&ring[a], &ring[b], &ring[c], &ring[d])
            .map(normalize_degrees)
            .ok_or_else(|| {
                PuckerError::DegenerateRing(format!(
                    "reconstructed ring has colinear atoms in dihedral ({a},{b},{c},{d})"
                ))
            })
    };
    Ok([
        alpha(4, 0, 2, 1)?,
        alpha(0, 2, 4, 3)?,
        alpha(2, 4, 0, 5)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ring::RingGeometry;
    use crate::core::utils::geometry::bond_length;
    use crate::engine::cremer_pople::cp6_forward;
    use crate::core::models::descriptor::PuckeringDescriptor;
    use approx::assert_relative_eq;

    #[test]
    fn reconstructed_ring_has_exact_bond_lengths() {
        for &(theta, phi) in &[(30.0, 60.0), (90.0, 0.0), (120.0, 200.0), (175.0, 330.0)] {
            let z = elevations(0.67, f64::to_radians(theta), f64::to_radians(phi));
            let ring = reconstruct_ring(&z).unwrap();
            for j in 0..6 {
                assert_relative_eq!(
                    bond_length(&ring[j], &ring[(j + 1) % 6]),
                    RING_BOND,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn reconstructed_ring_reanalyzes_to_requested_coordinates() {
        for &(theta, phi) in &[(30.0, 60.0), (54.7, 90.0), (90.0, 120.0), (120.0, 200.0)] {
            let z = elevations(0.67, f64::to_radians(theta), f64::to_radians(phi));
            let ring = RingGeometry::new(reconstruct_ring(&z).unwrap().to_vec());
            match cp6_forward(&ring).unwrap() {
                PuckeringDescriptor::CremerPople6 {
                    amplitude,
                    phase,
                    theta: theta_out,
                } => {
                    assert_relative_eq!(amplitude, 0.67, epsilon = 1e-9);
                    assert_relative_eq!(phase, phi, epsilon = 1e-6);
                    assert_relative_eq!(theta_out, theta, epsilon = 1e-6);
                }
                other => panic!("unexpected descriptor: {other:?}"),
            }
        }
    }

    #[test]
    fn known_flap_dihedrals_at_a_reference_point() {
        // theta = 90, phi = 0 boat at rho = 0.67.
        let alphas = restraint_dihedrals(0.67, f64::to_radians(90.0), 0.0).unwrap();
        assert_relative_eq!(alphas[0], 207.462416917546, epsilon = 1e-6);
        assert_relative_eq!(alphas[1], 123.810825664472, epsilon = 1e-6);
        assert_relative_eq!(alphas[2], 207.462416917546, epsilon = 1e-6);
    }

    #[test]
    fn oversized_amplitude_is_rejected() {
        let z = elevations(3.0, f64::to_radians(90.0), 0.0);
        assert!(matches!(
            reconstruct_ring(&z),
            Err(PuckerError::InvalidParameter(_))
        ));
    }
}

use crate::core::models::descriptor::PuckeringDescriptor;
use crate::core::models::ring::RingGeometry;
use crate::core::utils::geometry::{bond_angle, dihedral};
use crate::engine::error::PuckerError;
use crate::engine::expect_ring_size;
use tracing::instrument;

/// Strauss-Pickett forward transform of a six-membered ring.
///
/// Partitions the ring into the three "flap" atoms (odd positions 1, 3, 5)
/// hinged on the even-position triangle (0, 2, 4) and returns the two
/// symmetry classes of derived angles:
///
/// - `alphas`: the flap dihedrals τ(p₄,p₀,p₂,p₁), τ(p₀,p₂,p₄,p₃),
///   τ(p₂,p₄,p₀,p₅), in (−180°,180°]
/// - `betas`: the flap bond angles ∠(p₀,p₁,p₂), ∠(p₂,p₃,p₄), ∠(p₄,p₅,p₀)
///
/// This family is intentionally under-reduced (no scalar amplitude/phase)
/// and defines no inverse.
///
/// # Errors
///
/// [`PuckerError::RingSizeMismatch`] for a non-six-membered ring and
/// [`PuckerError::DegenerateRing`] when coincident or colinear atoms leave
/// an angle undefined.
#[instrument(level = "trace", skip_all)]
pub fn sp_forward(ring: &RingGeometry) -> Result<PuckeringDescriptor, PuckerError> {
    expect_ring_size(ring, 6)?;
    let p = ring.points();

    let flap_dihedral = |a: usize, b: usize, c: usize, d: usize| {
        dihedral(&p[a], &p[b], &p[c], &p[d]).ok_or_else(|| {
            PuckerError::DegenerateRing(format!(
                "colinear atoms in flap dihedral ({a},{b},{c},{d})"
            ))
        })
    };
    let flap_angle = |a: usize, b: usize, c: usize| {
        bond_angle(&p[a], &p[b], &p[c]).ok_or_else(|| {
            PuckerError::DegenerateRing(format!("coincident atoms in flap angle ({a},{b},{c})"))
        })
    };

    let alphas = [
        flap_dihedral(4, 0, 2, 1)?,
        flap_dihedral(0, 2, 4, 3)?,
        flap_dihedral(2, 4, 0, 5)?,
    ];
    let betas = [
        flap_angle(0, 1, 2)?,
        flap_angle(2, 3, 4)?,
        flap_angle(4, 5, 0)?,
    ];

    Ok(PuckeringDescriptor::StraussPickett { alphas, betas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f64::consts::TAU;

    fn unpack(d: PuckeringDescriptor) -> ([f64; 3], [f64; 3]) {
        match d {
            PuckeringDescriptor::StraussPickett { alphas, betas } => (alphas, betas),
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    fn chair() -> RingGeometry {
        RingGeometry::new(
            (0..6)
                .map(|j| {
                    let a = -TAU * j as f64 / 6.0;
                    let z = if j % 2 == 0 { 0.25 } else { -0.25 };
                    Point3::new(1.54 * a.cos(), 1.54 * a.sin(), z)
                })
                .collect(),
        )
    }

    #[test]
    fn symmetric_chair_gives_equal_flap_angles() {
        let (alphas, betas) = unpack(sp_forward(&chair()).unwrap());
        for alpha in alphas {
            assert_relative_eq!(alpha, -147.0022948988, epsilon = 1e-8);
        }
        for beta in betas {
            assert_relative_eq!(beta, 110.9134679208, epsilon = 1e-8);
        }
    }

    #[test]
    fn flat_hexagon_has_zero_flap_dihedrals() {
        let flat = RingGeometry::new(
            (0..6)
                .map(|j| {
                    let a = -TAU * j as f64 / 6.0;
                    Point3::new(1.54 * a.cos(), 1.54 * a.sin(), 0.0)
                })
                .collect(),
        );
        let (alphas, betas) = unpack(sp_forward(&flat).unwrap());
        for alpha in alphas {
            assert!(alpha.abs() < 1e-9 || (alpha.abs() - 180.0).abs() < 1e-9);
        }
        for beta in betas {
            assert_relative_eq!(beta, 120.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn rejects_wrong_ring_size() {
        let five = RingGeometry::new(
            (0..5)
                .map(|j| Point3::new(j as f64, j as f64 * 0.5, 0.1))
                .collect(),
        );
        assert!(matches!(
            sp_forward(&five),
            Err(PuckerError::RingSizeMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }
}

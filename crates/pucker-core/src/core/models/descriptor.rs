use serde::Serialize;

/// A reduced-dimension parameterization of a ring's non-planarity.
///
/// One variant per descriptor family, keyed by ring size and transform kind.
/// Amplitudes are in Angstroms for the Cremer-Pople families and in degrees
/// for Altona-Sundaralingam; all angles are in degrees. Values are produced
/// normalized (amplitude ≥ 0, phase in [0°,360°), theta in [0°,180°]) by the
/// engine's forward transforms, and validated on explicit construction by the
/// inverse/conversion entry points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PuckeringDescriptor {
    /// Cremer-Pople coordinates of a five-membered ring: the single
    /// nontrivial puckering mode (m = 2).
    CremerPople5 {
        /// Total puckering amplitude Q in Angstroms.
        amplitude: f64,
        /// Phase angle φ₂ in degrees, [0°,360°).
        phase: f64,
    },
    /// Cremer-Pople coordinates of a six-membered ring: the m = 2 mode plus
    /// the phaseless m = 3 (ring-flip) mode, expressed in spherical form.
    CremerPople6 {
        /// Total puckering amplitude Q = √(q₂² + q₃²) in Angstroms.
        amplitude: f64,
        /// Phase angle φ₂ in degrees, [0°,360°).
        phase: f64,
        /// Polar angle θ = atan2(q₂, q₃) in degrees, [0°,180°]; θ near 0° or
        /// 180° is the chair pole, where the phase is undefined.
        theta: f64,
    },
    /// Altona-Sundaralingam pseudorotation coordinates of a five-membered
    /// ring, fitted from the endocyclic torsions.
    AltonaSundaralingam {
        /// Torsional puckering amplitude τₘ in degrees.
        amplitude: f64,
        /// Pseudorotation phase angle P in degrees, [0°,360°).
        phase: f64,
    },
    /// Strauss-Pickett description of a six-membered ring: the three flap
    /// dihedrals and the three flap angles. Intentionally under-reduced; no
    /// scalar amplitude/phase pair and no inverse is defined.
    StraussPickett {
        /// Flap dihedrals α₁..α₃ in degrees, (−180°,180°].
        alphas: [f64; 3],
        /// Flap bond angles β₁..β₃ in degrees, [0°,180°].
        betas: [f64; 3],
    },
}

impl PuckeringDescriptor {
    /// The ring size this descriptor family applies to.
    pub fn ring_size(&self) -> usize {
        match self {
            Self::CremerPople5 { .. } | Self::AltonaSundaralingam { .. } => 5,
            Self::CremerPople6 { .. } | Self::StraussPickett { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_size_matches_family() {
        let cp5 = PuckeringDescriptor::CremerPople5 {
            amplitude: 0.35,
            phase: 288.0,
        };
        let cp6 = PuckeringDescriptor::CremerPople6 {
            amplitude: 0.67,
            phase: 0.0,
            theta: 90.0,
        };
        assert_eq!(cp5.ring_size(), 5);
        assert_eq!(cp6.ring_size(), 6);
        assert_eq!(
            PuckeringDescriptor::AltonaSundaralingam {
                amplitude: 35.0,
                phase: 18.0
            }
            .ring_size(),
            5
        );
        assert_eq!(
            PuckeringDescriptor::StraussPickett {
                alphas: [0.0; 3],
                betas: [109.5; 3]
            }
            .ring_size(),
            6
        );
    }
}

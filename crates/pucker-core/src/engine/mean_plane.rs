use crate::core::models::ring::RingGeometry;
use crate::engine::error::PuckerError;
use nalgebra::{Point3, Vector3};
use std::f64::consts::TAU;

// Below this, |R1 × R2| defines no plane orientation.
const PLANE_EPS: f64 = 1e-12;

/// The best-fit plane through a ring, defined by the Cremer-Pople R1/R2
/// construction: origin at the ring centroid, unit normal along R1 × R2.
///
/// Derived per transform call from the current geometry; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanPlane {
    /// Geometric center of the ring atoms.
    pub centroid: Point3<f64>,
    /// Unit normal of the mean plane.
    pub normal: Vector3<f64>,
}

impl MeanPlane {
    /// Fits the mean plane of a ring.
    ///
    /// # Errors
    ///
    /// [`PuckerError::DegenerateRing`] when the plane-defining vectors are
    /// (anti)parallel, i.e. the atoms are colinear and span no plane.
    pub fn fit(ring: &RingGeometry) -> Result<Self, PuckerError> {
        let n = ring.len() as f64;
        let centroid = Point3::from(
            ring.points()
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / n,
        );

        let mut r1 = Vector3::zeros();
        let mut r2 = Vector3::zeros();
        for (j, p) in ring.points().iter().enumerate() {
            let rj = p - centroid;
            let w = TAU * j as f64 / n;
            r1 += rj * w.sin();
            r2 += rj * w.cos();
        }

        let cross = r1.cross(&r2);
        let norm = cross.norm();
        if norm < PLANE_EPS {
            return Err(PuckerError::DegenerateRing(
                "ring atoms span no plane (R1 x R2 vanishes)".to_string(),
            ));
        }

        Ok(Self {
            centroid,
            normal: cross / norm,
        })
    }

    /// Signed displacement of a point along the plane normal.
    pub fn elevation_of(&self, point: &Point3<f64>) -> f64 {
        (point - self.centroid).dot(&self.normal)
    }

    /// Signed displacements of every ring atom, in ring order.
    pub fn elevations(&self, ring: &RingGeometry) -> Vec<f64> {
        ring.points().iter().map(|p| self.elevation_of(p)).collect()
    }
}

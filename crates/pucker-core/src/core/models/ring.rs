use nalgebra::Point3;

/// An ordered sequence of ring atom positions.
///
/// The order follows ring connectivity: consecutive entries are bonded, and
/// the last entry is bonded back to the first. Every derived puckering
/// descriptor depends on this order; reordering the atoms invalidates them.
/// The caller (ring extraction) is responsible for supplying connectivity
/// order — this type never reorders.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    points: Vec<Point3<f64>>,
}

impl RingGeometry {
    /// Wraps an ordered list of ring atom positions.
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// The number of ring atoms.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The ring atom positions, in connectivity order.
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Consumes the ring and returns the coordinate list, e.g. for writing.
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

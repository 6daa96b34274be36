use nalgebra::Point3;

// Below this, a direction vector is treated as zero and the quantity that
// depends on it as undefined.
const DEGENERACY_EPS: f64 = 1e-12;

pub fn bond_length(p0: &Point3<f64>, p1: &Point3<f64>) -> f64 {
    (p1 - p0).norm()
}

/// Angle at `p1` between `p1→p0` and `p1→p2`, in degrees within [0°,180°].
/// `None` when either arm has zero length.
pub fn bond_angle(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<f64> {
    let v1 = p0 - p1;
    let v2 = p2 - p1;
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < DEGENERACY_EPS || n2 < DEGENERACY_EPS {
        return None;
    }
    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Signed dihedral about the `p1`-`p2` axis, in degrees within (−180°,180°].
/// `None` when any three consecutive points are colinear (zero plane normal).
pub fn dihedral(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
) -> Option<f64> {
    let b0 = p1 - p0;
    let b1 = p2 - p1;
    let b2 = p3 - p2;

    let n1 = b0.cross(&b1);
    let n2 = b1.cross(&b2);
    if n1.norm() < DEGENERACY_EPS || n2.norm() < DEGENERACY_EPS {
        return None;
    }

    let m1 = n1.cross(&b1.normalize());
    let x = n1.dot(&n2);
    let y = m1.dot(&n2);
    Some(y.atan2(x).to_degrees())
}

/// Maps an angle in degrees into [0°,360°).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bond_length_is_euclidean_distance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 4.5);
        assert_relative_eq!(bond_length(&a, &b), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn bond_angle_right_and_straight() {
        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        let neg_x = Point3::new(-1.0, 0.0, 0.0);
        assert_relative_eq!(bond_angle(&x, &o, &y).unwrap(), 90.0, epsilon = 1e-10);
        assert_relative_eq!(bond_angle(&x, &o, &neg_x).unwrap(), 180.0, epsilon = 1e-10);
    }

    #[test]
    fn bond_angle_degenerate_when_arm_vanishes() {
        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(1.0, 0.0, 0.0);
        assert_eq!(bond_angle(&o, &o, &x), None);
    }

    #[test]
    fn dihedral_known_rotations() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 0.0, 1.5);
        let cis = dihedral(
            &Point3::new(1.0, 0.0, 0.0),
            &p1,
            &p2,
            &Point3::new(1.0, 0.0, 1.5),
        )
        .unwrap();
        let trans = dihedral(
            &Point3::new(1.0, 0.0, 0.0),
            &p1,
            &p2,
            &Point3::new(-1.0, 0.0, 1.5),
        )
        .unwrap();
        let quarter = dihedral(
            &Point3::new(1.0, 1.0, 0.0),
            &p1,
            &p2,
            &Point3::new(1.0, -1.0, 1.5),
        )
        .unwrap();
        assert_relative_eq!(cis, 0.0, epsilon = 1e-10);
        assert_relative_eq!(trans.abs(), 180.0, epsilon = 1e-10);
        assert_relative_eq!(quarter, 90.0, epsilon = 1e-10);
    }

    #[test]
    fn dihedral_is_antisymmetric_under_reversal() {
        let p0 = Point3::new(1.2, -0.3, 0.4);
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(0.1, 1.4, 0.2);
        let p3 = Point3::new(-0.9, 1.8, 1.1);
        let fwd = dihedral(&p0, &p1, &p2, &p3).unwrap();
        let rev = dihedral(&p3, &p2, &p1, &p0).unwrap();
        assert_relative_eq!(fwd, -rev, epsilon = 1e-10);
    }

    #[test]
    fn dihedral_degenerate_when_colinear() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(1.0, 0.0, 0.0);
        let p2 = Point3::new(2.0, 0.0, 0.0);
        let p3 = Point3::new(3.0, 1.0, 0.0);
        assert_eq!(dihedral(&p0, &p1, &p2, &p3), None);
    }

    #[test]
    fn coplanar_points_give_flat_dihedral() {
        let d = dihedral(
            &Point3::new(1.0, 1.0, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, -1.0, 0.0),
            &Point3::new(2.0, -2.5, 0.0),
        )
        .unwrap();
        assert!(d.abs() < 1e-9 || (d.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_degrees_wraps_into_domain() {
        assert_relative_eq!(normalize_degrees(-72.0), 288.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_degrees(725.0), 5.0, epsilon = 1e-12);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }
}

//! Constitutive matrices for isotropic membrane and plate action

use super::Mat3;
use crate::error::{require_poisson, require_positive, ShellResult};

/// Membrane constitutive matrix [Dm] for plane stress, integrated through the thickness
///
/// ```text
/// Dm = t E / (1 - nu^2) * [1   nu  0         ]
///                         [nu  1   0         ]
///                         [0   0   (1 - nu)/2]
/// ```
/// Relates membrane forces per unit length (N11, N22, N12) to strains.
pub fn plane_stress(e: f64, nu: f64, t: f64) -> ShellResult<Mat3> {
    check(e, nu, t)?;
    Ok(isotropic(e * t / (1.0 - nu * nu), nu))
}

/// Bending constitutive matrix [Db] for Kirchhoff plate bending
///
/// `Db = E t^3 / (12 (1 - nu^2)) * [...]` with the same pattern as [`plane_stress`].
/// Relates moments per unit length (M11, M22, M12) to curvatures.
pub fn plate_bending(e: f64, nu: f64, t: f64) -> ShellResult<Mat3> {
    check(e, nu, t)?;
    Ok(isotropic(e * t.powi(3) / (12.0 * (1.0 - nu * nu)), nu))
}

#[rustfmt::skip]
fn isotropic(factor: f64, nu: f64) -> Mat3 {
    Mat3::new(
        factor,      nu * factor, 0.0,
        nu * factor, factor,      0.0,
        0.0,         0.0,         factor * (1.0 - nu) / 2.0,
    )
}

fn check(e: f64, nu: f64, t: f64) -> ShellResult<()> {
    require_positive("e", e)?;
    require_poisson(nu)?;
    require_positive("thickness", t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_membrane_constitutive_isotropic() {
        let dm = plane_stress(200e3, 0.3, 10.0).unwrap();

        assert_relative_eq!(dm, dm.transpose(), epsilon = 1e-9);
        assert!(dm[(0, 0)] > 0.0);
        assert!(dm[(1, 1)] > 0.0);
        assert!(dm[(2, 2)] > 0.0);
        assert_relative_eq!(dm[(2, 2)], 200e3 * 10.0 / (2.0 * 1.3), max_relative = 1e-12);
    }

    #[test]
    fn test_membrane_is_linear_in_thickness_and_modulus() {
        let d1 = plane_stress(25_000.0, 0.2, 200.0).unwrap();
        let d2 = plane_stress(25_000.0, 0.2, 400.0).unwrap();
        let d3 = plane_stress(50_000.0, 0.2, 200.0).unwrap();
        assert_relative_eq!(d2, d1 * 2.0, max_relative = 1e-12);
        assert_relative_eq!(d3, d1 * 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_bending_is_cubic_in_thickness() {
        let d1 = plate_bending(25_000.0, 0.2, 200.0).unwrap();
        let d2 = plate_bending(25_000.0, 0.2, 400.0).unwrap();
        assert_relative_eq!(d2, d1 * 8.0, max_relative = 1e-12);

        let expected = 25_000.0 * 200.0_f64.powi(3) / (12.0 * 0.96);
        assert_relative_eq!(d1[(0, 0)], expected, max_relative = 1e-12);
        assert_relative_eq!(d1[(0, 1)], 0.2 * expected, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        assert!(plane_stress(0.0, 0.2, 1.0).is_err());
        assert!(plane_stress(1.0, 1.0, 1.0).is_err());
        assert!(plate_bending(1.0, 0.2, -1.0).is_err());
        assert!(plate_bending(1.0, f64::NAN, 1.0).is_err());
    }
}

//! 2D Jacobian of the bilinear map from natural to local element coordinates

use super::shape::quad4_derivatives;
use super::{Mat2, Vec2};

/// Jacobian at one natural point
///
/// ```text
/// J = [dx/dxi   dy/dxi ]
///     [dx/deta  dy/deta]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jacobian {
    pub matrix: Mat2,
    pub det: f64,
    /// Explicit inverse, or zero when |det| is below the tolerance
    pub inverse: Mat2,
    singular: bool,
}

impl Jacobian {
    /// Evaluate J at (xi, eta) for the given in-plane corner coordinates
    pub fn at(corners: &[Vec2; 4], xi: f64, eta: f64, tolerance: f64) -> Self {
        let (dn_dxi, dn_deta) = quad4_derivatives(xi, eta);

        let mut matrix = Mat2::zeros();
        for (i, c) in corners.iter().enumerate() {
            matrix[(0, 0)] += dn_dxi[i] * c.x;
            matrix[(0, 1)] += dn_dxi[i] * c.y;
            matrix[(1, 0)] += dn_deta[i] * c.x;
            matrix[(1, 1)] += dn_deta[i] * c.y;
        }

        let det = matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)];
        let singular = det.is_nan() || det.abs() < tolerance;

        let inverse = if singular {
            Mat2::zeros()
        } else {
            Mat2::new(
                matrix[(1, 1)] / det,
                -matrix[(0, 1)] / det,
                -matrix[(1, 0)] / det,
                matrix[(0, 0)] / det,
            )
        };

        Self {
            matrix,
            det,
            inverse,
            singular,
        }
    }

    /// True when |det J| is below the tolerance (or not a number)
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Map natural derivatives to physical ones: [d/dx; d/dy] = J^-1 [d/dxi; d/deta]
    pub fn to_physical<const N: usize>(
        &self,
        dn_dxi: &[f64; N],
        dn_deta: &[f64; N],
    ) -> ([f64; N], [f64; N]) {
        let inv = &self.inverse;
        let mut dn_dx = [0.0; N];
        let mut dn_dy = [0.0; N];
        for i in 0..N {
            dn_dx[i] = inv[(0, 0)] * dn_dxi[i] + inv[(0, 1)] * dn_deta[i];
            dn_dy[i] = inv[(1, 0)] * dn_dxi[i] + inv[(1, 1)] * dn_deta[i];
        }
        (dn_dx, dn_dy)
    }

    /// Physical derivatives of the Quad4 functions at (xi, eta)
    pub fn physical_derivatives(&self, xi: f64, eta: f64) -> ([f64; 4], [f64; 4]) {
        let (dn_dxi, dn_deta) = quad4_derivatives(xi, eta);
        self.to_physical(&dn_dxi, &dn_deta)
    }
}

//! Strain-displacement matrices for membrane and plate bending action
//!
//! Membrane DOFs per node: (u, v). Bending DOFs per node: (w, rx, ry).
//!
//! Plate rotations follow the Discrete Kirchhoff Quadrilateral (DKQ):
//! - normal rotations beta_x = ry, beta_y = -rx (so beta = -grad w on Kirchhoff plates)
//! - beta is interpolated with the 8-node serendipity functions
//! - midside rotations are eliminated with a cubic w and a linear normal
//!   rotation along each edge, enforcing zero transverse shear there
//!
//! Curvatures: kx = d(beta_x)/dx, ky = d(beta_y)/dy, kxy = d(beta_x)/dy + d(beta_y)/dx,
//! i.e. kx = -d2w/dx2 for a Kirchhoff plate.

use super::jacobian::Jacobian;
use super::shape::serendipity8_derivatives;
use super::{Mat3x12, Mat3x8, Vec2};

/// Edges shorter than this fraction of the longest edge count as collapsed
const COLLAPSED_EDGE_RATIO: f64 = 1e-9;

/// Membrane strain-displacement matrix [Bm] at (xi, eta)
///
/// 3 rows (eps_x, eps_y, gamma_xy), 8 columns (u1, v1, u2, v2, u3, v3, u4, v4)
pub fn membrane_b(jac: &Jacobian, xi: f64, eta: f64) -> Mat3x8 {
    let (dn_dx, dn_dy) = jac.physical_derivatives(xi, eta);

    let mut b = Mat3x8::zeros();
    for i in 0..4 {
        b[(0, 2 * i)] = dn_dx[i];
        b[(1, 2 * i + 1)] = dn_dy[i];
        b[(2, 2 * i)] = dn_dy[i];
        b[(2, 2 * i + 1)] = dn_dx[i];
    }
    b
}

/// Bending strain-displacement matrix [Bb] at (xi, eta)
///
/// 3 rows (kx, ky, kxy), 12 columns (w1, rx1, ry1, ..., w4, rx4, ry4)
pub fn bending_b(corners: &[Vec2; 4], jac: &Jacobian, xi: f64, eta: f64) -> Mat3x12 {
    let (hx, hy) = rotation_coefficients(corners);
    let (dn_dxi, dn_deta) = serendipity8_derivatives(xi, eta);
    let (dn_dx, dn_dy) = jac.to_physical(&dn_dxi, &dn_deta);

    let mut b = Mat3x12::zeros();
    for n in 0..8 {
        for col in 0..12 {
            b[(0, col)] += dn_dx[n] * hx[n][col];
            b[(1, col)] += dn_dy[n] * hy[n][col];
            b[(2, col)] += dn_dy[n] * hx[n][col] + dn_dx[n] * hy[n][col];
        }
    }
    b
}

/// Coefficients expressing beta_x and beta_y at the 8 serendipity nodes in terms of
/// the 12 bending DOFs
fn rotation_coefficients(corners: &[Vec2; 4]) -> ([[f64; 12]; 8], [[f64; 12]; 8]) {
    let mut hx = [[0.0; 12]; 8];
    let mut hy = [[0.0; 12]; 8];

    for i in 0..4 {
        hx[i][3 * i + 2] = 1.0;
        hy[i][3 * i + 1] = -1.0;
    }

    let longest = (0..4)
        .map(|k| (corners[(k + 1) % 4] - corners[k]).norm())
        .fold(0.0_f64, f64::max);

    for k in 0..4 {
        let (i, j) = (k, (k + 1) % 4);
        let row = 4 + k;
        let edge = corners[j] - corners[i];
        let len = edge.norm();

        if len <= COLLAPSED_EDGE_RATIO * longest {
            // Collapsed edge (triangle): midside rotation is the corner mean
            for n in [i, j] {
                hx[row][3 * n + 2] += 0.5;
                hy[row][3 * n + 1] -= 0.5;
            }
            continue;
        }

        let c = edge.x / len;
        let s = edge.y / len;
        let a = 1.5 / len;

        // beta_x(k) = a c (w_i - w_j) + cxx (bx_i + bx_j) + cxy (by_i + by_j)
        // beta_y(k) = a s (w_i - w_j) + cxy (bx_i + bx_j) + cyy (by_i + by_j)
        let cxx = 0.5 * s * s - 0.25 * c * c;
        let cxy = -0.75 * c * s;
        let cyy = 0.5 * c * c - 0.25 * s * s;

        hx[row][3 * i] += a * c;
        hx[row][3 * j] -= a * c;
        hy[row][3 * i] += a * s;
        hy[row][3 * j] -= a * s;

        for n in [i, j] {
            // bx_n = ry_n, by_n = -rx_n
            hx[row][3 * n + 2] += cxx;
            hx[row][3 * n + 1] -= cxy;
            hy[row][3 * n + 2] += cxy;
            hy[row][3 * n + 1] -= cyy;
        }
    }

    (hx, hy)
}

//! Isoparametric shape functions and the 2x2 Gauss rule
//!
//! Corner order in natural coordinates (xi, eta):
//! 1 = (-1,-1), 2 = (1,-1), 3 = (1,1), 4 = (-1,1)
//! Midside nodes of the serendipity set: 5 on 1-2, 6 on 2-3, 7 on 3-4, 8 on 4-1.

/// Natural coordinates of the four corners
pub const CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Natural coordinates of the four midside points
pub const MIDSIDES: [(f64, f64); 4] = [(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)];

const GP: f64 = 0.577_350_269_189_625_8; // 1/sqrt(3)

/// 2x2 Gauss-Legendre points (xi, eta), ordered like the corners; all weights are 1
pub const GAUSS_POINTS_2X2: [(f64, f64); 4] = [(-GP, -GP), (GP, -GP), (GP, GP), (-GP, GP)];

/// Bilinear Quad4 shape functions N_i = 1/4 (1 + xi xi_i)(1 + eta eta_i)
pub fn quad4(xi: f64, eta: f64) -> [f64; 4] {
    CORNERS.map(|(xi_i, eta_i)| 0.25 * (1.0 + xi * xi_i) * (1.0 + eta * eta_i))
}

/// Derivatives of the Quad4 functions: (dN/dxi, dN/deta)
pub fn quad4_derivatives(xi: f64, eta: f64) -> ([f64; 4], [f64; 4]) {
    let dn_dxi = CORNERS.map(|(xi_i, eta_i)| 0.25 * xi_i * (1.0 + eta * eta_i));
    let dn_deta = CORNERS.map(|(xi_i, eta_i)| 0.25 * eta_i * (1.0 + xi * xi_i));
    (dn_dxi, dn_deta)
}

/// Eight-node serendipity functions, corners first then midsides
pub fn serendipity8(xi: f64, eta: f64) -> [f64; 8] {
    let mut n = [0.0; 8];
    for (i, &(xi_i, eta_i)) in CORNERS.iter().enumerate() {
        n[i] = 0.25 * (1.0 + xi * xi_i) * (1.0 + eta * eta_i) * (xi * xi_i + eta * eta_i - 1.0);
    }
    for (k, &(xi_k, eta_k)) in MIDSIDES.iter().enumerate() {
        n[4 + k] = if xi_k == 0.0 {
            0.5 * (1.0 - xi * xi) * (1.0 + eta * eta_k)
        } else {
            0.5 * (1.0 + xi * xi_k) * (1.0 - eta * eta)
        };
    }
    n
}

/// Derivatives of the serendipity functions: (dN/dxi, dN/deta)
pub fn serendipity8_derivatives(xi: f64, eta: f64) -> ([f64; 8], [f64; 8]) {
    let mut dn_dxi = [0.0; 8];
    let mut dn_deta = [0.0; 8];
    for (i, &(xi_i, eta_i)) in CORNERS.iter().enumerate() {
        dn_dxi[i] = 0.25 * xi_i * (1.0 + eta * eta_i) * (2.0 * xi * xi_i + eta * eta_i);
        dn_deta[i] = 0.25 * eta_i * (1.0 + xi * xi_i) * (xi * xi_i + 2.0 * eta * eta_i);
    }
    for (k, &(xi_k, eta_k)) in MIDSIDES.iter().enumerate() {
        if xi_k == 0.0 {
            dn_dxi[4 + k] = -xi * (1.0 + eta * eta_k);
            dn_deta[4 + k] = 0.5 * (1.0 - xi * xi) * eta_k;
        } else {
            dn_dxi[4 + k] = 0.5 * xi_k * (1.0 - eta * eta);
            dn_deta[4 + k] = -eta * (1.0 + xi * xi_k);
        }
    }
    (dn_dxi, dn_deta)
}

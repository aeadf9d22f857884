//! Element stiffness for the planar shell
//!
//! Membrane (bilinear plane stress) and plate bending (DKQ) are integrated
//! separately with the 2x2 Gauss rule, scattered into the 24x24 local matrix
//! and rotated to global coordinates.
//!
//! Local DOF order per node: [u, v, w, rx, ry, rz]
//! - membrane: u, v (indices 0, 1)
//! - bending: w, rx, ry (indices 2, 3, 4)
//! - drilling rz (index 5) has no stiffness unless stabilization is enabled

use crate::elements::ShellElement;
use crate::error::ShellResult;
use crate::math::{
    bending_b, membrane_b, plane_stress, plate_bending, Jacobian, Mat12, Mat24, Mat8,
    NodalRotation, GAUSS_POINTS_2X2,
};
use crate::options::ShellOptions;
use crate::outcome::{Checked, Degeneracy};

/// DOFs per node
pub const DOF_PER_NODE: usize = 6;

const MEMBRANE_DOFS: [usize; 2] = [0, 1];
const BENDING_DOFS: [usize; 3] = [2, 3, 4];
const DRILLING_DOF: usize = 5;

/// 24x24 element stiffness in global coordinates
///
/// Gauss points with a singular Jacobian are skipped and the result is tagged
/// [`Checked::Degenerate`]. A collapsed element normal yields a zero matrix,
/// also tagged degenerate. Material or thickness out of range is an error.
pub fn element_stiffness(
    element: &ShellElement,
    options: &ShellOptions,
) -> ShellResult<Checked<Mat24>> {
    let frame = element.local_frame();
    let k_local = element_local_stiffness(element, options)?;
    if frame.is_degenerate() {
        return Ok(k_local);
    }

    let rotation = NodalRotation::new(&frame);
    Ok(k_local.map(|k| rotation.to_global_stiffness(&k)))
}

/// 24x24 element stiffness in the element's local frame
pub fn element_local_stiffness(
    element: &ShellElement,
    options: &ShellOptions,
) -> ShellResult<Checked<Mat24>> {
    let material = element.material();
    let t = element.thickness();
    let dm = plane_stress(material.e(), material.nu(), t)?;
    let db = plate_bending(material.e(), material.nu(), t)?;

    let corners = element.corners();
    let frame = element.local_frame();
    if frame.is_degenerate() {
        log::warn!("Shell stiffness: element normal is undefined, returning zero matrix");
        return Ok(Checked::Degenerate {
            value: Mat24::zeros(),
            reason: Degeneracy::CollapsedNormal,
        });
    }
    let local = frame.local_corners(&corners);

    let mut km = Mat8::zeros();
    let mut kb = Mat12::zeros();
    let mut singular = Vec::new();
    let mut inverted = Vec::new();

    for (gp, &(xi, eta)) in GAUSS_POINTS_2X2.iter().enumerate() {
        let jac = Jacobian::at(&local, xi, eta, options.singular_tolerance);
        if jac.is_singular() {
            log::debug!("Shell stiffness: skipping Gauss point {} (det J = {:e})", gp, jac.det);
            singular.push(gp);
            continue;
        }
        if jac.det < 0.0 {
            inverted.push(gp);
        }
        let weight = jac.det.abs();

        let bm = membrane_b(&jac, xi, eta);
        km += bm.transpose() * dm * bm * weight;

        let bb = bending_b(&local, &jac, xi, eta);
        kb += bb.transpose() * db * bb * weight;
    }

    let mut k = scatter(&km, &kb);
    if element.is_triangle() {
        fold_collapsed_node(&mut k);
    }
    if options.drilling_stiffness_factor > 0.0 {
        stabilize_drilling(&mut k, options.drilling_stiffness_factor, element.node_count());
    }

    let reason = if !singular.is_empty() {
        Some(Degeneracy::SingularJacobian { gauss_points: singular })
    } else if !inverted.is_empty() {
        Some(Degeneracy::InvertedJacobian { gauss_points: inverted })
    } else {
        None
    };
    if let Some(r) = &reason {
        log::warn!("Shell stiffness: {}", r);
    }

    Ok(Checked::from_parts(k, reason))
}

/// Place the membrane and bending matrices into the 24x24 layout
fn scatter(km: &Mat8, kb: &Mat12) -> Mat24 {
    let mut k = Mat24::zeros();
    for i in 0..4 {
        for j in 0..4 {
            for (a, &da) in MEMBRANE_DOFS.iter().enumerate() {
                for (b, &db) in MEMBRANE_DOFS.iter().enumerate() {
                    k[(DOF_PER_NODE * i + da, DOF_PER_NODE * j + db)] = km[(2 * i + a, 2 * j + b)];
                }
            }
            for (a, &da) in BENDING_DOFS.iter().enumerate() {
                for (b, &db) in BENDING_DOFS.iter().enumerate() {
                    k[(DOF_PER_NODE * i + da, DOF_PER_NODE * j + db)] = kb[(3 * i + a, 3 * j + b)];
                }
            }
        }
    }
    k
}

/// Merge node 4 into node 3 (they share a position) and zero the node 4 block
fn fold_collapsed_node(k: &mut Mat24) {
    let (n3, n4) = (2 * DOF_PER_NODE, 3 * DOF_PER_NODE);
    for row in 0..24 {
        for d in 0..DOF_PER_NODE {
            let v = k[(row, n4 + d)];
            k[(row, n3 + d)] += v;
            k[(row, n4 + d)] = 0.0;
        }
    }
    for col in 0..24 {
        for d in 0..DOF_PER_NODE {
            let v = k[(n4 + d, col)];
            k[(n3 + d, col)] += v;
            k[(n4 + d, col)] = 0.0;
        }
    }
}

/// Weak drilling spring: factor x the smallest positive rotational bending diagonal
fn stabilize_drilling(k: &mut Mat24, factor: f64, nodes: usize) {
    let reference = (0..nodes)
        .flat_map(|n| {
            let base = DOF_PER_NODE * n;
            [k[(base + 3, base + 3)], k[(base + 4, base + 4)]]
        })
        .filter(|&v| v > 0.0)
        .fold(f64::INFINITY, f64::min);

    if !reference.is_finite() {
        return;
    }
    for n in 0..nodes {
        let idx = DOF_PER_NODE * n + DRILLING_DOF;
        k[(idx, idx)] += factor * reference;
    }
}

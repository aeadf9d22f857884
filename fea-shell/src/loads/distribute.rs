//! Consistent nodal forces for uniform area loads

use super::{AreaLoad, NodalForceMap};
use crate::elements::ShellElement;
use crate::error::{ShellError, ShellResult};
use crate::math::{shape, Jacobian, GAUSS_POINTS_2X2};
use crate::options::ShellOptions;
use crate::outcome::{Checked, Degeneracy};

/// Integrate q * N_i over the element with the 2x2 Gauss rule
///
/// Each node receives a force (no moment) along the load direction. The
/// nodal forces sum to q x area. For a three-node element the share of the
/// collapsed fourth corner goes to the third node.
///
/// The weights use the signed det J, which the 2x2 rule integrates exactly,
/// so a concave element still receives q x area in total. Negative det J
/// tags the result [`Degeneracy::InvertedJacobian`].
pub fn distribute_area_load(
    element: &ShellElement,
    load: &AreaLoad,
    options: &ShellOptions,
) -> ShellResult<Checked<NodalForceMap>> {
    if !load.intensity.is_finite() {
        return Err(ShellError::InvalidParameter {
            name: "intensity",
            value: load.intensity,
            reason: "must be finite",
        });
    }

    let nodes = element.nodes();
    let frame = element.local_frame();
    if frame.is_degenerate() {
        log::warn!("Area load: element normal is undefined, no forces distributed");
        return Ok(Checked::Degenerate {
            value: NodalForceMap::new(),
            reason: Degeneracy::CollapsedNormal,
        });
    }

    let local = frame.local_corners(&element.corners());
    let mut weights = [0.0; 4];
    let mut singular = Vec::new();
    let mut inverted = Vec::new();
    for (gp, &(xi, eta)) in GAUSS_POINTS_2X2.iter().enumerate() {
        let jac = Jacobian::at(&local, xi, eta, options.singular_tolerance);
        if jac.is_singular() {
            singular.push(gp);
            continue;
        }
        if jac.det < 0.0 {
            inverted.push(gp);
        }
        let n = shape::quad4(xi, eta);
        for (w, ni) in weights.iter_mut().zip(n.iter()) {
            *w += ni * jac.det;
        }
    }

    if element.is_triangle() {
        weights[2] += weights[3];
        weights[3] = 0.0;
    }

    let direction = load.direction_vector(&frame) * load.intensity;
    let mut forces = NodalForceMap::new();
    for (node, w) in nodes.iter().zip(weights.iter()) {
        forces.add_force(&node.name, &(direction * *w));
    }

    let reason = if !singular.is_empty() {
        Some(Degeneracy::SingularJacobian { gauss_points: singular })
    } else if !inverted.is_empty() {
        Some(Degeneracy::InvertedJacobian { gauss_points: inverted })
    } else {
        None
    };
    if let Some(r) = &reason {
        log::warn!("Area load: {}", r);
    }
    Ok(Checked::from_parts(forces, reason))
}

/// Area of a planar element, half the magnitude of the diagonal cross product
pub fn element_area(element: &ShellElement) -> f64 {
    let c = element.corners();
    0.5 * (c[2] - c[0]).cross(&(c[3] - c[1])).norm()
}
